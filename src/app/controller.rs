//! Layer-Controller für zentrale Event-Verarbeitung.

use super::{LayerCommand, LayerIntent, ManagerState};
use crate::engine::MapEngine;

/// Orchestriert UI-Events und Use-Cases auf ManagerState und Engine.
#[derive(Default)]
pub struct LayerController;

impl LayerController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut ManagerState,
        engine: &mut dyn MapEngine,
        intent: LayerIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, engine, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &ManagerState, intent: LayerIntent) -> Vec<LayerCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf ManagerState und Engine aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut ManagerState,
        engine: &mut dyn MapEngine,
        command: LayerCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Panel ===
            LayerCommand::TogglePanel => handlers::panel::toggle_panel(state),
            LayerCommand::ToggleLayerList => handlers::panel::toggle_list(state),
            LayerCommand::BeginDrag { layer_id } => handlers::panel::begin_drag(state, layer_id),
            LayerCommand::HoverDrag { layer_id } => handlers::panel::hover_drag(state, layer_id),
            LayerCommand::EndDrag => handlers::panel::end_drag(state),

            // === Sichtbarkeit & Opacity ===
            LayerCommand::SetLayerVisibility { layer_id, visible } => {
                handlers::layers::set_visibility(state, engine, &layer_id, visible)
            }
            LayerCommand::ToggleAllLayers { target } => {
                handlers::layers::toggle_all(state, engine, target)
            }
            LayerCommand::SetLayerOpacity { layer_id, opacity } => {
                handlers::layers::set_opacity(state, engine, &layer_id, opacity)
            }

            // === Reihenfolge ===
            LayerCommand::MoveLayerUp { layer_id } => handlers::order::move_up(state, &layer_id),
            LayerCommand::MoveLayerDown { layer_id } => {
                handlers::order::move_down(state, &layer_id)
            }
            LayerCommand::MoveLayerTo {
                layer_id,
                target_id,
                placement,
            } => handlers::order::move_to(state, &layer_id, &target_id, placement),
            LayerCommand::SyncLayerOrder => handlers::order::sync(state, engine),

            // === Style-Editor ===
            LayerCommand::OpenStyleEditor { layer_id } => {
                handlers::style::open_editor(state, engine, &layer_id)
            }
            LayerCommand::CloseStyleEditor => handlers::style::close_editor(state),
            LayerCommand::SetStyleDraft {
                layer_id,
                property,
                value,
            } => handlers::style::set_draft(state, &layer_id, &property, value),
            LayerCommand::PreviewPaintProperty {
                layer_id,
                property,
                value,
            } => handlers::style::preview(state, engine, &layer_id, &property, value),
            LayerCommand::ApplyStyles { layer_id } => {
                handlers::style::apply(state, engine, &layer_id)
            }
            LayerCommand::ResetStyles { layer_id } => {
                handlers::style::reset(state, engine, &layer_id)
            }

            // === Lebenszyklus ===
            LayerCommand::AddLayer { descriptor } => handlers::layers::add(state, descriptor)?,
            LayerCommand::RemoveLayer { layer_id } => {
                handlers::layers::remove(state, engine, &layer_id)
            }
        }

        Ok(())
    }
}
