//! Mapping von UI-Intents auf mutierende Layer-Commands.

use super::{LayerCommand, LayerIntent, ManagerState};
use crate::core::PaintValue;

/// Übersetzt einen `LayerIntent` in eine Sequenz ausführbarer `LayerCommand`s.
///
/// Verschiebungen, die die Reihenfolge nicht ändern würden, erzeugen keine
/// Commands und damit auch keinen Engine-Sync.
pub fn map_intent_to_commands(state: &ManagerState, intent: LayerIntent) -> Vec<LayerCommand> {
    match intent {
        LayerIntent::PanelToggleRequested => vec![LayerCommand::TogglePanel],
        LayerIntent::LayerListToggleRequested => vec![LayerCommand::ToggleLayerList],
        LayerIntent::LayerVisibilityToggled { layer_id, visible } => {
            vec![LayerCommand::SetLayerVisibility { layer_id, visible }]
        }
        LayerIntent::ToggleAllRequested => vec![LayerCommand::ToggleAllLayers { target: None }],
        LayerIntent::LayerOpacityChanged { layer_id, opacity } => {
            vec![LayerCommand::SetLayerOpacity { layer_id, opacity }]
        }
        LayerIntent::MoveLayerUpRequested { layer_id } => {
            let order = state.layers.order();
            match order.index_of(&layer_id) {
                Some(index) if index > 0 => vec![
                    LayerCommand::MoveLayerUp { layer_id },
                    LayerCommand::SyncLayerOrder,
                ],
                _ => Vec::new(),
            }
        }
        LayerIntent::MoveLayerDownRequested { layer_id } => {
            let order = state.layers.order();
            match order.index_of(&layer_id) {
                Some(index) if index + 1 < order.len() => vec![
                    LayerCommand::MoveLayerDown { layer_id },
                    LayerCommand::SyncLayerOrder,
                ],
                _ => Vec::new(),
            }
        }
        LayerIntent::LayerDragStarted { layer_id } => {
            if state.layers.contains(&layer_id) {
                vec![LayerCommand::BeginDrag { layer_id }]
            } else {
                Vec::new()
            }
        }
        LayerIntent::LayerDragHovered { layer_id } => match state.panel.dragged_layer() {
            Some(dragged) if dragged != layer_id => vec![LayerCommand::HoverDrag { layer_id }],
            _ => Vec::new(),
        },
        LayerIntent::LayerDropped { target_id } => {
            let Some(dragged) = state.panel.dragged_layer() else {
                return Vec::new();
            };
            match state.layers.order().placement_for(dragged, &target_id) {
                Some(placement) => vec![
                    LayerCommand::MoveLayerTo {
                        layer_id: dragged.to_string(),
                        target_id,
                        placement,
                    },
                    LayerCommand::SyncLayerOrder,
                    LayerCommand::EndDrag,
                ],
                None => vec![LayerCommand::EndDrag],
            }
        }
        LayerIntent::LayerDragEnded => {
            if state.panel.drag.is_some() {
                vec![LayerCommand::EndDrag]
            } else {
                Vec::new()
            }
        }
        LayerIntent::StyleEditorToggleRequested { layer_id } => {
            if state.panel.is_editor_open_for(&layer_id) {
                vec![LayerCommand::CloseStyleEditor]
            } else {
                vec![LayerCommand::OpenStyleEditor { layer_id }]
            }
        }
        LayerIntent::StyleDraftChanged {
            layer_id,
            property,
            value,
        } => match value {
            // Regler schreiben live in die Engine, Farben erst bei "Apply"
            PaintValue::Number(_) => vec![
                LayerCommand::SetStyleDraft {
                    layer_id: layer_id.clone(),
                    property: property.clone(),
                    value: value.clone(),
                },
                LayerCommand::PreviewPaintProperty {
                    layer_id,
                    property,
                    value,
                },
            ],
            PaintValue::Color(_) => vec![LayerCommand::SetStyleDraft {
                layer_id,
                property,
                value,
            }],
        },
        LayerIntent::ApplyStylesRequested { layer_id } => {
            vec![LayerCommand::ApplyStyles { layer_id }]
        }
        LayerIntent::ResetStylesRequested { layer_id } => {
            vec![LayerCommand::ResetStyles { layer_id }]
        }
        LayerIntent::RemoveLayerRequested { layer_id } => {
            vec![LayerCommand::RemoveLayer { layer_id }]
        }
        LayerIntent::AddLayerRequested { descriptor } => {
            vec![LayerCommand::AddLayer { descriptor }]
        }
    }
}

#[cfg(test)]
mod tests;
