//! Host-Schnittstelle des Layer-Managers.
//!
//! Der Host erzeugt den Manager aus [`ManagerOptions`], hängt ihn mit
//! [`LayerManager::on_add`] an eine Engine und leitet UI-Events über
//! [`LayerManager::dispatch`] bzw. [`LayerManager::show`] weiter.

use super::use_cases::lifecycle;
use super::{LayerController, LayerIntent, ManagerState};
use crate::core::LayerDescriptor;
use crate::engine::MapEngine;
use crate::shared::{ManagerOptions, PanelPosition};

/// Griff auf das angehängte Panel (Rückgabe von `on_add`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelHandle {
    /// egui-ID des Panel-Bereichs
    pub area_id: egui::Id,
    /// Kartenecke des Panels
    pub position: PanelPosition,
}

/// Layer-Manager: Zustand, Controller und (optional) angehängte Engine.
pub struct LayerManager {
    state: ManagerState,
    controller: LayerController,
    engine: Option<Box<dyn MapEngine>>,
}

impl LayerManager {
    /// egui-ID des Panel-Bereichs.
    pub const AREA_ID: &str = "map_layer_manager";

    /// Erstellt einen Manager ohne Engine.
    pub fn new(options: ManagerOptions) -> Self {
        Self {
            state: ManagerState::from_options(options),
            controller: LayerController::new(),
            engine: None,
        }
    }

    /// Hängt den Manager an eine Engine. Eine bisherige Engine wird ersetzt.
    pub fn on_add(&mut self, engine: Box<dyn MapEngine>) -> PanelHandle {
        if self.engine.replace(engine).is_some() {
            log::warn!("Layer-Manager war bereits angehängt, Engine ersetzt");
        }
        log::info!(
            "Layer-Manager angehängt ({} Layer, Position {})",
            self.state.layers.len(),
            self.state.panel.position.as_str()
        );
        PanelHandle {
            area_id: egui::Id::new(Self::AREA_ID),
            position: self.state.panel.position,
        }
    }

    /// Löst den Manager von der Engine und gibt sie zurück.
    pub fn on_remove(&mut self) -> Option<Box<dyn MapEngine>> {
        let engine = self.engine.take();
        if engine.is_some() {
            log::info!("Layer-Manager entfernt");
        }
        engine
    }

    /// Gibt `true` zurück, wenn eine Engine angehängt ist.
    pub fn is_attached(&self) -> bool {
        self.engine.is_some()
    }

    /// Kartenecke des Panels.
    pub fn position(&self) -> PanelPosition {
        self.state.panel.position
    }

    /// Read-only Sicht auf den Zustand.
    pub fn state(&self) -> &ManagerState {
        &self.state
    }

    /// Angehängte Engine.
    pub fn engine(&self) -> Option<&dyn MapEngine> {
        self.engine.as_deref()
    }

    /// Registriert einen Layer unten im Panel.
    pub fn add_layer(&mut self, descriptor: LayerDescriptor) -> anyhow::Result<()> {
        match self.engine.as_deref_mut() {
            Some(engine) => self.controller.handle_intent(
                &mut self.state,
                engine,
                LayerIntent::AddLayerRequested { descriptor },
            ),
            None => {
                let layer_id = descriptor.id.clone();
                if !lifecycle::add_layer(&mut self.state, descriptor) {
                    anyhow::bail!("Layer '{}' wird bereits verwaltet", layer_id);
                }
                Ok(())
            }
        }
    }

    /// Entfernt einen Layer aus Panel und (falls angehängt) Engine.
    pub fn remove_layer(&mut self, layer_id: &str) -> anyhow::Result<()> {
        match self.engine.as_deref_mut() {
            Some(engine) => self.controller.handle_intent(
                &mut self.state,
                engine,
                LayerIntent::RemoveLayerRequested {
                    layer_id: layer_id.to_string(),
                },
            ),
            None => {
                lifecycle::forget_layer(&mut self.state, layer_id);
                Ok(())
            }
        }
    }

    /// Blendet alle Layer ein bzw. aus.
    pub fn toggle_all(&mut self) -> anyhow::Result<()> {
        self.dispatch(LayerIntent::ToggleAllRequested)
    }

    /// Verarbeitet einen UI-Intent. Ohne Engine wird er verworfen.
    pub fn dispatch(&mut self, intent: LayerIntent) -> anyhow::Result<()> {
        let Some(engine) = self.engine.as_deref_mut() else {
            log::warn!("Layer-Manager nicht angehängt, Intent verworfen: {:?}", intent);
            return Ok(());
        };
        self.controller.handle_intent(&mut self.state, engine, intent)
    }

    /// Rendert das Panel und verarbeitet die erzeugten Intents.
    pub fn show(&mut self, ctx: &egui::Context) {
        if self.engine.is_none() {
            return;
        }
        let events = crate::ui::render_layer_panel(ctx, &self.state);

        for event in events {
            if let Err(e) = self.dispatch(event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LayerType;
    use crate::engine::{EngineLayer, MemoryEngine};

    fn engine() -> Box<dyn MapEngine> {
        Box::new(
            MemoryEngine::new()
                .with_layer(EngineLayer::new("base", LayerType::Background))
                .with_layer(EngineLayer::new("b", LayerType::Fill))
                .with_layer(EngineLayer::new("a", LayerType::Line)),
        )
    }

    fn manager() -> LayerManager {
        LayerManager::new(ManagerOptions::with_layers(vec![
            LayerDescriptor::new("a"),
            LayerDescriptor::new("b"),
        ]))
    }

    #[test]
    fn attach_returns_handle_with_position() {
        let mut manager = manager();

        let handle = manager.on_add(engine());

        assert!(manager.is_attached());
        assert_eq!(handle.position, PanelPosition::TopLeft);
        assert_eq!(manager.position(), PanelPosition::TopLeft);
    }

    #[test]
    fn detached_dispatch_is_ignored() {
        let mut manager = manager();

        manager
            .dispatch(LayerIntent::MoveLayerDownRequested {
                layer_id: "a".into(),
            })
            .expect("Dispatch ohne Engine ist kein Fehler");

        let order: Vec<&str> = manager.state().layers.order().iter().collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn reorder_after_attach_reaches_engine() {
        let mut manager = manager();
        manager.on_add(engine());

        manager
            .dispatch(LayerIntent::MoveLayerDownRequested {
                layer_id: "a".into(),
            })
            .expect("Dispatch erwartet");

        let engine = manager.engine().expect("Engine angehängt");
        assert_eq!(engine.style_layers(), vec!["base", "a", "b"]);
    }

    #[test]
    fn detach_returns_engine_and_keeps_state() {
        let mut manager = manager();
        manager.on_add(engine());

        let engine = manager.on_remove().expect("Engine erwartet");

        assert!(!manager.is_attached());
        assert_eq!(engine.style_layers().len(), 3);
        assert_eq!(manager.state().layers.len(), 2);
    }

    #[test]
    fn add_and_remove_work_while_detached() {
        let mut manager = manager();

        manager
            .add_layer(LayerDescriptor::new("c"))
            .expect("Layer erwartet");
        assert!(manager.add_layer(LayerDescriptor::new("c")).is_err());
        manager.remove_layer("a").expect("Entfernen erwartet");

        let order: Vec<&str> = manager.state().layers.order().iter().collect();
        assert_eq!(order, vec!["b", "c"]);
    }
}
