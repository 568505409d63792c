//! Use-Case-Funktionen für Registrieren und Entfernen von Layern.

use crate::app::ManagerState;
use crate::core::LayerDescriptor;
use crate::engine::MapEngine;

/// Registriert einen Layer unten im Panel.
///
/// Die Engine wird nicht angefasst; Sichtbarkeit und Opacity aus dem
/// Deskriptor gelten nur als Startwerte der Konfiguration.
/// Gibt `false` zurück, wenn die ID bereits verwaltet wird.
pub fn add_layer(state: &mut ManagerState, descriptor: LayerDescriptor) -> bool {
    let layer_id = descriptor.id.clone();
    if !state.layers.insert(descriptor) {
        log::warn!("Layer '{}' wird bereits verwaltet, ignoriert", layer_id);
        return false;
    }
    log::info!("Layer '{}' registriert", layer_id);
    true
}

/// Entfernt einen Layer aus Engine, Reihenfolge und Konfiguration.
///
/// Unbekannte IDs werden ignoriert. Ein offener Style-Editor des Layers wird
/// geschlossen. Die Reihenfolge der übrigen Layer wird nicht neu synchronisiert.
pub fn remove_layer(state: &mut ManagerState, engine: &mut dyn MapEngine, layer_id: &str) {
    if !state.layers.contains(layer_id) {
        log::debug!("Entfernen: unbekannter Layer '{}'", layer_id);
        return;
    }

    if let Err(e) = engine.remove_layer(layer_id) {
        log::warn!("Layer '{}' nicht aus der Engine entfernt: {}", layer_id, e);
    }
    forget_layer(state, layer_id);
}

/// Entfernt einen Layer nur aus dem Manager-Zustand (ohne Engine-Aufruf).
pub fn forget_layer(state: &mut ManagerState, layer_id: &str) {
    if state.layers.remove(layer_id).is_none() {
        return;
    }
    if state.panel.is_editor_open_for(layer_id) {
        state.panel.style_editor = None;
    }
    if state.panel.dragged_layer() == Some(layer_id) {
        state.panel.drag = None;
    }
    log::info!("Layer '{}' entfernt", layer_id);
}
