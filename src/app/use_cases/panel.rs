//! Use-Case-Funktionen für den Präsentationszustand des Panels.

use crate::app::{DragState, ManagerState};

/// Klappt das Panel ein bzw. aus (Header-Button).
pub fn toggle_panel(state: &mut ManagerState) {
    state.panel.collapsed = !state.panel.collapsed;
}

/// Klappt die Layer-Liste ein bzw. aus.
pub fn toggle_list(state: &mut ManagerState) {
    state.panel.list_collapsed = !state.panel.list_collapsed;
}

/// Startet eine Drag-Sitzung. Eine laufende Sitzung wird ersetzt.
pub fn begin_drag(state: &mut ManagerState, layer_id: String) {
    if !state.layers.contains(&layer_id) {
        log::debug!("Drag: unbekannter Layer '{}'", layer_id);
        return;
    }
    state.panel.drag = Some(DragState {
        dragged: layer_id,
        hovered: None,
    });
}

/// Setzt die Drop-Markierung der laufenden Sitzung.
pub fn hover_drag(state: &mut ManagerState, layer_id: String) {
    if let Some(drag) = state.panel.drag.as_mut() {
        if drag.dragged != layer_id {
            drag.hovered = Some(layer_id);
        }
    }
}

/// Beendet die Drag-Sitzung und entfernt die Drop-Markierung.
pub fn end_drag(state: &mut ManagerState) {
    state.panel.drag = None;
}
