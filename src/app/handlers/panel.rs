//! Handler für Panel-Zustand und Drag-Sitzung.

use crate::app::use_cases;
use crate::app::ManagerState;

/// Klappt das Panel ein bzw. aus.
pub fn toggle_panel(state: &mut ManagerState) {
    use_cases::panel::toggle_panel(state);
}

/// Klappt die Layer-Liste ein bzw. aus.
pub fn toggle_list(state: &mut ManagerState) {
    use_cases::panel::toggle_list(state);
}

/// Startet eine Drag-Sitzung.
pub fn begin_drag(state: &mut ManagerState, layer_id: String) {
    use_cases::panel::begin_drag(state, layer_id);
}

/// Aktualisiert die Drop-Markierung.
pub fn hover_drag(state: &mut ManagerState, layer_id: String) {
    use_cases::panel::hover_drag(state, layer_id);
}

/// Beendet die Drag-Sitzung.
pub fn end_drag(state: &mut ManagerState) {
    use_cases::panel::end_drag(state);
}
