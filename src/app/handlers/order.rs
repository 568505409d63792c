//! Handler für die Layer-Reihenfolge.

use crate::app::use_cases;
use crate::app::ManagerState;
use crate::core::DropPlacement;
use crate::engine::MapEngine;

/// Verschiebt einen Layer eine Position nach oben.
pub fn move_up(state: &mut ManagerState, layer_id: &str) {
    use_cases::reorder::move_up(state, layer_id);
}

/// Verschiebt einen Layer eine Position nach unten.
pub fn move_down(state: &mut ManagerState, layer_id: &str) {
    use_cases::reorder::move_down(state, layer_id);
}

/// Sortiert einen Layer vor bzw. nach einem Ziel ein.
pub fn move_to(
    state: &mut ManagerState,
    layer_id: &str,
    target_id: &str,
    placement: DropPlacement,
) {
    use_cases::reorder::move_to(state, layer_id, target_id, placement);
}

/// Überträgt die Panel-Reihenfolge auf die Engine.
pub fn sync(state: &mut ManagerState, engine: &mut dyn MapEngine) {
    use_cases::reorder::sync_engine(state, engine);
}
