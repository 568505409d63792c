//! Use-Case-Funktionen für die Layer-Reihenfolge.

use crate::app::ManagerState;
use crate::core::DropPlacement;
use crate::engine::{sync_layer_order, MapEngine};

/// Tauscht einen Layer mit seinem Vorgänger.
pub fn move_up(state: &mut ManagerState, layer_id: &str) -> bool {
    let moved = state.layers.order_mut().move_up(layer_id);
    if !moved {
        log::debug!("'{}' kann nicht nach oben verschoben werden", layer_id);
    }
    moved
}

/// Tauscht einen Layer mit seinem Nachfolger.
pub fn move_down(state: &mut ManagerState, layer_id: &str) -> bool {
    let moved = state.layers.order_mut().move_down(layer_id);
    if !moved {
        log::debug!("'{}' kann nicht nach unten verschoben werden", layer_id);
    }
    moved
}

/// Sortiert `layer_id` vor bzw. nach `target_id` ein.
pub fn move_to(
    state: &mut ManagerState,
    layer_id: &str,
    target_id: &str,
    placement: DropPlacement,
) -> bool {
    let moved = state
        .layers
        .order_mut()
        .move_to(layer_id, target_id, placement);
    if moved {
        log::debug!("'{}' {:?} '{}' einsortiert", layer_id, placement, target_id);
    }
    moved
}

/// Überträgt die aktuelle Panel-Reihenfolge auf die Engine.
pub fn sync_engine(state: &mut ManagerState, engine: &mut dyn MapEngine) {
    let report = sync_layer_order(engine, state.layers.order());
    if !report.is_complete() {
        log::warn!(
            "Reihenfolge unvollständig übertragen: {} von {} Moves fehlgeschlagen",
            report.failed.len(),
            report.failed.len() + report.moved.len()
        );
    }
    state.last_sync = Some(report);
}
