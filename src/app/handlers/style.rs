//! Handler für den Style-Editor.

use crate::app::use_cases;
use crate::app::ManagerState;
use crate::core::PaintValue;
use crate::engine::MapEngine;

/// Öffnet den Style-Editor eines Layers.
pub fn open_editor(state: &mut ManagerState, engine: &dyn MapEngine, layer_id: &str) {
    use_cases::style_editor::open(state, engine, layer_id);
}

/// Schließt den geöffneten Style-Editor.
pub fn close_editor(state: &mut ManagerState) {
    use_cases::style_editor::close(state);
}

/// Speichert einen Entwurfswert.
pub fn set_draft(state: &mut ManagerState, layer_id: &str, property: &str, value: PaintValue) {
    use_cases::style_editor::set_draft(state, layer_id, property, value);
}

/// Schreibt einen Reglerwert als Live-Vorschau.
pub fn preview(
    state: &ManagerState,
    engine: &mut dyn MapEngine,
    layer_id: &str,
    property: &str,
    value: PaintValue,
) {
    use_cases::style_editor::preview(state, engine, layer_id, property, value);
}

/// Schreibt alle Editor-Werte in die Engine.
pub fn apply(state: &ManagerState, engine: &mut dyn MapEngine, layer_id: &str) {
    use_cases::style_editor::apply(state, engine, layer_id);
}

/// Stellt den Style-Snapshot wieder her.
pub fn reset(state: &mut ManagerState, engine: &mut dyn MapEngine, layer_id: &str) {
    use_cases::style_editor::reset(state, engine, layer_id);
}
