//! Handler für Sichtbarkeit, Opacity und Layer-Lebenszyklus.

use crate::app::use_cases;
use crate::app::ManagerState;
use crate::core::LayerDescriptor;
use crate::engine::MapEngine;

/// Setzt die Sichtbarkeit eines Layers.
pub fn set_visibility(
    state: &mut ManagerState,
    engine: &mut dyn MapEngine,
    layer_id: &str,
    visible: bool,
) {
    use_cases::visibility::set_visible(state, engine, layer_id, visible);
}

/// Schaltet alle Layer ein bzw. aus.
pub fn toggle_all(state: &mut ManagerState, engine: &mut dyn MapEngine, target: Option<bool>) {
    use_cases::visibility::toggle_all(state, engine, target);
}

/// Setzt die Opacity eines Layers.
pub fn set_opacity(
    state: &mut ManagerState,
    engine: &mut dyn MapEngine,
    layer_id: &str,
    opacity: f32,
) {
    use_cases::visibility::set_opacity(state, engine, layer_id, opacity);
}

/// Registriert einen Layer und propagiert doppelte IDs als Fehler.
pub fn add(state: &mut ManagerState, descriptor: LayerDescriptor) -> anyhow::Result<()> {
    let layer_id = descriptor.id.clone();
    if !use_cases::lifecycle::add_layer(state, descriptor) {
        anyhow::bail!("Layer '{}' wird bereits verwaltet", layer_id);
    }
    Ok(())
}

/// Entfernt einen Layer aus Panel und Engine.
pub fn remove(state: &mut ManagerState, engine: &mut dyn MapEngine, layer_id: &str) {
    use_cases::lifecycle::remove_layer(state, engine, layer_id);
}
