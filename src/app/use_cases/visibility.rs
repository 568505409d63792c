//! Use-Case-Funktionen für Sichtbarkeit und Opacity.

use crate::app::ManagerState;
use crate::core::{Visibility, VISIBILITY_PROPERTY};
use crate::engine::MapEngine;

/// Setzt die Sichtbarkeit eines verwalteten Layers.
///
/// Fehlt der Layer in der Engine, wird nur die Konfiguration aktualisiert.
pub fn set_visible(
    state: &mut ManagerState,
    engine: &mut dyn MapEngine,
    layer_id: &str,
    visible: bool,
) {
    let Some(config) = state.layers.config_mut(layer_id) else {
        log::debug!("Sichtbarkeit: unbekannter Layer '{}'", layer_id);
        return;
    };
    config.visible = visible;

    if !engine.has_layer(layer_id) {
        log::debug!(
            "Layer '{}' fehlt in der Engine, nur Konfiguration aktualisiert",
            layer_id
        );
        return;
    }

    let value = Visibility::from_visible(visible).as_str();
    if let Err(e) = engine.set_layout_property(layer_id, VISIBILITY_PROPERTY, value) {
        log::warn!("Sichtbarkeit von '{}' nicht gesetzt: {}", layer_id, e);
    }
}

/// Schaltet alle verwalteten Layer in Panel-Reihenfolge ein bzw. aus.
///
/// Ohne `target` wird invertiert: sind alle sichtbar, werden alle ausgeblendet,
/// sonst alle eingeblendet.
pub fn toggle_all(state: &mut ManagerState, engine: &mut dyn MapEngine, target: Option<bool>) {
    let visible = target.unwrap_or(!state.layers.all_visible());
    let ids: Vec<String> = state.layers.order().iter().map(str::to_string).collect();

    for id in &ids {
        set_visible(state, engine, id, visible);
    }

    log::info!(
        "{} Layer {}",
        ids.len(),
        if visible { "eingeblendet" } else { "ausgeblendet" }
    );
}

/// Setzt die Opacity eines verwalteten Layers (geklemmt auf 0..=1).
///
/// Geschrieben wird `"{typ}-opacity"`, sofern die Engine den Layer kennt.
pub fn set_opacity(
    state: &mut ManagerState,
    engine: &mut dyn MapEngine,
    layer_id: &str,
    opacity: f32,
) {
    if !opacity.is_finite() {
        log::warn!("Ungültige Opacity {} für '{}' ignoriert", opacity, layer_id);
        return;
    }
    let Some(config) = state.layers.config_mut(layer_id) else {
        log::debug!("Opacity: unbekannter Layer '{}'", layer_id);
        return;
    };
    let opacity = opacity.clamp(0.0, 1.0);
    config.opacity = opacity;

    let Some(layer) = engine.get_layer(layer_id) else {
        return;
    };
    let property = layer.layer_type.opacity_property();
    if let Err(e) = engine.set_paint_property(layer_id, &property, f64::from(opacity).into()) {
        log::warn!("Opacity von '{}' nicht gesetzt: {}", layer_id, e);
    }
}
