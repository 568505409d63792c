//! Use-Case-Funktionen für den Style-Editor.
//!
//! Es ist höchstens ein Editor geöffnet. Regler schreiben ihre Werte sofort als
//! Vorschau in die Engine, Farben erst mit "Apply".

use crate::app::{ManagerState, StyleEditorState, StyleField};
use crate::core::{
    controls_for, find_control, normalize_color, ControlKind, PaintControl, PaintValue,
};
use crate::engine::{EngineLayer, MapEngine};

/// Öffnet den Editor eines Layers mit den aktuellen Engine-Werten.
///
/// Ein anderer offener Editor wird dabei geschlossen. Fehlt der Layer in der
/// Engine, öffnet sich ein Editor ohne Felder.
pub fn open(state: &mut ManagerState, engine: &dyn MapEngine, layer_id: &str) {
    if !state.layers.contains(layer_id) {
        log::debug!("Style-Editor: unbekannter Layer '{}'", layer_id);
        return;
    }
    state.panel.style_editor = Some(build_editor(engine, layer_id));
}

/// Schließt den offenen Editor.
pub fn close(state: &mut ManagerState) {
    state.panel.style_editor = None;
}

/// Speichert einen Entwurfswert im offenen Editor.
///
/// Werte, deren Art nicht zum Steuerelement passt, werden verworfen. Reglerwerte
/// werden auf die Grenzen des Steuerelements begrenzt.
pub fn set_draft(state: &mut ManagerState, layer_id: &str, property: &str, value: PaintValue) {
    let value = match value {
        PaintValue::Number(_) => match checked_slider_value(state, layer_id, property, &value) {
            Some(number) => PaintValue::Number(number),
            None => {
                log::debug!("Entwurf für '{}.{}' verworfen", layer_id, property);
                return;
            }
        },
        color => color,
    };

    let Some(editor) = state
        .panel
        .style_editor
        .as_mut()
        .filter(|editor| editor.layer_id == layer_id)
    else {
        log::debug!("Kein offener Style-Editor für '{}'", layer_id);
        return;
    };

    let matches_kind = editor
        .field(property)
        .is_some_and(|field| field.control.is_color() == value.as_color().is_some());
    if !matches_kind || !editor.set_draft(property, value) {
        log::debug!("Entwurf für '{}.{}' verworfen", layer_id, property);
    }
}

/// Schreibt einen Reglerwert direkt in die Engine (Live-Vorschau).
///
/// Nur bei offenem Editor des Layers und nur für Regler des Schemas; der Wert
/// wird wie in [`set_draft`] begrenzt.
pub fn preview(
    state: &ManagerState,
    engine: &mut dyn MapEngine,
    layer_id: &str,
    property: &str,
    value: PaintValue,
) {
    let Some(number) = checked_slider_value(state, layer_id, property, &value) else {
        log::debug!("Vorschau von '{}.{}' verworfen", layer_id, property);
        return;
    };
    if let Err(e) = engine.set_paint_property(layer_id, property, PaintValue::Number(number)) {
        log::warn!("Vorschau von '{}.{}' fehlgeschlagen: {}", layer_id, property, e);
    }
}

/// Begrenzter Reglerwert, falls der Editor des Layers offen ist und `property`
/// laut Schema ein Regler ist.
fn checked_slider_value(
    state: &ManagerState,
    layer_id: &str,
    property: &str,
    value: &PaintValue,
) -> Option<f64> {
    let editor = state
        .panel
        .style_editor
        .as_ref()
        .filter(|editor| editor.layer_id == layer_id)?;
    let control = find_control(editor.layer_type?, property)?;
    control.clamp_number(value.as_number()?)
}

/// Schreibt alle Felder des offenen Editors in die Engine.
///
/// Farben werden als normalisierter Hex-String geschrieben, Regler als Zahl.
pub fn apply(state: &ManagerState, engine: &mut dyn MapEngine, layer_id: &str) {
    let Some(editor) = state
        .panel
        .style_editor
        .as_ref()
        .filter(|editor| editor.layer_id == layer_id)
    else {
        log::debug!("Apply ohne offenen Editor für '{}'", layer_id);
        return;
    };

    for field in &editor.fields {
        let value = match &field.value {
            PaintValue::Color(color) => PaintValue::Color(normalize_color(color)),
            number => number.clone(),
        };
        if let Err(e) = engine.set_paint_property(layer_id, field.control.property, value) {
            log::warn!(
                "Paint-Property '{}.{}' nicht gesetzt: {}",
                layer_id,
                field.control.property,
                e
            );
        }
    }
    log::info!("{} Paint-Properties auf '{}' angewendet", editor.fields.len(), layer_id);
}

/// Stellt den Style-Snapshot des Layers wieder her.
///
/// Ohne Snapshot passiert nichts. War der Editor des Layers offen, wird er aus
/// den neuen Engine-Werten neu aufgebaut und bleibt offen.
pub fn reset(state: &mut ManagerState, engine: &mut dyn MapEngine, layer_id: &str) {
    let Some(snapshot) = state
        .layers
        .descriptor(layer_id)
        .and_then(|descriptor| descriptor.original_style.as_ref())
    else {
        log::debug!("Kein Style-Snapshot für '{}'", layer_id);
        return;
    };

    for (property, value) in snapshot {
        if let Err(e) = engine.set_paint_property(layer_id, property, value.clone()) {
            log::warn!("Reset von '{}.{}' fehlgeschlagen: {}", layer_id, property, e);
        }
    }

    if state.panel.is_editor_open_for(layer_id) {
        state.panel.style_editor = Some(build_editor(engine, layer_id));
    }
    log::info!("Style von '{}' zurückgesetzt", layer_id);
}

fn build_editor(engine: &dyn MapEngine, layer_id: &str) -> StyleEditorState {
    let Some(layer) = engine.get_layer(layer_id) else {
        log::debug!("Layer '{}' fehlt in der Engine, Editor ohne Felder", layer_id);
        return StyleEditorState {
            layer_id: layer_id.to_string(),
            layer_type: None,
            fields: Vec::new(),
        };
    };

    let fields = controls_for(layer.layer_type)
        .iter()
        .map(|control| StyleField {
            control: *control,
            value: initial_value(&layer, control),
        })
        .collect();

    StyleEditorState {
        layer_id: layer_id.to_string(),
        layer_type: Some(layer.layer_type),
        fields,
    }
}

/// Aktueller Engine-Wert des Steuerelements, sonst der Schema-Standardwert.
fn initial_value(layer: &EngineLayer, control: &PaintControl) -> PaintValue {
    let current = layer.paint.get(control.property);
    match (control.kind, current) {
        (ControlKind::Color { .. }, Some(PaintValue::Color(color))) => {
            PaintValue::Color(normalize_color(color))
        }
        (ControlKind::Slider { .. }, Some(PaintValue::Number(value))) => {
            PaintValue::Number(*value)
        }
        _ => control.default_value(),
    }
}
