//! Inline-Style-Editor unter der Layer-Zeile.

use crate::app::{LayerIntent, StyleEditorState, StyleField};
use crate::core::{format_hex_rgb, parse_hex_rgb, ControlKind, PaintValue};

/// Rendert die Felder des offenen Editors samt Apply/Reset/Close.
pub fn render_style_editor(
    ui: &mut egui::Ui,
    editor: &StyleEditorState,
    events: &mut Vec<LayerIntent>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        if editor.fields.is_empty() {
            ui.weak("Keine editierbaren Paint-Properties");
        }

        egui::Grid::new(("style_editor", editor.layer_id.as_str()))
            .num_columns(2)
            .show(ui, |ui| {
                for field in &editor.fields {
                    ui.label(field.control.label);
                    if let Some(value) = render_field(ui, field) {
                        events.push(LayerIntent::StyleDraftChanged {
                            layer_id: editor.layer_id.clone(),
                            property: field.control.property.to_string(),
                            value,
                        });
                    }
                    ui.end_row();
                }
            });

        ui.horizontal(|ui| {
            if ui.button("Apply").clicked() {
                events.push(LayerIntent::ApplyStylesRequested {
                    layer_id: editor.layer_id.clone(),
                });
            }
            if ui.button("Reset").clicked() {
                events.push(LayerIntent::ResetStylesRequested {
                    layer_id: editor.layer_id.clone(),
                });
            }
            if ui.button("Close").clicked() {
                events.push(LayerIntent::StyleEditorToggleRequested {
                    layer_id: editor.layer_id.clone(),
                });
            }
        });
    });
}

/// Rendert ein Eingabefeld und liefert den neuen Wert bei Änderung.
fn render_field(ui: &mut egui::Ui, field: &StyleField) -> Option<PaintValue> {
    match field.control.kind {
        ControlKind::Color { default } => {
            let current = field.value.as_color().unwrap_or(default);
            let mut rgb = parse_hex_rgb(current).unwrap_or([0, 0, 0]);
            ui.color_edit_button_srgb(&mut rgb)
                .changed()
                .then(|| PaintValue::Color(format_hex_rgb(rgb)))
        }
        ControlKind::Slider {
            default,
            min,
            max,
            step,
        } => {
            let mut value = field.value.as_number().unwrap_or(default);
            ui.add(
                egui::Slider::new(&mut value, min..=max)
                    .step_by(step)
                    .fixed_decimals(2),
            )
            .changed()
            .then_some(PaintValue::Number(value))
        }
    }
}
