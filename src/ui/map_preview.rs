//! Vereinfachte Kartenansicht: zeichnet den Render-Stack der Engine.

use crate::core::{
    normalize_color, parse_hex_rgb, PaintValue, Visibility, FALLBACK_COLOR, VISIBILITY_PROPERTY,
};
use crate::engine::{EngineLayer, MapEngine};

const CARD_OFFSET_PX: f32 = 18.0;
const CARD_SIZE: egui::Vec2 = egui::Vec2::new(260.0, 150.0);

/// Zeichnet jeden sichtbaren Engine-Layer als versetzte Karte (unten → oben).
pub fn render_map_preview(ui: &mut egui::Ui, engine: &dyn MapEngine) {
    let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let layers = engine.style_layers();
    let origin = rect.center() - egui::vec2(CARD_SIZE.x, CARD_SIZE.y) * 0.5
        - egui::vec2(1.0, 1.0) * CARD_OFFSET_PX * layers.len() as f32 * 0.5;

    for (index, id) in layers.iter().enumerate() {
        let hidden = engine.get_layout_property(id, VISIBILITY_PROPERTY).as_deref()
            == Some(Visibility::None.as_str());
        let Some(layer) = engine.get_layer(id) else {
            continue;
        };
        if hidden {
            continue;
        }

        let min = origin + egui::vec2(1.0, 1.0) * CARD_OFFSET_PX * index as f32;
        let card = egui::Rect::from_min_size(min, CARD_SIZE);
        painter.rect_filled(card, 4.0, layer_color(&layer));
        painter.text(
            card.left_top() + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!("{} ({})", layer.id, layer.layer_type.as_str()),
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }
}

/// Füllfarbe aus der ersten Farb-Property, Alpha aus der Typ-Opacity.
fn layer_color(layer: &EngineLayer) -> egui::Color32 {
    let hex = layer
        .paint
        .values()
        .find_map(PaintValue::as_color)
        .map(normalize_color)
        .unwrap_or_else(|| FALLBACK_COLOR.to_string());
    let [r, g, b] = parse_hex_rgb(&hex).unwrap_or([0x55, 0x55, 0x55]);
    let opacity = layer
        .paint
        .get(&layer.layer_type.opacity_property())
        .and_then(PaintValue::as_number)
        .unwrap_or(1.0)
        .clamp(0.0, 1.0);
    egui::Color32::from_rgba_unmultiplied(r, g, b, (opacity * 255.0).round() as u8)
}
