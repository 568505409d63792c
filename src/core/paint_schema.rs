//! Feste Paint-Property-Sätze je Layer-Typ für den Style-Editor.

use super::layer::{LayerType, PaintValue};

/// Art eines Editor-Steuerelements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    /// Farbwähler mit Standardfarbe
    Color {
        /// Standardwert, falls die Engine keinen Wert liefert
        default: &'static str,
    },
    /// Schieberegler
    Slider {
        /// Standardwert, falls die Engine keinen Wert liefert
        default: f64,
        /// Untere Grenze
        min: f64,
        /// Obere Grenze
        max: f64,
        /// Schrittweite
        step: f64,
    },
}

/// Ein editierbares Paint-Property im Style-Editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintControl {
    /// Beschriftung im Editor
    pub label: &'static str,
    /// Paint-Property-Name in der Engine
    pub property: &'static str,
    /// Steuerelement-Art inkl. Grenzen
    pub kind: ControlKind,
}

impl PaintControl {
    const fn color(label: &'static str, property: &'static str, default: &'static str) -> Self {
        Self {
            label,
            property,
            kind: ControlKind::Color { default },
        }
    }

    const fn slider(
        label: &'static str,
        property: &'static str,
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        Self {
            label,
            property,
            kind: ControlKind::Slider {
                default,
                min,
                max,
                step,
            },
        }
    }

    /// Standardwert des Steuerelements.
    pub fn default_value(&self) -> PaintValue {
        match self.kind {
            ControlKind::Color { default } => PaintValue::from(default),
            ControlKind::Slider { default, .. } => PaintValue::Number(default),
        }
    }

    /// Gibt `true` zurück für Farbwähler.
    pub fn is_color(&self) -> bool {
        matches!(self.kind, ControlKind::Color { .. })
    }

    /// Begrenzt einen Reglerwert auf `min..=max`.
    ///
    /// `None` für Farbwähler und nicht-endliche Werte.
    pub fn clamp_number(&self, value: f64) -> Option<f64> {
        match self.kind {
            ControlKind::Slider { min, max, .. } if value.is_finite() => {
                Some(value.clamp(min, max))
            }
            _ => None,
        }
    }
}

const CIRCLE_CONTROLS: &[PaintControl] = &[
    PaintControl::color("Circle Color", "circle-color", "#3388ff"),
    PaintControl::slider("Circle Radius", "circle-radius", 5.0, 0.0, 20.0, 0.5),
    PaintControl::slider("Circle Opacity", "circle-opacity", 1.0, 0.0, 1.0, 0.05),
    PaintControl::slider("Circle Blur", "circle-blur", 0.0, 0.0, 5.0, 0.1),
    PaintControl::color("Circle Stroke Color", "circle-stroke-color", "#ffffff"),
    PaintControl::slider("Circle Stroke Width", "circle-stroke-width", 1.0, 0.0, 5.0, 0.1),
    PaintControl::slider(
        "Circle Stroke Opacity",
        "circle-stroke-opacity",
        1.0,
        0.0,
        1.0,
        0.05,
    ),
];

const LINE_CONTROLS: &[PaintControl] = &[
    PaintControl::color("Line Color", "line-color", "#3388ff"),
    PaintControl::slider("Line Width", "line-width", 2.0, 0.0, 20.0, 0.5),
    PaintControl::slider("Line Opacity", "line-opacity", 1.0, 0.0, 1.0, 0.05),
    PaintControl::slider("Line Blur", "line-blur", 0.0, 0.0, 5.0, 0.1),
];

const FILL_CONTROLS: &[PaintControl] = &[
    PaintControl::color("Fill Color", "fill-color", "#3388ff"),
    PaintControl::slider("Fill Opacity", "fill-opacity", 0.5, 0.0, 1.0, 0.05),
    PaintControl::color("Fill Outline Color", "fill-outline-color", "#3388ff"),
];

const RASTER_CONTROLS: &[PaintControl] = &[
    PaintControl::slider("Raster Opacity", "raster-opacity", 1.0, 0.0, 1.0, 0.05),
    PaintControl::slider(
        "Raster Brightness Min",
        "raster-brightness-min",
        0.0,
        -1.0,
        1.0,
        0.05,
    ),
    PaintControl::slider(
        "Raster Brightness Max",
        "raster-brightness-max",
        1.0,
        -1.0,
        1.0,
        0.05,
    ),
    PaintControl::slider("Raster Saturation", "raster-saturation", 0.0, -1.0, 1.0, 0.05),
    PaintControl::slider("Raster Contrast", "raster-contrast", 0.0, -1.0, 1.0, 0.05),
];

/// Liefert die editierbaren Paint-Properties eines Layer-Typs.
///
/// Typen ohne Editor-Unterstützung liefern eine leere Liste.
pub fn controls_for(layer_type: LayerType) -> &'static [PaintControl] {
    match layer_type {
        LayerType::Circle => CIRCLE_CONTROLS,
        LayerType::Line => LINE_CONTROLS,
        LayerType::Fill => FILL_CONTROLS,
        LayerType::Raster => RASTER_CONTROLS,
        _ => &[],
    }
}

/// Sucht ein Steuerelement anhand des Property-Namens.
pub fn find_control(layer_type: LayerType, property: &str) -> Option<&'static PaintControl> {
    controls_for(layer_type)
        .iter()
        .find(|control| control.property == property)
}
