//! Layer-Deskriptoren, Layer-Konfiguration und Paint-Werte.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name der Layout-Property für die Sichtbarkeit.
pub const VISIBILITY_PROPERTY: &str = "visibility";

/// Paint-Properties eines Layers in Einfüge-Reihenfolge (Property-Name → Wert).
pub type PaintProperties = IndexMap<String, PaintValue>;

/// Wert einer Paint-Property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaintValue {
    /// Zahlenwert (Breite, Radius, Opacity, Blur, ...)
    Number(f64),
    /// Farbwert als CSS-String (`#rrggbb`, `rgb(...)`)
    Color(String),
}

impl PaintValue {
    /// Gibt den Zahlenwert zurück (None bei Farbwerten).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PaintValue::Number(n) => Some(*n),
            PaintValue::Color(_) => None,
        }
    }

    /// Gibt den Farbstring zurück (None bei Zahlenwerten).
    pub fn as_color(&self) -> Option<&str> {
        match self {
            PaintValue::Color(c) => Some(c),
            PaintValue::Number(_) => None,
        }
    }
}

impl From<f64> for PaintValue {
    fn from(value: f64) -> Self {
        PaintValue::Number(value)
    }
}

impl From<f32> for PaintValue {
    fn from(value: f32) -> Self {
        PaintValue::Number(f64::from(value))
    }
}

impl From<&str> for PaintValue {
    fn from(value: &str) -> Self {
        PaintValue::Color(value.to_string())
    }
}

impl From<String> for PaintValue {
    fn from(value: String) -> Self {
        PaintValue::Color(value)
    }
}

impl fmt::Display for PaintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintValue::Number(n) => write!(f, "{:.2}", n),
            PaintValue::Color(c) => f.write_str(c),
        }
    }
}

/// Render-Typ eines Engine-Layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerType {
    /// Flächen
    Fill,
    /// Linien
    Line,
    /// Punkte als Kreise
    Circle,
    /// Rasterbilder (Kacheln, Orthofotos)
    Raster,
    /// Icons und Beschriftungen
    Symbol,
    /// Heatmaps
    Heatmap,
    /// Extrudierte Flächen (3D)
    FillExtrusion,
    /// Schummerung
    Hillshade,
    /// Hintergrundfarbe
    Background,
}

impl LayerType {
    /// Style-Name des Typs (z.B. `fill-extrusion`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Fill => "fill",
            LayerType::Line => "line",
            LayerType::Circle => "circle",
            LayerType::Raster => "raster",
            LayerType::Symbol => "symbol",
            LayerType::Heatmap => "heatmap",
            LayerType::FillExtrusion => "fill-extrusion",
            LayerType::Hillshade => "hillshade",
            LayerType::Background => "background",
        }
    }

    /// Leitet den Namen der Opacity-Paint-Property ab (`<typ>-opacity`).
    pub fn opacity_property(&self) -> String {
        format!("{}-opacity", self.as_str())
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wert der Layout-Property `visibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Layer wird gezeichnet
    Visible,
    /// Layer ist ausgeblendet
    None,
}

impl Visibility {
    /// Übersetzt ein Checkbox-Flag in den Layout-Wert.
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Visibility::Visible
        } else {
            Visibility::None
        }
    }

    /// Style-Wert (`"visible"` bzw. `"none"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::None => "none",
        }
    }
}

/// Vom Manager verwalteter Layer.
///
/// Die optionalen Felder `visible`, `opacity`, `minzoom` und `maxzoom` dienen
/// nur als Startwerte für die zugehörige [`LayerConfig`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerDescriptor {
    /// Eindeutige Layer-ID (identisch mit der ID in der Engine)
    pub id: String,
    /// Anzeigename im Panel (Fallback: ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Snapshot der ursprünglichen Paint-Properties für "Reset"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_style: Option<PaintProperties>,
    /// Initiale Sichtbarkeit (None = sichtbar)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Initiale Opacity (None = 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Minimale Zoomstufe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minzoom: Option<f32>,
    /// Maximale Zoomstufe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxzoom: Option<f32>,
}

impl LayerDescriptor {
    /// Erstellt einen Deskriptor nur mit ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Setzt den Anzeigenamen.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Setzt den Style-Snapshot für "Reset".
    pub fn with_original_style(mut self, style: PaintProperties) -> Self {
        self.original_style = Some(style);
        self
    }

    /// Setzt die initiale Sichtbarkeit.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Setzt die initiale Opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Name für die Anzeige im Panel.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Visueller Zustand eines verwalteten Layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerConfig {
    /// Sichtbarkeit (Checkbox-Zustand)
    pub visible: bool,
    /// Opacity (0.0 = transparent, 1.0 = opak)
    pub opacity: f32,
    /// Minimale Zoomstufe
    pub minzoom: Option<f32>,
    /// Maximale Zoomstufe
    pub maxzoom: Option<f32>,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 1.0,
            minzoom: None,
            maxzoom: None,
        }
    }
}

impl LayerConfig {
    /// Leitet die Startkonfiguration aus einem Deskriptor ab.
    pub fn from_descriptor(descriptor: &LayerDescriptor) -> Self {
        Self {
            visible: descriptor.visible != Some(false),
            opacity: descriptor
                .opacity
                .filter(|o| o.is_finite())
                .map_or(1.0, |o| o.clamp(0.0, 1.0)),
            minzoom: descriptor.minzoom,
            maxzoom: descriptor.maxzoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_visible_and_opaque() {
        let config = LayerConfig::from_descriptor(&LayerDescriptor::new("roads"));
        assert!(config.visible);
        assert_eq!(config.opacity, 1.0);
        assert_eq!(config.minzoom, None);
    }

    #[test]
    fn config_keeps_explicit_hidden_and_zero_opacity() {
        let descriptor = LayerDescriptor::new("roads")
            .with_visible(false)
            .with_opacity(0.0);
        let config = LayerConfig::from_descriptor(&descriptor);
        assert!(!config.visible);
        assert_eq!(config.opacity, 0.0);
    }

    #[test]
    fn config_clamps_out_of_range_opacity() {
        let config = LayerConfig::from_descriptor(&LayerDescriptor::new("a").with_opacity(3.5));
        assert_eq!(config.opacity, 1.0);
    }

    #[test]
    fn opacity_property_is_derived_from_type() {
        assert_eq!(LayerType::Circle.opacity_property(), "circle-opacity");
        assert_eq!(
            LayerType::FillExtrusion.opacity_property(),
            "fill-extrusion-opacity"
        );
    }

    #[test]
    fn display_name_falls_back_to_id() {
        assert_eq!(LayerDescriptor::new("water").display_name(), "water");
        assert_eq!(
            LayerDescriptor::new("water").with_name("Gewässer").display_name(),
            "Gewässer"
        );
    }

    #[test]
    fn descriptor_deserializes_original_style_from_json() {
        let json = r##"{
            "id": "parcels",
            "name": "Flurstücke",
            "original_style": { "fill-color": "#3388ff", "fill-opacity": 0.5 }
        }"##;
        let descriptor: LayerDescriptor = serde_json::from_str(json).expect("gültiges JSON");
        let style = descriptor.original_style.expect("Snapshot erwartet");
        assert_eq!(style.get("fill-color"), Some(&PaintValue::from("#3388ff")));
        assert_eq!(style.get("fill-opacity"), Some(&PaintValue::Number(0.5)));
        let keys: Vec<&str> = style.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["fill-color", "fill-opacity"]);
    }
}
