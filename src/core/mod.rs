//! Core-Domänentypen: Layer-Deskriptoren, Reihenfolge, Farben, Paint-Schemata.

pub mod color;
/// Layer-Datenmodelle
///
/// - LayerDescriptor: vom Manager verwalteter Layer inkl. Style-Snapshot
/// - LayerConfig: Sichtbarkeit, Opacity und Zoomgrenzen je Layer
/// - PaintValue: Wert einer Paint-Property (Farbe oder Zahl)
pub mod layer;
pub mod layer_order;
pub mod paint_schema;

pub use color::{format_hex_rgb, normalize_color, parse_hex_rgb, FALLBACK_COLOR};
pub use layer::{
    LayerConfig, LayerDescriptor, LayerType, PaintProperties, PaintValue, Visibility,
    VISIBILITY_PROPERTY,
};
pub use layer_order::{DropPlacement, LayerOrder};
pub use paint_schema::{controls_for, find_control, ControlKind, PaintControl};
