//! UI-Komponenten: Layer-Panel, Style-Editor und Karten-Vorschau.

/// UI-Layer mit egui
///
/// Die Funktionen lesen nur den Zustand und geben `LayerIntent`s zurück;
/// verarbeitet werden sie vom `LayerController`.
pub mod layer_panel;
pub mod map_preview;
pub mod style_editor;

pub use layer_panel::render_layer_panel;
pub use map_preview::render_map_preview;
pub use style_editor::render_style_editor;
