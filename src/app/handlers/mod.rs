//! Feature-Handler für LayerCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod layers;
pub mod order;
pub mod panel;
pub mod style;
