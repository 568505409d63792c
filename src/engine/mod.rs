//! Schnittstelle zur externen Karten-Engine.
//!
//! Der Manager hält keinen Render-Zustand: Sichtbarkeit, Paint-Properties und
//! die Render-Reihenfolge gehören der Engine und werden nur über [`MapEngine`]
//! gelesen und geschrieben.

mod memory;
pub mod sync;

pub use memory::{EngineCall, MemoryEngine};
pub use sync::{sync_layer_order, SyncReport};

use crate::core::{LayerType, PaintProperties, PaintValue};

/// Fehler der Engine-Schnittstelle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Der Layer existiert nicht (mehr) in der Engine
    #[error("Layer '{0}' existiert nicht in der Engine")]
    UnknownLayer(String),
    /// Der Referenz-Layer für `move_layer` existiert nicht
    #[error("Referenz-Layer '{0}' existiert nicht in der Engine")]
    UnknownAnchor(String),
    /// Die Engine hat die Änderung abgelehnt
    #[error("Engine hat Änderung an '{layer_id}' abgelehnt: {reason}")]
    Rejected {
        /// Betroffener Layer
        layer_id: String,
        /// Begründung der Engine
        reason: String,
    },
}

/// Layer-Sicht der Engine (Existenz, Typ und aktuelle Paint-Werte).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineLayer {
    /// Layer-ID
    pub id: String,
    /// Render-Typ
    pub layer_type: LayerType,
    /// Aktuell gesetzte Paint-Properties
    pub paint: PaintProperties,
}

impl EngineLayer {
    /// Erstellt einen Layer ohne gesetzte Paint-Properties.
    pub fn new(id: impl Into<String>, layer_type: LayerType) -> Self {
        Self {
            id: id.into(),
            layer_type,
            paint: PaintProperties::new(),
        }
    }

    /// Setzt eine Paint-Property (Builder).
    pub fn with_paint(mut self, property: impl Into<String>, value: impl Into<PaintValue>) -> Self {
        self.paint.insert(property.into(), value.into());
        self
    }
}

/// Vertrag der externen Karten-Engine.
///
/// Der Render-Stack ist unten → oben geordnet (erster Layer wird zuerst gezeichnet).
pub trait MapEngine {
    /// Liefert Typ und Paint-Werte eines Layers, None wenn unbekannt.
    fn get_layer(&self, id: &str) -> Option<EngineLayer>;

    /// Liest eine Layout-Property, None wenn Layer oder Property unbekannt.
    fn get_layout_property(&self, id: &str, name: &str) -> Option<String>;

    /// Setzt eine Layout-Property (z.B. `visibility`).
    fn set_layout_property(&mut self, id: &str, name: &str, value: &str)
        -> Result<(), EngineError>;

    /// Setzt eine Paint-Property.
    fn set_paint_property(
        &mut self,
        id: &str,
        name: &str,
        value: PaintValue,
    ) -> Result<(), EngineError>;

    /// Verschiebt `id` direkt unter `before_id`; ohne `before_id` ganz nach oben.
    fn move_layer(&mut self, id: &str, before_id: Option<&str>) -> Result<(), EngineError>;

    /// Entfernt einen Layer.
    fn remove_layer(&mut self, id: &str) -> Result<(), EngineError>;

    /// Alle Layer-IDs der Engine (verwaltet und fremd), unten → oben.
    fn style_layers(&self) -> Vec<String>;

    /// Prüft die Existenz eines Layers.
    fn has_layer(&self, id: &str) -> bool {
        self.get_layer(id).is_some()
    }
}
