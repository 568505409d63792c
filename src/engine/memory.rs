//! In-Memory-Engine: Render-Stack ohne Grafik, mit Aufruf-Journal.
//!
//! Dient der Demo-Anwendung als Karten-Backend und den Tests als
//! beobachtbare Engine (Journal + gezielt fehlschlagende Moves).

use indexmap::IndexMap;
use std::collections::HashSet;

use super::{EngineError, EngineLayer, MapEngine};
use crate::core::{PaintValue, Visibility, VISIBILITY_PROPERTY};

/// Ein an die Engine abgesetzter Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    /// `set_layout_property`
    SetLayout {
        /// Layer-ID
        id: String,
        /// Property-Name
        name: String,
        /// Neuer Wert
        value: String,
    },
    /// `set_paint_property`
    SetPaint {
        /// Layer-ID
        id: String,
        /// Property-Name
        name: String,
        /// Neuer Wert
        value: PaintValue,
    },
    /// `move_layer`
    Move {
        /// Verschobener Layer
        id: String,
        /// Referenz-Layer (None = ganz oben)
        before: Option<String>,
    },
    /// `remove_layer`
    Remove {
        /// Entfernter Layer
        id: String,
    },
}

#[derive(Debug, Clone)]
struct StackEntry {
    layer: EngineLayer,
    layout: IndexMap<String, String>,
}

/// Render-Stack im Speicher (unten → oben).
#[derive(Debug, Clone, Default)]
pub struct MemoryEngine {
    stack: Vec<StackEntry>,
    journal: Vec<EngineCall>,
    rejected_moves: HashSet<String>,
}

impl MemoryEngine {
    /// Erstellt eine leere Engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen Layer oben auf den Stack (Builder).
    pub fn with_layer(mut self, layer: EngineLayer) -> Self {
        self.add_layer(layer);
        self
    }

    /// Legt einen Layer oben auf den Stack. Eine vorhandene ID wird ersetzt.
    pub fn add_layer(&mut self, layer: EngineLayer) {
        self.stack.retain(|entry| entry.layer.id != layer.id);
        self.stack.push(StackEntry {
            layer,
            layout: IndexMap::new(),
        });
    }

    /// Lässt alle künftigen Moves dieses Layers fehlschlagen.
    pub fn reject_moves_for(&mut self, id: impl Into<String>) {
        self.rejected_moves.insert(id.into());
    }

    /// Alle bisher abgesetzten Aufrufe in Reihenfolge.
    pub fn journal(&self) -> &[EngineCall] {
        &self.journal
    }

    /// Leert das Journal.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    /// IDs aller `move_layer`-Aufrufe in Aufruf-Reihenfolge.
    pub fn move_calls(&self) -> Vec<&str> {
        self.journal
            .iter()
            .filter_map(|call| match call {
                EngineCall::Move { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Liest eine Layout-Property.
    pub fn layout_property(&self, id: &str, name: &str) -> Option<&str> {
        self.entry(id)?.layout.get(name).map(String::as_str)
    }

    /// Sichtbarkeit laut Layout (ohne gesetzten Wert: sichtbar).
    pub fn is_visible(&self, id: &str) -> bool {
        self.layout_property(id, VISIBILITY_PROPERTY) != Some(Visibility::None.as_str())
    }

    /// Liest eine Paint-Property.
    pub fn paint_property(&self, id: &str, name: &str) -> Option<&PaintValue> {
        self.entry(id)?.layer.paint.get(name)
    }

    /// Iteriert über alle Layer unten → oben.
    pub fn layers(&self) -> impl Iterator<Item = &EngineLayer> {
        self.stack.iter().map(|entry| &entry.layer)
    }

    fn entry(&self, id: &str) -> Option<&StackEntry> {
        self.stack.iter().find(|entry| entry.layer.id == id)
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut StackEntry, EngineError> {
        self.stack
            .iter_mut()
            .find(|entry| entry.layer.id == id)
            .ok_or_else(|| EngineError::UnknownLayer(id.to_string()))
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.stack.iter().position(|entry| entry.layer.id == id)
    }
}

impl MapEngine for MemoryEngine {
    fn get_layer(&self, id: &str) -> Option<EngineLayer> {
        self.entry(id).map(|entry| entry.layer.clone())
    }

    fn get_layout_property(&self, id: &str, name: &str) -> Option<String> {
        self.layout_property(id, name).map(str::to_string)
    }

    fn set_layout_property(
        &mut self,
        id: &str,
        name: &str,
        value: &str,
    ) -> Result<(), EngineError> {
        self.journal.push(EngineCall::SetLayout {
            id: id.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        });
        let entry = self.entry_mut(id)?;
        entry.layout.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_paint_property(
        &mut self,
        id: &str,
        name: &str,
        value: PaintValue,
    ) -> Result<(), EngineError> {
        self.journal.push(EngineCall::SetPaint {
            id: id.to_string(),
            name: name.to_string(),
            value: value.clone(),
        });
        let entry = self.entry_mut(id)?;
        entry.layer.paint.insert(name.to_string(), value);
        Ok(())
    }

    fn move_layer(&mut self, id: &str, before_id: Option<&str>) -> Result<(), EngineError> {
        self.journal.push(EngineCall::Move {
            id: id.to_string(),
            before: before_id.map(str::to_string),
        });

        if self.rejected_moves.contains(id) {
            return Err(EngineError::Rejected {
                layer_id: id.to_string(),
                reason: "Move gesperrt".to_string(),
            });
        }
        let from = self
            .index_of(id)
            .ok_or_else(|| EngineError::UnknownLayer(id.to_string()))?;
        if let Some(before) = before_id {
            if before == id {
                return Ok(());
            }
            if self.index_of(before).is_none() {
                return Err(EngineError::UnknownAnchor(before.to_string()));
            }
        }

        let entry = self.stack.remove(from);
        let insert_at = match before_id {
            Some(before) => self.index_of(before).unwrap_or(self.stack.len()),
            None => self.stack.len(),
        };
        self.stack.insert(insert_at, entry);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), EngineError> {
        self.journal.push(EngineCall::Remove { id: id.to_string() });
        let index = self
            .index_of(id)
            .ok_or_else(|| EngineError::UnknownLayer(id.to_string()))?;
        self.stack.remove(index);
        Ok(())
    }

    fn style_layers(&self) -> Vec<String> {
        self.stack.iter().map(|entry| entry.layer.id.clone()).collect()
    }
}
