use std::collections::HashMap;

use crate::core::{LayerConfig, LayerDescriptor, LayerOrder};

/// Zustandsspeicher der verwalteten Layer.
///
/// Invariante: `order`, `descriptors` und `configs` enthalten exakt dieselben IDs.
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    order: LayerOrder,
    descriptors: HashMap<String, LayerDescriptor>,
    configs: HashMap<String, LayerConfig>,
}

impl LayerStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Layer unten in der Reihenfolge.
    /// Gibt `false` zurück, wenn die ID bereits verwaltet wird.
    pub fn insert(&mut self, descriptor: LayerDescriptor) -> bool {
        if !self.order.push(descriptor.id.clone()) {
            return false;
        }
        self.configs.insert(
            descriptor.id.clone(),
            LayerConfig::from_descriptor(&descriptor),
        );
        self.descriptors.insert(descriptor.id.clone(), descriptor);
        true
    }

    /// Entfernt einen Layer samt Konfiguration.
    pub fn remove(&mut self, id: &str) -> Option<LayerDescriptor> {
        if !self.order.remove(id) {
            return None;
        }
        self.configs.remove(id);
        self.descriptors.remove(id)
    }

    /// Prüft, ob die ID verwaltet wird.
    pub fn contains(&self, id: &str) -> bool {
        self.order.contains(id)
    }

    /// Reihenfolge oben → unten.
    pub fn order(&self) -> &LayerOrder {
        &self.order
    }

    /// Mutable Reihenfolge für Verschiebe-Operationen.
    pub fn order_mut(&mut self) -> &mut LayerOrder {
        &mut self.order
    }

    /// Deskriptor eines Layers.
    pub fn descriptor(&self, id: &str) -> Option<&LayerDescriptor> {
        self.descriptors.get(id)
    }

    /// Konfiguration eines Layers.
    pub fn config(&self, id: &str) -> Option<&LayerConfig> {
        self.configs.get(id)
    }

    /// Mutable Konfiguration eines Layers.
    pub fn config_mut(&mut self, id: &str) -> Option<&mut LayerConfig> {
        self.configs.get_mut(id)
    }

    /// Deskriptoren in Panel-Reihenfolge.
    pub fn descriptors_in_order(&self) -> impl Iterator<Item = &LayerDescriptor> + '_ {
        self.order.iter().filter_map(|id| self.descriptors.get(id))
    }

    /// Gibt `true` zurück, wenn alle verwalteten Layer sichtbar sind.
    pub fn all_visible(&self) -> bool {
        self.configs.values().all(|config| config.visible)
    }

    /// Anzahl der verwalteten Layer.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Gibt `true` zurück, wenn keine Layer verwaltet werden.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
