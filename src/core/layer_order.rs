//! Reihenfolge der verwalteten Layer im Panel (oben → unten).
//!
//! Index 0 ist der oberste Layer. Die Engine speichert ihren Render-Stack
//! umgekehrt (unten → oben), siehe [`LayerOrder::bottom_to_top`].

use indexmap::IndexSet;

/// Einfügeposition relativ zum Drop-Ziel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPlacement {
    /// Direkt vor (über) dem Ziel einfügen
    Before,
    /// Direkt nach (unter) dem Ziel einfügen
    After,
}

/// Totale Ordnung über die IDs der verwalteten Layer, ohne Duplikate.
#[derive(Debug, Clone, Default)]
pub struct LayerOrder {
    ids: IndexSet<String>,
}

// IndexSet vergleicht ohne Reihenfolge; hier zählt die Reihenfolge.
impl PartialEq for LayerOrder {
    fn eq(&self, other: &Self) -> bool {
        self.ids.iter().eq(other.ids.iter())
    }
}

impl Eq for LayerOrder {}

impl LayerOrder {
    /// Erstellt eine leere Reihenfolge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine ID unten an. Gibt `false` zurück, wenn die ID schon enthalten ist.
    pub fn push(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Entfernt eine ID. Die Reihenfolge der übrigen bleibt erhalten.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.shift_remove(id)
    }

    /// Prüft, ob die ID verwaltet wird.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Position der ID (0 = oben).
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.get_index_of(id)
    }

    /// Anzahl der Layer.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Gibt `true` zurück, wenn keine Layer verwaltet werden.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iteriert in UI-Reihenfolge (oben → unten).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    /// IDs in Engine-Reihenfolge (unten → oben).
    pub fn bottom_to_top(&self) -> Vec<&str> {
        self.iter().rev().collect()
    }

    /// Tauscht die ID mit ihrem Vorgänger. No-op, wenn sie bereits oben steht.
    pub fn move_up(&mut self, id: &str) -> bool {
        match self.ids.get_index_of(id) {
            Some(index) if index > 0 => {
                self.ids.swap_indices(index, index - 1);
                true
            }
            _ => false,
        }
    }

    /// Tauscht die ID mit ihrem Nachfolger. No-op, wenn sie bereits unten steht.
    pub fn move_down(&mut self, id: &str) -> bool {
        match self.ids.get_index_of(id) {
            Some(index) if index + 1 < self.ids.len() => {
                self.ids.swap_indices(index, index + 1);
                true
            }
            _ => false,
        }
    }

    /// Bestimmt die Einfügeposition eines Drag-Drops aus den Ausgangs-Indizes.
    ///
    /// Abwärts gezogen (Quelle über Ziel) → `After`, aufwärts → `Before`.
    /// None, wenn Quelle und Ziel identisch sind oder eine ID fehlt.
    pub fn placement_for(&self, dragged: &str, target: &str) -> Option<DropPlacement> {
        if dragged == target {
            return None;
        }
        let dragged_index = self.ids.get_index_of(dragged)?;
        let target_index = self.ids.get_index_of(target)?;
        Some(if dragged_index < target_index {
            DropPlacement::After
        } else {
            DropPlacement::Before
        })
    }

    /// Entfernt `dragged` und fügt es direkt vor bzw. nach `target` wieder ein.
    pub fn move_to(&mut self, dragged: &str, target: &str, placement: DropPlacement) -> bool {
        if dragged == target || !self.ids.contains(target) {
            return false;
        }
        let Some(from) = self.ids.get_index_of(dragged) else {
            return false;
        };
        let Some(id) = self.ids.shift_remove_index(from) else {
            return false;
        };
        let Some(target_index) = self.ids.get_index_of(target) else {
            return false;
        };
        let insert_at = match placement {
            DropPlacement::Before => target_index,
            DropPlacement::After => target_index + 1,
        };
        self.ids.shift_insert(insert_at, id);

        insert_at != from
    }

    /// Drag-Drop in einem Schritt: Placement bestimmen und verschieben.
    pub fn drop_onto(&mut self, dragged: &str, target: &str) -> bool {
        match self.placement_for(dragged, target) {
            Some(placement) => self.move_to(dragged, target, placement),
            None => false,
        }
    }
}

impl<S: Into<String>> FromIterator<S> for LayerOrder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests;
