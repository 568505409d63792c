//! Überträgt die Panel-Reihenfolge auf den Render-Stack der Engine.
//!
//! Das Panel listet oben → unten, die Engine zeichnet unten → oben. Nach jeder
//! Umsortierung wird die komplette relative Reihenfolge neu angewendet, weil
//! `move_layer` nur relativ zu einem Nachbarn arbeitet.

use std::collections::HashSet;

use super::{EngineError, MapEngine};
use crate::core::LayerOrder;

/// Ergebnis eines Sync-Durchlaufs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Erfolgreich verschobene Layer in Aufruf-Reihenfolge (unten → oben)
    pub moved: Vec<String>,
    /// Verwaltete Layer, die in der Engine fehlen
    pub skipped: Vec<String>,
    /// Layer, deren Move fehlgeschlagen ist
    pub failed: Vec<(String, EngineError)>,
    /// Unterster Layer, wenn die Engine keinen fremden Layer kennt (nicht verschoben)
    pub unanchored: Option<String>,
}

impl SyncReport {
    /// Gibt `true` zurück, wenn kein Move fehlgeschlagen ist.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Wendet `reverse(order)` auf den Render-Stack an.
///
/// Läuft unten → oben: der unterste verwaltete Layer wird direkt über die
/// fremden Basiskarten-Layer gesetzt, die bereits unter den verwalteten Layern
/// liegen, sonst direkt unter den ersten fremden Layer im Stack. Jeder weitere
/// landet direkt über dem zuvor verarbeiteten. Kennt die Engine keinen fremden
/// Layer, bleibt der unterste Layer liegen. Ein fehlgeschlagener Move wird
/// geloggt und bricht den Durchlauf nicht ab.
pub fn sync_layer_order(engine: &mut dyn MapEngine, order: &LayerOrder) -> SyncReport {
    let bottom_to_top = order.bottom_to_top();
    let managed: HashSet<&str> = bottom_to_top.iter().copied().collect();
    let mut report = SyncReport::default();
    let mut previous: Option<&str> = None;

    for id in bottom_to_top {
        if !engine.has_layer(id) {
            log::debug!("Layer '{}' fehlt in der Engine, übersprungen", id);
            report.skipped.push(id.to_string());
            continue;
        }

        let anchor = match previous {
            Some(prev) if engine.has_layer(prev) => Some(Anchor::Above(prev.to_string())),
            _ => basemap_anchor(&engine.style_layers(), &managed),
        };

        let Some(anchor) = anchor else {
            log::debug!(
                "Kein fremder Layer in der Engine, '{}' bleibt unverändert",
                id
            );
            report.unanchored = Some(id.to_string());
            previous = Some(id);
            continue;
        };

        let result = match &anchor {
            Anchor::Above(below) => move_above(engine, id, below),
            Anchor::Below(above) => engine.move_layer(id, Some(above.as_str())),
        };

        match result {
            Ok(()) => {
                report.moved.push(id.to_string());
                previous = Some(id);
            }
            Err(e) => {
                log::warn!("Layer '{}' konnte nicht verschoben werden: {}", id, e);
                report.failed.push((id.to_string(), e));
            }
        }
    }

    log::debug!(
        "Layer-Reihenfolge synchronisiert: {} verschoben, {} übersprungen, {} fehlgeschlagen",
        report.moved.len(),
        report.skipped.len(),
        report.failed.len()
    );
    report
}

/// Referenz-Layer für einen Move.
#[derive(Debug, Clone, PartialEq)]
enum Anchor {
    /// Direkt über diesem Layer platzieren
    Above(String),
    /// Direkt unter diesem Layer platzieren
    Below(String),
}

/// Anker für den untersten verwalteten Layer.
///
/// Bevorzugt den obersten fremden Layer unterhalb des verwalteten Blocks,
/// sonst den ersten fremden Layer im Stack. `None`, wenn alle Layer verwaltet sind.
fn basemap_anchor(stack: &[String], managed: &HashSet<&str>) -> Option<Anchor> {
    let is_foreign = |id: &&String| !managed.contains(id.as_str());
    let lowest_managed = stack
        .iter()
        .position(|id| managed.contains(id.as_str()))
        .unwrap_or(stack.len());
    if let Some(below) = stack[..lowest_managed].iter().rev().find(is_foreign) {
        return Some(Anchor::Above(below.clone()));
    }
    stack
        .iter()
        .find(is_foreign)
        .map(|first| Anchor::Below(first.clone()))
}

/// Setzt `id` direkt über `anchor`.
///
/// `move_layer` platziert unterhalb seines Referenz-Layers, daher wird der
/// Layer referenziert, der aktuell direkt über `anchor` liegt.
fn move_above(engine: &mut dyn MapEngine, id: &str, anchor: &str) -> Result<(), EngineError> {
    if id == anchor {
        return Ok(());
    }
    let stack = engine.style_layers();
    let rest: Vec<&str> = stack
        .iter()
        .map(String::as_str)
        .filter(|layer| *layer != id)
        .collect();
    let anchor_index = rest
        .iter()
        .position(|layer| *layer == anchor)
        .ok_or_else(|| EngineError::UnknownAnchor(anchor.to_string()))?;
    let before = rest.get(anchor_index + 1).copied();
    engine.move_layer(id, before)
}
