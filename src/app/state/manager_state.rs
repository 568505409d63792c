use crate::app::CommandLog;
use crate::engine::SyncReport;
use crate::shared::ManagerOptions;

use super::{LayerStore, PanelState};

/// Hauptzustand des Layer-Managers
pub struct ManagerState {
    /// Verwaltete Layer (Reihenfolge, Deskriptoren, Konfiguration)
    pub layers: LayerStore,
    /// Panel-Zustand (Einklappen, Drag, Style-Editor)
    pub panel: PanelState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ergebnis der letzten Reihenfolge-Synchronisation
    pub last_sync: Option<SyncReport>,
}

impl ManagerState {
    /// Erstellt einen leeren Zustand
    pub fn new() -> Self {
        Self {
            layers: LayerStore::new(),
            panel: PanelState::default(),
            command_log: CommandLog::new(),
            last_sync: None,
        }
    }

    /// Erstellt den Zustand aus Konstruktions-Optionen.
    ///
    /// Doppelte Layer-IDs werden mit Warnung verworfen.
    pub fn from_options(options: ManagerOptions) -> Self {
        let mut state = Self::new();
        state.panel.position = options.position;
        state.panel.collapsed = options.collapsed;
        state.panel.hide_reorder = options.hide_reorder;
        for descriptor in options.layers {
            let id = descriptor.id.clone();
            if !state.layers.insert(descriptor) {
                log::warn!("Layer '{}' doppelt in den Optionen, ignoriert", id);
            }
        }
        state
    }

    /// Beschriftung des "Alle umschalten"-Buttons.
    pub fn toggle_all_label(&self) -> &'static str {
        if self.layers.all_visible() {
            "Hide all layers"
        } else {
            "Show all layers"
        }
    }
}

impl Default for ManagerState {
    fn default() -> Self {
        Self::new()
    }
}
