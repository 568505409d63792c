//! Konstruktions-Optionen des Layer-Managers.
//!
//! `ManagerOptions` ist serialisierbar und kann als TOML neben der Binary
//! abgelegt werden. Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::LayerDescriptor;

// ── Panel ───────────────────────────────────────────────────────────

/// Abstand des Panels zum Kartenrand in Pixeln.
pub const PANEL_MARGIN_PX: f32 = 10.0;
/// Standardbreite des Panels in Pixeln.
pub const PANEL_WIDTH_PX: f32 = 280.0;
/// Schrittweite des Opacity-Reglers.
pub const OPACITY_STEP: f64 = 0.05;

/// Kartenecke, an der das Panel verankert wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelPosition {
    /// Oben links
    #[default]
    TopLeft,
    /// Oben rechts
    TopRight,
    /// Unten links
    BottomLeft,
    /// Unten rechts
    BottomRight,
}

impl PanelPosition {
    /// Style-Name der Position (z.B. `top-left`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelPosition::TopLeft => "top-left",
            PanelPosition::TopRight => "top-right",
            PanelPosition::BottomLeft => "bottom-left",
            PanelPosition::BottomRight => "bottom-right",
        }
    }

    /// Anker für `egui::Area`.
    pub fn align(&self) -> egui::Align2 {
        match self {
            PanelPosition::TopLeft => egui::Align2::LEFT_TOP,
            PanelPosition::TopRight => egui::Align2::RIGHT_TOP,
            PanelPosition::BottomLeft => egui::Align2::LEFT_BOTTOM,
            PanelPosition::BottomRight => egui::Align2::RIGHT_BOTTOM,
        }
    }

    /// Versatz vom Anker nach innen.
    pub fn offset(&self) -> egui::Vec2 {
        let m = PANEL_MARGIN_PX;
        match self {
            PanelPosition::TopLeft => egui::vec2(m, m),
            PanelPosition::TopRight => egui::vec2(-m, m),
            PanelPosition::BottomLeft => egui::vec2(m, -m),
            PanelPosition::BottomRight => egui::vec2(-m, -m),
        }
    }
}

/// Optionen beim Erzeugen des Layer-Managers.
/// Wird als `map_layer_manager.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagerOptions {
    /// Verwaltete Layer in Panel-Reihenfolge (oben → unten)
    #[serde(default)]
    pub layers: Vec<LayerDescriptor>,
    /// Kartenecke des Panels
    #[serde(default)]
    pub position: PanelPosition,
    /// Panel startet eingeklappt
    #[serde(default)]
    pub collapsed: bool,
    /// Verschiebe-Steuerelemente ausblenden
    #[serde(default)]
    pub hide_reorder: bool,
}

impl ManagerOptions {
    /// Erstellt Optionen für die übergebenen Layer.
    pub fn with_layers(layers: Vec<LayerDescriptor>) -> Self {
        Self {
            layers,
            ..Default::default()
        }
    }

    /// Ersetzt die Layer durch ein JSON-Array von Deskriptoren.
    pub fn with_layers_json(mut self, json: &str) -> anyhow::Result<Self> {
        self.layers = serde_json::from_str(json)?;
        Ok(self)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_layer_manager"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_layer_manager.toml")
    }
}
