//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält Optionen und Konstanten, die zwischen `app` und `ui` geteilt werden.

pub mod options;

pub use options::{ManagerOptions, PanelPosition};
pub use options::{OPACITY_STEP, PANEL_MARGIN_PX, PANEL_WIDTH_PX};
