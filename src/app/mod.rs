//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod manager;
/// Manager State
///
/// Dieses Modul verwaltet Layer, Reihenfolge und Panel-Zustand.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::LayerController;
pub use events::{LayerCommand, LayerIntent};
pub use manager::{LayerManager, PanelHandle};
pub use state::{DragState, LayerStore, ManagerState, PanelState, StyleEditorState, StyleField};
