//! Map Layer Manager Library.
//! Layer-Panel für Karten-Engines als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod engine;
pub mod shared;
pub mod ui;

pub use app::{
    LayerCommand, LayerController, LayerIntent, LayerManager, ManagerState, PanelHandle,
};
pub use core::{
    DropPlacement, LayerConfig, LayerDescriptor, LayerOrder, LayerType, PaintProperties,
    PaintValue,
};
pub use engine::{
    sync_layer_order, EngineError, EngineLayer, MapEngine, MemoryEngine, SyncReport,
};
pub use shared::{ManagerOptions, PanelPosition};
