//! Manager State: zentrale Datenhaltung.

mod layer_store;
mod manager_state;
mod panel;

pub use layer_store::LayerStore;
pub use manager_state::ManagerState;
pub use panel::{DragState, PanelState, StyleEditorState, StyleField};
