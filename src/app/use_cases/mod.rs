//! Use-Cases der Application-Layer-Orchestrierung.

pub mod lifecycle;
pub mod panel;
pub mod reorder;
pub mod style_editor;
pub mod visibility;
