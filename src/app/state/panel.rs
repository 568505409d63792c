use crate::core::{LayerType, PaintControl, PaintValue};
use crate::shared::PanelPosition;

/// Laufende Drag-and-Drop-Sitzung im Panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Gezogener Layer
    pub dragged: String,
    /// Layer, über dem der Zeiger aktuell steht (Drop-Markierung)
    pub hovered: Option<String>,
}

/// Ein Eingabefeld des Style-Editors.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleField {
    /// Steuerelement-Definition aus dem Paint-Schema
    pub control: PaintControl,
    /// Aktueller (ggf. editierter) Wert
    pub value: PaintValue,
}

/// Zustand des geöffneten Style-Editors.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEditorState {
    /// Bearbeiteter Layer
    pub layer_id: String,
    /// Render-Typ laut Engine (None = Layer fehlt in der Engine)
    pub layer_type: Option<LayerType>,
    /// Eingabefelder in Schema-Reihenfolge
    pub fields: Vec<StyleField>,
}

impl StyleEditorState {
    /// Sucht ein Feld anhand des Property-Namens.
    pub fn field(&self, property: &str) -> Option<&StyleField> {
        self.fields
            .iter()
            .find(|field| field.control.property == property)
    }

    /// Setzt den Entwurfswert eines Feldes. Unbekannte Properties werden ignoriert.
    pub fn set_draft(&mut self, property: &str, value: PaintValue) -> bool {
        match self
            .fields
            .iter_mut()
            .find(|field| field.control.property == property)
        {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }
}

/// Präsentationszustand des Panels.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    /// Kartenecke des Panels
    pub position: PanelPosition,
    /// Panel eingeklappt (nur Header sichtbar)
    pub collapsed: bool,
    /// Layer-Liste eingeklappt
    pub list_collapsed: bool,
    /// Verschiebe-Steuerelemente ausblenden
    pub hide_reorder: bool,
    /// Aktive Drag-Sitzung
    pub drag: Option<DragState>,
    /// Geöffneter Style-Editor (höchstens einer)
    pub style_editor: Option<StyleEditorState>,
}

impl PanelState {
    /// Gibt `true` zurück, wenn der Style-Editor für diesen Layer offen ist.
    pub fn is_editor_open_for(&self, layer_id: &str) -> bool {
        self.style_editor
            .as_ref()
            .is_some_and(|editor| editor.layer_id == layer_id)
    }

    /// Gezogener Layer der aktiven Drag-Sitzung.
    pub fn dragged_layer(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.dragged.as_str())
    }
}
