use crate::core::{LayerDescriptor, PaintValue};

/// Layer-Intents sind Eingaben aus UI/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum LayerIntent {
    /// Panel ein-/ausklappen (Header-Button)
    PanelToggleRequested,
    /// Layer-Liste ein-/ausklappen
    LayerListToggleRequested,
    /// Sichtbarkeits-Checkbox eines Layers geändert
    LayerVisibilityToggled { layer_id: String, visible: bool },
    /// Alle Layer ein- bzw. ausblenden
    ToggleAllRequested,
    /// Opacity-Regler eines Layers bewegt
    LayerOpacityChanged { layer_id: String, opacity: f32 },
    /// Layer eine Position nach oben
    MoveLayerUpRequested { layer_id: String },
    /// Layer eine Position nach unten
    MoveLayerDownRequested { layer_id: String },
    /// Drag am Griff eines Layers begonnen
    LayerDragStarted { layer_id: String },
    /// Gezogener Layer schwebt über einem anderen Eintrag
    LayerDragHovered { layer_id: String },
    /// Gezogener Layer auf einem Eintrag losgelassen
    LayerDropped { target_id: String },
    /// Drag beendet (auch ohne Drop)
    LayerDragEnded,
    /// Style-Editor eines Layers öffnen/schließen
    StyleEditorToggleRequested { layer_id: String },
    /// Eingabefeld im Style-Editor geändert
    StyleDraftChanged {
        layer_id: String,
        property: String,
        value: PaintValue,
    },
    /// Style-Editor: "Apply"
    ApplyStylesRequested { layer_id: String },
    /// Style-Editor: "Reset"
    ResetStylesRequested { layer_id: String },
    /// Layer aus Panel und Engine entfernen
    RemoveLayerRequested { layer_id: String },
    /// Neuen Layer im Panel registrieren
    AddLayerRequested { descriptor: LayerDescriptor },
}
