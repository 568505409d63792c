use crate::core::{DropPlacement, LayerDescriptor, PaintValue};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerCommand {
    /// Panel ein-/ausklappen
    TogglePanel,
    /// Layer-Liste ein-/ausklappen
    ToggleLayerList,
    /// Sichtbarkeit eines Layers setzen
    SetLayerVisibility { layer_id: String, visible: bool },
    /// Sichtbarkeit aller Layer setzen (None = invertieren)
    ToggleAllLayers { target: Option<bool> },
    /// Opacity eines Layers setzen
    SetLayerOpacity { layer_id: String, opacity: f32 },
    /// Layer mit Vorgänger tauschen
    MoveLayerUp { layer_id: String },
    /// Layer mit Nachfolger tauschen
    MoveLayerDown { layer_id: String },
    /// Layer vor/nach einem Ziel einsortieren
    MoveLayerTo {
        layer_id: String,
        target_id: String,
        placement: DropPlacement,
    },
    /// Panel-Reihenfolge auf die Engine übertragen
    SyncLayerOrder,
    /// Drag-Sitzung starten
    BeginDrag { layer_id: String },
    /// Drop-Markierung setzen
    HoverDrag { layer_id: String },
    /// Drag-Sitzung beenden
    EndDrag,
    /// Style-Editor für einen Layer öffnen (schließt andere)
    OpenStyleEditor { layer_id: String },
    /// Style-Editor schließen
    CloseStyleEditor,
    /// Entwurfswert im Style-Editor setzen
    SetStyleDraft {
        layer_id: String,
        property: String,
        value: PaintValue,
    },
    /// Paint-Property direkt schreiben (Live-Vorschau der Regler)
    PreviewPaintProperty {
        layer_id: String,
        property: String,
        value: PaintValue,
    },
    /// Alle Editor-Werte in die Engine schreiben
    ApplyStyles { layer_id: String },
    /// Style-Snapshot wiederherstellen
    ResetStyles { layer_id: String },
    /// Layer registrieren
    AddLayer { descriptor: LayerDescriptor },
    /// Layer entfernen
    RemoveLayer { layer_id: String },
}
