use crate::app::{DragState, LayerCommand, LayerIntent, ManagerState};
use crate::core::{DropPlacement, LayerDescriptor, PaintValue};
use crate::shared::ManagerOptions;

use super::map_intent_to_commands;

fn state_with(ids: &[&str]) -> ManagerState {
    ManagerState::from_options(ManagerOptions::with_layers(
        ids.iter().map(|id| LayerDescriptor::new(*id)).collect(),
    ))
}

#[test]
fn move_up_maps_to_move_and_sync() {
    let state = state_with(&["A", "B", "C"]);

    let commands = map_intent_to_commands(
        &state,
        LayerIntent::MoveLayerUpRequested {
            layer_id: "B".into(),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(&commands[0], LayerCommand::MoveLayerUp { layer_id } if layer_id == "B"));
    assert!(matches!(commands[1], LayerCommand::SyncLayerOrder));
}

#[test]
fn move_up_on_first_layer_maps_to_nothing() {
    let state = state_with(&["A", "B"]);

    let commands = map_intent_to_commands(
        &state,
        LayerIntent::MoveLayerUpRequested {
            layer_id: "A".into(),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn move_down_on_last_layer_maps_to_nothing() {
    let state = state_with(&["A", "B"]);

    let commands = map_intent_to_commands(
        &state,
        LayerIntent::MoveLayerDownRequested {
            layer_id: "B".into(),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn drop_downward_maps_to_move_after_target() {
    let mut state = state_with(&["A", "B", "C"]);
    state.panel.drag = Some(DragState {
        dragged: "A".into(),
        hovered: Some("C".into()),
    });

    let commands = map_intent_to_commands(
        &state,
        LayerIntent::LayerDropped {
            target_id: "C".into(),
        },
    );

    assert_eq!(
        commands,
        vec![
            LayerCommand::MoveLayerTo {
                layer_id: "A".into(),
                target_id: "C".into(),
                placement: DropPlacement::After,
            },
            LayerCommand::SyncLayerOrder,
            LayerCommand::EndDrag,
        ]
    );
}

#[test]
fn drop_on_dragged_layer_only_ends_drag() {
    let mut state = state_with(&["A", "B"]);
    state.panel.drag = Some(DragState {
        dragged: "A".into(),
        hovered: None,
    });

    let commands = map_intent_to_commands(
        &state,
        LayerIntent::LayerDropped {
            target_id: "A".into(),
        },
    );

    assert_eq!(commands, vec![LayerCommand::EndDrag]);
}

#[test]
fn style_toggle_closes_open_editor_of_same_layer() {
    let mut state = state_with(&["A"]);
    state.panel.style_editor = Some(crate::app::StyleEditorState {
        layer_id: "A".into(),
        layer_type: None,
        fields: Vec::new(),
    });

    let commands = map_intent_to_commands(
        &state,
        LayerIntent::StyleEditorToggleRequested {
            layer_id: "A".into(),
        },
    );

    assert_eq!(commands, vec![LayerCommand::CloseStyleEditor]);
}

#[test]
fn slider_draft_is_previewed_but_color_draft_is_not() {
    let state = state_with(&["A"]);

    let slider = map_intent_to_commands(
        &state,
        LayerIntent::StyleDraftChanged {
            layer_id: "A".into(),
            property: "line-width".into(),
            value: PaintValue::Number(4.0),
        },
    );
    let color = map_intent_to_commands(
        &state,
        LayerIntent::StyleDraftChanged {
            layer_id: "A".into(),
            property: "line-color".into(),
            value: PaintValue::from("#ff0000"),
        },
    );

    assert_eq!(slider.len(), 2);
    assert!(matches!(
        slider[1],
        LayerCommand::PreviewPaintProperty { .. }
    ));
    assert_eq!(color.len(), 1);
    assert!(matches!(color[0], LayerCommand::SetStyleDraft { .. }));
}
