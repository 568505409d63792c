use map_layer_manager::{
    EngineLayer, LayerDescriptor, LayerIntent, LayerManager, LayerType, ManagerOptions,
    MapEngine, MemoryEngine, PaintValue, PanelPosition,
};

fn make_manager() -> LayerManager {
    let options: ManagerOptions = toml::from_str(
        r##"
            position = "top-right"
            hide_reorder = true

            [[layers]]
            id = "pois"
            name = "Points of Interest"

            [[layers]]
            id = "roads"
            opacity = 0.6

            [[layers]]
            id = "parks"
            visible = false
        "##,
    )
    .expect("Optionen sollten parsebar sein");
    LayerManager::new(options)
}

fn make_engine() -> MemoryEngine {
    MemoryEngine::new()
        .with_layer(EngineLayer::new("background", LayerType::Background))
        .with_layer(EngineLayer::new("parks", LayerType::Fill))
        .with_layer(EngineLayer::new("roads", LayerType::Line))
        .with_layer(
            EngineLayer::new("pois", LayerType::Circle).with_paint("circle-radius", 4.0),
        )
}

#[test]
fn test_options_seed_state_and_position() {
    let manager = make_manager();

    assert_eq!(manager.position(), PanelPosition::TopRight);
    let state = manager.state();
    assert!(state.panel.hide_reorder);
    assert_eq!(
        state.layers.descriptor("pois").map(LayerDescriptor::display_name),
        Some("Points of Interest")
    );
    assert_eq!(state.layers.config("roads").map(|c| c.opacity), Some(0.6));
    assert_eq!(state.layers.config("parks").map(|c| c.visible), Some(false));
}

#[test]
fn test_full_lifecycle_attach_reorder_remove_detach() {
    let mut manager = make_manager();
    let handle = manager.on_add(Box::new(make_engine()));
    assert_eq!(handle.position, PanelPosition::TopRight);

    manager
        .dispatch(LayerIntent::MoveLayerDownRequested {
            layer_id: "pois".into(),
        })
        .expect("Move erwartet");
    let engine = manager.engine().expect("Engine angehängt");
    assert_eq!(
        engine.style_layers(),
        vec!["background", "parks", "pois", "roads"]
    );

    manager.remove_layer("roads").expect("Entfernen erwartet");
    let engine = manager.engine().expect("Engine angehängt");
    assert!(!engine.has_layer("roads"));
    assert!(!manager.state().layers.contains("roads"));

    let engine = manager.on_remove().expect("Engine erwartet");
    assert_eq!(engine.style_layers(), vec!["background", "parks", "pois"]);
    assert!(manager.engine().is_none());
}

#[test]
fn test_added_layer_joins_bottom_of_order_and_reorders() {
    let mut manager = make_manager();
    let mut engine = make_engine();
    engine.add_layer(EngineLayer::new("labels", LayerType::Symbol));
    manager.on_add(Box::new(engine));

    manager
        .add_layer(LayerDescriptor::new("labels"))
        .expect("Layer erwartet");
    manager
        .dispatch(LayerIntent::MoveLayerUpRequested {
            layer_id: "labels".into(),
        })
        .expect("Move erwartet");

    let order: Vec<&str> = manager.state().layers.order().iter().collect();
    assert_eq!(order, vec!["pois", "roads", "labels", "parks"]);
    let engine = manager.engine().expect("Engine angehängt");
    assert_eq!(
        engine.style_layers(),
        vec!["background", "parks", "labels", "roads", "pois"]
    );
}

#[test]
fn test_toggle_all_shows_everything_when_one_is_hidden() {
    let mut manager = make_manager();
    manager.on_add(Box::new(make_engine()));

    manager.toggle_all().expect("ToggleAll erwartet");

    assert!(manager.state().layers.all_visible());
    let engine = manager.engine().expect("Engine angehängt");
    assert_eq!(
        engine.get_layout_property("parks", "visibility").as_deref(),
        Some("visible")
    );
}

#[test]
fn test_opacity_uses_engine_layer_type() {
    let mut manager = make_manager();
    manager.on_add(Box::new(make_engine()));

    manager
        .dispatch(LayerIntent::LayerOpacityChanged {
            layer_id: "pois".into(),
            opacity: 0.25,
        })
        .expect("Opacity erwartet");

    let engine = manager.engine().expect("Engine angehängt");
    let layer = engine.get_layer("pois").expect("Layer erwartet");
    assert_eq!(
        layer.paint.get("circle-opacity"),
        Some(&PaintValue::Number(0.25))
    );
}

#[test]
fn test_detached_manager_drops_ui_intents() {
    let mut manager = make_manager();

    manager
        .dispatch(LayerIntent::PanelToggleRequested)
        .expect("Dispatch ohne Engine ist kein Fehler");

    assert!(!manager.state().panel.collapsed);
    assert!(manager.state().command_log.is_empty());
}
