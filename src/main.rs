//! Map Layer Manager Demo.
//!
//! Zeigt das Layer-Panel über einer In-Memory-Engine, deren Render-Stack als
//! vereinfachte Kartenansicht gezeichnet wird.

use eframe::egui;
use map_layer_manager::{
    ui, EngineLayer, LayerDescriptor, LayerManager, LayerType, ManagerOptions, MemoryEngine,
    PaintProperties, PaintValue,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Map Layer Manager v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Map Layer Manager"),
            ..Default::default()
        };

        eframe::run_native(
            "Map Layer Manager",
            options,
            Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    manager: LayerManager,
}

impl DemoApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ManagerOptions::config_path();
        let mut options = ManagerOptions::load_from_file(&config_path);
        if options.layers.is_empty() {
            options.layers = demo_layers();
        }

        let mut manager = LayerManager::new(options);
        let handle = manager.on_add(Box::new(demo_engine()));
        log::info!("Panel an Position {}", handle.position.as_str());

        Self { manager }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if let Some(engine) = self.manager.engine() {
                    ui::render_map_preview(ui, engine);
                }
            });

        self.manager.show(ctx);
    }
}

fn demo_layers() -> Vec<LayerDescriptor> {
    let mut poi_style = PaintProperties::new();
    poi_style.insert("circle-color".into(), PaintValue::from("#e6550d"));
    poi_style.insert("circle-radius".into(), PaintValue::Number(6.0));

    vec![
        LayerDescriptor::new("pois")
            .with_name("Points of Interest")
            .with_original_style(poi_style),
        LayerDescriptor::new("roads").with_name("Roads"),
        LayerDescriptor::new("parks")
            .with_name("Parks")
            .with_opacity(0.8),
        LayerDescriptor::new("hillshade")
            .with_name("Hillshade")
            .with_visible(false),
    ]
}

fn demo_engine() -> MemoryEngine {
    MemoryEngine::new()
        .with_layer(EngineLayer::new("background", LayerType::Background).with_paint(
            "background-color",
            "#f2efe9",
        ))
        .with_layer(EngineLayer::new("hillshade", LayerType::Hillshade))
        .with_layer(
            EngineLayer::new("parks", LayerType::Fill)
                .with_paint("fill-color", "rgb(116, 196, 118)")
                .with_paint("fill-opacity", 0.8),
        )
        .with_layer(
            EngineLayer::new("roads", LayerType::Line)
                .with_paint("line-color", "#636363")
                .with_paint("line-width", 3.0),
        )
        .with_layer(
            EngineLayer::new("pois", LayerType::Circle)
                .with_paint("circle-color", "#e6550d")
                .with_paint("circle-radius", 6.0),
        )
        .with_layer(EngineLayer::new("place-labels", LayerType::Symbol))
}
