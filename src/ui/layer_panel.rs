//! Layer-Panel: Header, Titelzeile und eine Zeile pro verwaltetem Layer.

use crate::app::{LayerIntent, ManagerState};
use crate::core::{DropPlacement, LayerDescriptor};
use crate::shared::{OPACITY_STEP, PANEL_WIDTH_PX};

use super::style_editor::render_style_editor;

const LIST_MAX_HEIGHT_PX: f32 = 420.0;

/// Rendert das Panel in der konfigurierten Kartenecke und gibt erzeugte Events zurück.
pub fn render_layer_panel(ctx: &egui::Context, state: &ManagerState) -> Vec<LayerIntent> {
    let mut events = Vec::new();
    let position = state.panel.position;

    egui::Area::new(egui::Id::new(crate::app::LayerManager::AREA_ID))
        .anchor(position.align(), position.offset())
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| {
                if ui
                    .button("☰ Layers")
                    .on_hover_text("Toggle Layers")
                    .clicked()
                {
                    events.push(LayerIntent::PanelToggleRequested);
                }
                if state.panel.collapsed {
                    return;
                }

                ui.set_width(PANEL_WIDTH_PX);
                ui.separator();
                render_title_row(ui, state, &mut events);

                if !state.panel.list_collapsed {
                    ui.separator();
                    egui::ScrollArea::vertical()
                        .max_height(LIST_MAX_HEIGHT_PX)
                        .show(ui, |ui| {
                            for descriptor in state.layers.descriptors_in_order() {
                                render_layer_row(ui, state, descriptor, &mut events);
                            }
                        });
                }
            });
        });

    // Drag ohne Drop auf einer Zeile beendet
    if state.panel.drag.is_some() && !egui::DragAndDrop::has_any_payload(ctx) {
        events.push(LayerIntent::LayerDragEnded);
    }

    events
}

fn render_title_row(ui: &mut egui::Ui, state: &ManagerState, events: &mut Vec<LayerIntent>) {
    ui.horizontal(|ui| {
        ui.strong("Layers");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let collapse_icon = if state.panel.list_collapsed { "▸" } else { "▾" };
            if ui.small_button(collapse_icon).clicked() {
                events.push(LayerIntent::LayerListToggleRequested);
            }
            let eye = if state.layers.all_visible() { "👁" } else { "🚫" };
            if ui
                .small_button(eye)
                .on_hover_text(state.toggle_all_label())
                .clicked()
            {
                events.push(LayerIntent::ToggleAllRequested);
            }
        });
    });
}

fn render_layer_row(
    ui: &mut egui::Ui,
    state: &ManagerState,
    descriptor: &LayerDescriptor,
    events: &mut Vec<LayerIntent>,
) {
    let layer_id = descriptor.id.as_str();
    let Some(config) = state.layers.config(layer_id) else {
        return;
    };
    let hide_reorder = state.panel.hide_reorder;

    let row = ui.horizontal(|ui| {
        if !hide_reorder {
            let handle = ui.dnd_drag_source(
                egui::Id::new(("layer_drag", layer_id)),
                layer_id.to_string(),
                |ui| ui.label("⠿"),
            );
            if handle.response.drag_started() {
                events.push(LayerIntent::LayerDragStarted {
                    layer_id: layer_id.to_string(),
                });
            }
        }

        let mut visible = config.visible;
        if ui.checkbox(&mut visible, descriptor.display_name()).changed() {
            events.push(LayerIntent::LayerVisibilityToggled {
                layer_id: layer_id.to_string(),
                visible,
            });
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Remove layer").clicked() {
                events.push(LayerIntent::RemoveLayerRequested {
                    layer_id: layer_id.to_string(),
                });
            }
            if ui
                .small_button("🎨")
                .on_hover_text("Edit style")
                .clicked()
            {
                events.push(LayerIntent::StyleEditorToggleRequested {
                    layer_id: layer_id.to_string(),
                });
            }
            if !hide_reorder {
                if ui.small_button("⬇").on_hover_text("Move down").clicked() {
                    events.push(LayerIntent::MoveLayerDownRequested {
                        layer_id: layer_id.to_string(),
                    });
                }
                if ui.small_button("⬆").on_hover_text("Move up").clicked() {
                    events.push(LayerIntent::MoveLayerUpRequested {
                        layer_id: layer_id.to_string(),
                    });
                }
            }
        });
    });

    handle_drop_target(ui, state, layer_id, &row.response, events);

    let mut opacity = config.opacity;
    if ui
        .add(
            egui::Slider::new(&mut opacity, 0.0..=1.0)
                .step_by(OPACITY_STEP)
                .fixed_decimals(2)
                .text("Opacity"),
        )
        .changed()
    {
        events.push(LayerIntent::LayerOpacityChanged {
            layer_id: layer_id.to_string(),
            opacity,
        });
    }

    if let Some(editor) = state
        .panel
        .style_editor
        .as_ref()
        .filter(|editor| editor.layer_id == layer_id)
    {
        render_style_editor(ui, editor, events);
    }
    ui.separator();
}

/// Drop-Markierung und Drop auf einer Layer-Zeile.
fn handle_drop_target(
    ui: &egui::Ui,
    state: &ManagerState,
    layer_id: &str,
    response: &egui::Response,
    events: &mut Vec<LayerIntent>,
) {
    let Some(drag) = state.panel.drag.as_ref() else {
        return;
    };

    if response.dnd_release_payload::<String>().is_some() {
        events.push(LayerIntent::LayerDropped {
            target_id: layer_id.to_string(),
        });
        return;
    }

    if response.dnd_hover_payload::<String>().is_none() {
        return;
    }
    if drag.hovered.as_deref() != Some(layer_id) {
        events.push(LayerIntent::LayerDragHovered {
            layer_id: layer_id.to_string(),
        });
    }

    if let Some(placement) = state.layers.order().placement_for(&drag.dragged, layer_id) {
        let rect = response.rect;
        let y = match placement {
            DropPlacement::Before => rect.top(),
            DropPlacement::After => rect.bottom(),
        };
        let stroke = egui::Stroke::new(2.0, ui.visuals().selection.bg_fill);
        ui.painter().hline(rect.x_range(), y, stroke);
    }
}
