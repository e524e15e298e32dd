use bevy::prelude::*;
use bevy_egui::{EguiContext, egui};
use hex_painter::{
    ButtonId, HexPainter, Orientation, PainterEvent, PointerButton, Result, SliderKey,
};

use super::UiConfig;
use super::entities::{ColorDraft, MenuAnchor, PainterCamera};

/// Writes the outcome of a controller call, logging rejected requests.
fn emit(outcome: Result<Vec<PainterEvent>>, writer: &mut MessageWriter<PainterEvent>) {
    match outcome {
        Ok(events) => {
            for event in events {
                writer.write(event);
            }
        }
        Err(err) => warn!("{err}"),
    }
}

fn color32([r, g, b]: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

fn points(vertices: &[IVec2; 6]) -> Vec<egui::Pos2> {
    vertices
        .iter()
        .map(|v| egui::pos2(v.x as f32, v.y as f32))
        .collect()
}

// ── Startup ────────────────────────────────────────────────────────

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, PainterCamera, Name::new("Painter Camera")));
}

pub fn fit_window(
    cfg: Res<UiConfig>,
    painter: Res<HexPainter>,
    mut windows: Query<&mut Window>,
) {
    let size = cfg.window_size(painter.grid());
    for mut window in &mut windows {
        window.resolution.set(size.x, size.y);
    }
}

// ── Panels ─────────────────────────────────────────────────────────

/// Right-hand panel: grid sliders, orientation, palette and buttons.
pub fn side_panel(
    mut egui_ctx: Query<&mut EguiContext>,
    cfg: Res<UiConfig>,
    mut painter: ResMut<HexPainter>,
    mut writer: MessageWriter<PainterEvent>,
) {
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let params = painter.grid().params();
    let mut moved = None;
    let mut orientation = params.orientation;
    let mut pressed = None;

    egui::SidePanel::right("hex_painter_settings")
        .exact_width(cfg.panel_width)
        .resizable(false)
        .show(ctx.get_mut(), |ui| {
            ui.heading("Grid Settings");
            for key in SliderKey::ALL {
                let mut value = key.value(&params);
                let slider = egui::Slider::new(&mut value, key.range()).text(key.label());
                if ui.add(slider).changed() {
                    moved = Some((key, value));
                }
            }
            egui::ComboBox::from_label("Orientation")
                .selected_text(orientation.label())
                .show_ui(ui, |ui| {
                    for option in Orientation::ALL {
                        ui.selectable_value(&mut orientation, option, option.label());
                    }
                });

            ui.separator();
            ui.heading("Terrain Types");
            for (index, terrain) in painter.palette().iter().enumerate() {
                ui.horizontal(|ui| {
                    let swatch = egui::Button::new("")
                        .fill(color32(terrain.color))
                        .min_size(egui::vec2(24.0, 18.0));
                    if ui.add(swatch).on_hover_text("Change color").clicked() {
                        pressed = Some(ButtonId::TerrainColor(index));
                    }
                    ui.label(terrain.name.as_str());
                    if ui.small_button("x").on_hover_text("Remove").clicked() {
                        pressed = Some(ButtonId::RemoveTerrain(index));
                    }
                });
            }
            if ui.button("Add Terrain").clicked() {
                pressed = Some(ButtonId::AddTerrain);
            }

            ui.separator();
            if ui.button("Randomize All").clicked() {
                pressed = Some(ButtonId::RandomizeAll);
            }
        });

    if let Some((key, value)) = moved {
        emit(painter.set_slider(key, value), &mut writer);
    }
    if orientation != params.orientation {
        emit(painter.set_orientation(orientation), &mut writer);
    }
    if let Some(button) = pressed {
        emit(painter.press(button), &mut writer);
    }
}

// ── Pointer ────────────────────────────────────────────────────────

/// Forwards clicks on the grid to the painter; a click outside an open
/// terrain menu dismisses it.
pub fn handle_clicks(
    mut egui_ctx: Query<&mut EguiContext>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cfg: Res<UiConfig>,
    mut painter: ResMut<HexPainter>,
    mut anchor: ResMut<MenuAnchor>,
    mut writer: MessageWriter<PainterEvent>,
) {
    let button = if mouse.just_pressed(MouseButton::Left) {
        PointerButton::Primary
    } else if mouse.just_pressed(MouseButton::Right) {
        PointerButton::Secondary
    } else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    if ctx.get_mut().is_pointer_over_area() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    if painter.mode().menu_cell().is_some() {
        painter.dismiss();
        return;
    }
    for event in painter.click(cursor.as_ivec2(), button) {
        writer.write(event);
    }
    if painter.mode().menu_cell().is_some() {
        anchor.0 = cfg.menu_anchor(cursor, window.size(), painter.palette().len());
    }
}

// ── Modals ─────────────────────────────────────────────────────────

/// Per-cell terrain menu, shown while the painter is in menu mode.
pub fn terrain_menu(
    mut egui_ctx: Query<&mut EguiContext>,
    cfg: Res<UiConfig>,
    anchor: Res<MenuAnchor>,
    mut painter: ResMut<HexPainter>,
    mut writer: MessageWriter<PainterEvent>,
) {
    let Some((col, row)) = painter.mode().menu_cell() else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let current = painter.grid().cell(col, row).map(|cell| cell.terrain());
    let mut chosen = None;

    egui::Area::new(egui::Id::new("hex_painter_terrain_menu"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(anchor.0.x, anchor.0.y))
        .show(ctx.get_mut(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(cfg.menu_width);
                for (index, terrain) in painter.palette().iter().enumerate() {
                    let entry = ui.horizontal(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter().rect_filled(swatch, 2.0, color32(terrain.color));
                        ui.selectable_label(current == Some(index), terrain.name.as_str())
                    });
                    if entry.inner.clicked() {
                        chosen = Some(index);
                    }
                }
            });
        });

    if let Some(terrain) = chosen {
        emit(painter.choose_terrain(terrain), &mut writer);
    }
}

/// Palette color picker. The edit is held in [`ColorDraft`] until confirmed.
pub fn color_picker(
    mut egui_ctx: Query<&mut EguiContext>,
    mut painter: ResMut<HexPainter>,
    mut draft: ResMut<ColorDraft>,
    mut writer: MessageWriter<PainterEvent>,
) {
    let Some(terrain) = painter.mode().picker_terrain() else {
        draft.0 = None;
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let Some(entry) = painter.palette().get(terrain) else {
        painter.dismiss();
        return;
    };
    let title = format!("{} Color", entry.name);
    let mut color = draft.0.unwrap_or(entry.color);
    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;

    egui::Window::new(title)
        .id(egui::Id::new("hex_painter_color_picker"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx.get_mut(), |ui| {
            ui.color_edit_button_srgb(&mut color);
            ui.horizontal(|ui| {
                confirmed = ui.button("OK").clicked();
                cancelled = ui.button("Cancel").clicked();
            });
        });
    draft.0 = Some(color);

    if confirmed {
        draft.0 = None;
        emit(painter.pick_color(color), &mut writer);
    } else if cancelled || !open {
        draft.0 = None;
        painter.dismiss();
    }
}

// ── Drawing ────────────────────────────────────────────────────────

/// Paints every cell behind the egui panels.
pub fn draw_grid(mut egui_ctx: Query<&mut EguiContext>, painter: Res<HexPainter>) {
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let canvas = ctx.get_mut().layer_painter(egui::LayerId::background());
    let outline = egui::Stroke::new(1.0, egui::Color32::BLACK);
    let highlight = egui::Stroke::new(2.0, egui::Color32::WHITE);

    for shape in painter.shapes() {
        canvas.add(egui::Shape::convex_polygon(
            points(&shape.fill),
            color32(shape.fill_color),
            egui::Stroke::NONE,
        ));
        canvas.add(egui::Shape::closed_line(points(&shape.outline), outline));
        if let Some(ring) = &shape.highlight {
            canvas.add(egui::Shape::closed_line(points(ring), highlight));
        }
    }
}

// ── Events ─────────────────────────────────────────────────────────

/// Logs painter events and refits the window when the grid changes size.
pub fn apply_painter_events(
    mut events: MessageReader<PainterEvent>,
    cfg: Res<UiConfig>,
    painter: Res<HexPainter>,
    mut windows: Query<&mut Window>,
) {
    for event in events.read() {
        match event {
            PainterEvent::ParametersChanged(params) => {
                info!(
                    "grid {}x{} radius {} border {} {}",
                    params.cols, params.rows, params.size, params.border, params.orientation
                );
                let size = cfg.window_size(painter.grid());
                for mut window in &mut windows {
                    window.resolution.set(size.x, size.y);
                }
            }
            PainterEvent::CellClicked { col, row, button } => {
                debug!("{button:?} click on ({col}, {row})");
            }
            other => info!("{other:?}"),
        }
    }
}
