//! Host UI: egui side panel, terrain menu, color picker and grid drawing.
//!
//! Widgets report stable keys to the [`HexPainter`](hex_painter::HexPainter)
//! resource; whatever it returns is written as [`PainterEvent`] messages and
//! consumed at the end of the same pass (window fitting, logging).

mod entities;
mod systems;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;
use hex_painter::{HexGrid, PainterEvent};

/// Layout constants for the host window and its panels.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct UiConfig {
    /// Width of the right-hand settings panel.
    pub panel_width: f32,
    /// Space reserved around the grid and next to the panel.
    pub window_margin: f32,
    /// Smallest window the tool shrinks to.
    pub min_window: Vec2,
    /// Width of the per-cell terrain menu.
    pub menu_width: f32,
    /// Height of one entry in the terrain menu.
    pub menu_row_height: f32,
    /// Background behind the grid.
    pub clear_color: Color,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            panel_width: 300.0,
            window_margin: 50.0,
            min_window: Vec2::new(800.0, 620.0),
            menu_width: 150.0,
            menu_row_height: 30.0,
            clear_color: Color::srgb_u8(30, 30, 30),
        }
    }
}

impl UiConfig {
    /// Window size that fits `grid` next to the side panel.
    ///
    /// The grid area is truncated to whole pixels before the panel is added.
    pub fn window_size(&self, grid: &HexGrid) -> Vec2 {
        let extent = grid.extent();
        let width = (extent.x + self.window_margin).trunc() + self.panel_width + 20.0;
        let height = extent.y + self.window_margin;
        Vec2::new(width, height).max(self.min_window).trunc()
    }

    /// Top-left corner of a terrain menu with `entries` rows opened at
    /// `cursor`, pulled back so it stays inside a `window`-sized viewport.
    pub fn menu_anchor(&self, cursor: Vec2, window: Vec2, entries: usize) -> Vec2 {
        let menu = Vec2::new(self.menu_width, entries as f32 * self.menu_row_height);
        cursor.min(window - menu - Vec2::splat(10.0)).max(Vec2::ZERO)
    }
}

/// Egui panels, pointer handling and drawing for the painter.
pub struct UiPlugin(pub UiConfig);

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<UiConfig>()
            .register_type::<entities::PainterCamera>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .init_resource::<entities::MenuAnchor>()
            .init_resource::<entities::ColorDraft>()
            .add_message::<PainterEvent>()
            .add_systems(Startup, (systems::spawn_camera, systems::fit_window))
            .add_systems(
                EguiPrimaryContextPass,
                (
                    systems::side_panel,
                    systems::handle_clicks,
                    systems::terrain_menu,
                    systems::color_picker,
                    systems::draw_grid,
                    systems::apply_painter_events,
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use hex_painter::{GridParams, Orientation};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn grid(cols: u32, rows: u32, size: u32) -> HexGrid {
        let params = GridParams {
            cols,
            rows,
            size,
            border: 0,
            orientation: Orientation::Flat,
        };
        HexGrid::new(params, 7, &mut StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn small_grids_get_the_minimum_window() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.window_size(&grid(2, 2, 10)), cfg.min_window);
    }

    #[test]
    fn large_grids_grow_the_window() {
        let cfg = UiConfig::default();
        let size = cfg.window_size(&grid(20, 12, 40));
        // 40 * 1.5 * 20 + 20 = 1220 wide, plus margin and panel.
        assert_eq!(size.x, 1220.0 + 50.0 + 300.0 + 20.0);
        // 40 * sqrt(3) * 12.5 + 50 = 916.03
        assert_eq!(size.y, 916.0);
    }

    #[test]
    fn fractional_grid_sizes_are_truncated() {
        let cfg = UiConfig::default();
        // 25 * 1.5 * 40 + 12.5 + 50 = 1562.5
        let size = cfg.window_size(&grid(40, 20, 25));
        assert_eq!(size.x, 1562.0 + 300.0 + 20.0);
        // 25 * sqrt(3) * 20.5 + 50 = 937.66
        assert_eq!(size.y, 937.0);
    }

    #[test]
    fn menu_anchor_stays_on_screen() {
        let cfg = UiConfig::default();
        let window = Vec2::new(800.0, 620.0);
        assert_eq!(
            cfg.menu_anchor(Vec2::new(100.0, 100.0), window, 7),
            Vec2::new(100.0, 100.0)
        );
        assert_eq!(
            cfg.menu_anchor(Vec2::new(790.0, 600.0), window, 7),
            Vec2::new(640.0, 400.0)
        );
    }
}
