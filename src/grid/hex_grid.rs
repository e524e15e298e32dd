use bevy::prelude::*;
use rand::Rng;

use super::entities::{Cell, HexGrid, HexShape};
use super::{GridOverrides, GridParams, build_grid};
use crate::error::{GridError, Result};
use crate::math::{self, Orientation};
use crate::palette::Palette;

/// Extra radius of the selection ring around the selected cell.
const HIGHLIGHT_GROWTH: u32 = 2;

/// Fill used if a cell somehow points past the palette.
const MISSING_TERRAIN_COLOR: [u8; 3] = [255, 0, 255];

impl HexGrid {
    /// Builds a grid with random terrain everywhere.
    pub fn new<R: Rng + ?Sized>(params: GridParams, palette_len: usize, rng: &mut R) -> Result<Self> {
        build_grid(params, palette_len, None, rng)
    }

    // ── Parameters ─────────────────────────────────────────────────

    /// Parameters this grid was built with.
    pub fn params(&self) -> GridParams {
        self.params
    }

    /// Column count.
    pub fn cols(&self) -> u32 {
        self.params.cols
    }

    /// Row count.
    pub fn rows(&self) -> u32 {
        self.params.rows
    }

    /// Layout orientation.
    pub fn orientation(&self) -> Orientation {
        self.params.orientation
    }

    /// Pixel extent of the laid-out grid, margins excluded.
    pub fn extent(&self) -> Vec2 {
        let p = &self.params;
        math::grid_extent(p.cols, p.rows, p.size, p.orientation)
    }

    // ── Cell access ────────────────────────────────────────────────

    /// All cells, column-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a validated grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index_of(&self, col: u32, row: u32) -> Option<usize> {
        (col < self.params.cols && row < self.params.rows)
            .then(|| col as usize * self.params.rows as usize + row as usize)
    }

    /// Cell at `(col, row)`, if inside the grid.
    pub fn cell(&self, col: u32, row: u32) -> Option<&Cell> {
        self.index_of(col, row).map(|i| &self.cells[i])
    }

    /// Mutable cell at `(col, row)`, if inside the grid.
    pub fn cell_mut(&mut self, col: u32, row: u32) -> Option<&mut Cell> {
        self.index_of(col, row).map(|i| &mut self.cells[i])
    }

    /// First cell, in iteration order, whose hex contains `point`.
    pub fn find_cell_at(&self, point: IVec2) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.contains(point))
    }

    // ── Selection ──────────────────────────────────────────────────

    /// Coordinates of the highlighted cell.
    pub fn selected(&self) -> Option<(u32, u32)> {
        self.selected
    }

    /// Highlights the cell at `(col, row)`.
    pub fn select(&mut self, col: u32, row: u32) -> Result<()> {
        if self.index_of(col, row).is_none() {
            return Err(GridError::CellOutOfRange { col, row });
        }
        self.selected = Some((col, row));
        Ok(())
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// New grid with `overrides` applied and this grid's terrain preserved.
    ///
    /// `self` is left untouched; on error the caller keeps using it.
    pub fn rebuild<R: Rng + ?Sized>(
        &self,
        overrides: GridOverrides,
        palette_len: usize,
        rng: &mut R,
    ) -> Result<HexGrid> {
        build_grid(self.params.with(overrides), palette_len, Some(self), rng)
    }

    /// Draws a fresh terrain for every cell.
    pub fn randomize_all<R: Rng + ?Sized>(&mut self, palette_len: usize, rng: &mut R) {
        for cell in &mut self.cells {
            cell.randomize(palette_len, rng);
        }
        debug!("randomized {} cells over {palette_len} terrains", self.cells.len());
    }

    /// Follows a palette removal: cells on `removed` get a fresh draw from
    /// the shrunk palette, cells above it shift down by one.
    ///
    /// Returns how many cells were re-rolled.
    pub fn remap_terrain<R: Rng + ?Sized>(
        &mut self,
        removed: usize,
        palette_len: usize,
        rng: &mut R,
    ) -> usize {
        let mut rerolled = 0;
        for cell in &mut self.cells {
            let t = cell.terrain();
            if t == removed {
                cell.randomize(palette_len, rng);
                rerolled += 1;
            } else if t > removed {
                cell.set_terrain(t - 1);
            }
        }
        rerolled
    }

    // ── Drawing ────────────────────────────────────────────────────

    /// Draw list for the host, one entry per cell in iteration order.
    pub fn shapes(&self, palette: &Palette) -> Vec<HexShape> {
        self.cells
            .iter()
            .map(|cell| {
                let outline = cell.vertices();
                let fill = if cell.border() > 0 {
                    cell.inner_vertices()
                } else {
                    outline
                };
                let highlight = (self.selected == Some(cell.coords())).then(|| {
                    math::hex_vertices(
                        cell.center(),
                        cell.size() + HIGHLIGHT_GROWTH,
                        cell.orientation(),
                    )
                });
                HexShape {
                    coords: cell.coords(),
                    fill,
                    fill_color: palette
                        .get(cell.terrain())
                        .map_or(MISSING_TERRAIN_COLOR, |t| t.color),
                    outline,
                    highlight,
                }
            })
            .collect()
    }
}
