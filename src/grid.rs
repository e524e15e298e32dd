//! Grid model: construction parameters, cells, and terrain-preserving builds.
//!
//! A grid is never resized in place. Every parameter change produces a new
//! [`HexGrid`] through [`build_grid`], copying terrain from the previous grid
//! wherever the same `(col, row)` still exists.

mod entities;
mod hex_grid;

pub use entities::{Cell, HexGrid, HexShape};

use bevy::log::{debug, warn};
use bevy::prelude::Reflect;
use rand::Rng;

use crate::error::{GridError, Result};
use crate::math::Orientation;

/// Parameters shared by every cell of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub struct GridParams {
    /// Number of columns, at least 1.
    pub cols: u32,
    /// Number of rows, at least 1.
    pub rows: u32,
    /// Hex circumradius in pixels, at least 1.
    pub size: u32,
    /// Inset in pixels between the outline and the filled interior.
    pub border: u32,
    /// Flat or pointy layout.
    pub orientation: Orientation,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 8,
            size: 40,
            border: 4,
            orientation: Orientation::Flat,
        }
    }
}

impl GridParams {
    /// Rejects parameters that would produce an empty or degenerate grid.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("cols", self.cols), ("rows", self.rows), ("radius", self.size)] {
            if value < 1 {
                return Err(GridError::InvalidParameter {
                    name,
                    min: 1,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Copy of `self` with every `Some` field of `overrides` applied.
    pub fn with(self, overrides: GridOverrides) -> Self {
        Self {
            cols: overrides.cols.unwrap_or(self.cols),
            rows: overrides.rows.unwrap_or(self.rows),
            size: overrides.size.unwrap_or(self.size),
            border: overrides.border.unwrap_or(self.border),
            orientation: overrides.orientation.unwrap_or(self.orientation),
        }
    }

    /// Number of cells a grid with these parameters holds.
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

/// Partial update of [`GridParams`]; `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridOverrides {
    /// New column count.
    pub cols: Option<u32>,
    /// New row count.
    pub rows: Option<u32>,
    /// New circumradius.
    pub size: Option<u32>,
    /// New border inset.
    pub border: Option<u32>,
    /// New orientation.
    pub orientation: Option<Orientation>,
}

impl GridOverrides {
    /// Sets the column count.
    pub fn cols(mut self, cols: u32) -> Self {
        self.cols = Some(cols);
        self
    }

    /// Sets the row count.
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Sets the circumradius.
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the border inset.
    pub fn border(mut self, border: u32) -> Self {
        self.border = Some(border);
        self
    }

    /// Sets the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Builds a fresh grid, preserving terrain from `previous` where possible.
///
/// Cells are laid out column-major. A cell copies the terrain of the
/// previous cell at the same `(col, row)` when that index is still below
/// `palette_len`; every other cell draws uniformly from `[0, palette_len)`.
/// The previous selection survives if its cell still exists.
pub fn build_grid<R: Rng + ?Sized>(
    params: GridParams,
    palette_len: usize,
    previous: Option<&HexGrid>,
    rng: &mut R,
) -> Result<HexGrid> {
    params.validate()?;
    if palette_len == 0 {
        return Err(GridError::EmptyPalette);
    }

    let mut cells = Vec::with_capacity(params.cell_count());
    let mut kept = 0usize;
    let mut rerolled = 0usize;
    for col in 0..params.cols {
        for row in 0..params.rows {
            let terrain = match previous.and_then(|p| p.cell(col, row)).map(Cell::terrain) {
                Some(t) if t < palette_len => {
                    kept += 1;
                    t
                }
                Some(_) => {
                    rerolled += 1;
                    rng.random_range(0..palette_len)
                }
                None => rng.random_range(0..palette_len),
            };
            cells.push(Cell::new(col, row, terrain, &params));
        }
    }

    if rerolled > 0 {
        warn!("re-rolled {rerolled} cells whose terrain is outside a palette of {palette_len}");
    }
    debug!(
        "built {}x{} {} grid: {kept} cells kept terrain, {} fresh",
        params.cols,
        params.rows,
        params.orientation,
        cells.len() - kept
    );

    let selected = previous
        .and_then(HexGrid::selected)
        .filter(|&(col, row)| col < params.cols && row < params.rows);

    Ok(HexGrid {
        params,
        cells,
        selected,
    })
}
