use bevy::math::DVec2;
use bevy::prelude::*;
use rand::Rng;

use super::GridParams;
use crate::math::{self, Orientation};

/// One hex of the grid, addressed by offset coordinates.
///
/// Identity and geometry are fixed at construction; only the terrain index
/// changes afterwards.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Cell {
    col: u32,
    row: u32,
    terrain: usize,
    center: DVec2,
    size: u32,
    border: u32,
    orientation: Orientation,
}

impl Cell {
    pub(super) fn new(col: u32, row: u32, terrain: usize, params: &GridParams) -> Self {
        Self {
            col,
            row,
            terrain,
            center: math::hex_center(col, row, params.size, params.orientation),
            size: params.size,
            border: params.border,
            orientation: params.orientation,
        }
    }

    /// Column in offset coordinates.
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Row in offset coordinates.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// `(col, row)` pair.
    pub fn coords(&self) -> (u32, u32) {
        (self.col, self.row)
    }

    /// Palette index of this cell's terrain.
    pub fn terrain(&self) -> usize {
        self.terrain
    }

    /// Pixel center.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Circumradius in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Border inset in pixels.
    pub fn border(&self) -> u32 {
        self.border
    }

    /// Layout orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Assigns a terrain directly. The caller guarantees `index` is valid.
    pub fn set_terrain(&mut self, index: usize) {
        self.terrain = index;
    }

    /// Draws a fresh terrain uniformly from `[0, palette_len)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, palette_len: usize, rng: &mut R) {
        self.terrain = rng.random_range(0..palette_len);
    }

    /// Outline corners at the full circumradius.
    pub fn vertices(&self) -> [IVec2; 6] {
        math::hex_vertices(self.center, self.size, self.orientation)
    }

    /// Corners of the filled interior, inset by the border.
    pub fn inner_vertices(&self) -> [IVec2; 6] {
        let radius = math::inner_radius(self.size, self.border);
        math::hex_vertices(self.center, radius, self.orientation)
    }

    /// Whether `point` (window pixels) hits this hex.
    pub fn contains(&self, point: IVec2) -> bool {
        math::hex_contains(point, self.center, self.size, self.orientation)
    }
}

/// The full grid: one [`Cell`] per `(col, row)`, column-major.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct HexGrid {
    pub(super) params: GridParams,
    pub(super) cells: Vec<Cell>,
    pub(super) selected: Option<(u32, u32)>,
}

/// Everything the host needs to paint one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HexShape {
    /// Cell coordinates.
    pub coords: (u32, u32),
    /// Filled polygon: the inner hex when the grid has a border.
    pub fill: [IVec2; 6],
    /// Terrain color for `fill`.
    pub fill_color: [u8; 3],
    /// One-pixel outline at the full circumradius.
    pub outline: [IVec2; 6],
    /// Selection ring just outside the outline, for the selected cell only.
    pub highlight: Option<[IVec2; 6]>,
}
