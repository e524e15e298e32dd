//! The interaction controller.
//!
//! [`HexPainter`] owns the grid, the palette, the interaction mode and the
//! random source. Every UI event the host forwards becomes exactly one
//! method call here, and every method reports what changed as
//! [`PainterEvent`]s so the host can react (resize, log, redraw).

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{GridError, Result};
use crate::grid::{GridOverrides, GridParams, HexGrid, HexShape};
use crate::interaction::{ButtonId, InteractionMode, PointerButton, SliderKey};
use crate::math::Orientation;
use crate::palette::{Palette, Terrain};

/// Notifications from the controller to the host.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum PainterEvent {
    /// A click landed on a cell.
    CellClicked {
        /// Column of the clicked cell.
        col: u32,
        /// Row of the clicked cell.
        row: u32,
        /// Button that was pressed.
        button: PointerButton,
    },
    /// A cell's terrain index changed.
    TerrainChanged {
        /// Column of the cell.
        col: u32,
        /// Row of the cell.
        row: u32,
        /// New palette index.
        terrain: usize,
    },
    /// A palette entry was recolored.
    PaletteColorChanged {
        /// Palette index.
        terrain: usize,
        /// New sRGB color.
        color: [u8; 3],
    },
    /// The grid was rebuilt with new parameters.
    ParametersChanged(GridParams),
    /// Every cell got a fresh terrain.
    GridRandomized,
    /// Terrains were added to or removed from the palette.
    PaletteChanged {
        /// New palette length.
        len: usize,
    },
}

/// Grid, palette and modal state behind the painting UI.
#[derive(Resource)]
pub struct HexPainter {
    grid: HexGrid,
    palette: Palette,
    mode: InteractionMode,
    rng: StdRng,
}

impl HexPainter {
    /// Builds a painter with a fresh random grid.
    pub fn new(params: GridParams, palette: Palette, mut rng: StdRng) -> Result<Self> {
        let grid = HexGrid::new(params, palette.len(), &mut rng)?;
        Ok(Self {
            grid,
            palette,
            mode: InteractionMode::Idle,
            rng,
        })
    }

    /// Reproducible painter: the same seed yields the same terrain draws.
    pub fn seeded(params: GridParams, palette: Palette, seed: u64) -> Result<Self> {
        Self::new(params, palette, StdRng::seed_from_u64(seed))
    }

    /// Painter seeded from the operating system.
    pub fn from_os_rng(params: GridParams, palette: Palette) -> Result<Self> {
        Self::new(params, palette, StdRng::from_os_rng())
    }

    // ── State ──────────────────────────────────────────────────────

    /// Current grid.
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// Current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Draw list for the current grid and palette.
    pub fn shapes(&self) -> Vec<HexShape> {
        self.grid.shapes(&self.palette)
    }

    // ── Pointer ────────────────────────────────────────────────────

    /// Handles a click at `point` (window pixels).
    ///
    /// Ignored while a modal is open. A primary click re-rolls and selects
    /// the hit cell; a secondary click opens the terrain menu for it.
    pub fn click(&mut self, point: IVec2, button: PointerButton) -> Vec<PainterEvent> {
        if !self.mode.is_idle() {
            debug!("click at {point} ignored while {:?} is open", self.mode);
            return Vec::new();
        }
        let Some((col, row)) = self.grid.find_cell_at(point).map(|c| c.coords()) else {
            return Vec::new();
        };

        let mut events = vec![PainterEvent::CellClicked { col, row, button }];
        match button {
            PointerButton::Primary => {
                let palette_len = self.palette.len();
                if let Some(cell) = self.grid.cell_mut(col, row) {
                    cell.randomize(palette_len, &mut self.rng);
                    events.push(PainterEvent::TerrainChanged {
                        col,
                        row,
                        terrain: cell.terrain(),
                    });
                }
                if let Err(err) = self.grid.select(col, row) {
                    warn!("{err}");
                }
            }
            PointerButton::Secondary => {
                self.mode.enter(InteractionMode::MenuOpen { col, row });
            }
        }
        events
    }

    // ── Terrain menu ───────────────────────────────────────────────

    /// Applies the terrain picked from the open menu and closes it.
    ///
    /// Does nothing unless the menu is open. An index outside the palette
    /// is rejected and leaves the menu open.
    pub fn choose_terrain(&mut self, terrain: usize) -> Result<Vec<PainterEvent>> {
        let Some((col, row)) = self.mode.menu_cell() else {
            return Ok(Vec::new());
        };
        self.palette.check_index(terrain)?;
        self.mode.close();

        let cell = self
            .grid
            .cell_mut(col, row)
            .ok_or(GridError::CellOutOfRange { col, row })?;
        cell.set_terrain(terrain);
        self.grid.select(col, row)?;
        Ok(vec![PainterEvent::TerrainChanged { col, row, terrain }])
    }

    /// Closes whichever modal is open. Returns `false` if none was.
    pub fn dismiss(&mut self) -> bool {
        !self.mode.close().is_idle()
    }

    // ── Palette ────────────────────────────────────────────────────

    /// Opens the color picker for palette entry `terrain`.
    ///
    /// Returns `Ok(false)` when another modal is already open.
    pub fn open_color_picker(&mut self, terrain: usize) -> Result<bool> {
        self.palette.check_index(terrain)?;
        Ok(self.mode.enter(InteractionMode::ColorPickerOpen { terrain }))
    }

    /// Confirms `color` for the entry the picker is open for, and closes it.
    pub fn pick_color(&mut self, color: [u8; 3]) -> Result<Vec<PainterEvent>> {
        let Some(terrain) = self.mode.picker_terrain() else {
            return Ok(Vec::new());
        };
        self.palette.set_color(terrain, color)?;
        self.mode.close();
        Ok(vec![PainterEvent::PaletteColorChanged { terrain, color }])
    }

    /// Appends a terrain to the palette. Existing cells are unaffected.
    pub fn add_terrain(&mut self, terrain: Terrain) -> Vec<PainterEvent> {
        self.palette.push(terrain);
        vec![PainterEvent::PaletteChanged {
            len: self.palette.len(),
        }]
    }

    /// Removes palette entry `index` and remaps every cell so none dangles.
    ///
    /// Refused while the color picker is open, since it holds an index.
    pub fn remove_terrain(&mut self, index: usize) -> Result<Vec<PainterEvent>> {
        if self.mode.picker_terrain().is_some() {
            debug!("terrain {index} kept: color picker is open");
            return Ok(Vec::new());
        }
        let removed = self.palette.remove(index)?;
        let rerolled = self
            .grid
            .remap_terrain(index, self.palette.len(), &mut self.rng);
        if rerolled > 0 {
            warn!("{rerolled} cells lost terrain `{}` and were re-rolled", removed.name);
        }
        Ok(vec![PainterEvent::PaletteChanged {
            len: self.palette.len(),
        }])
    }

    // ── Grid parameters ────────────────────────────────────────────

    /// Rebuilds the grid with `overrides`, preserving terrain.
    ///
    /// On error the current grid stays in place. No event is reported when
    /// the parameters did not actually change.
    pub fn apply(&mut self, overrides: GridOverrides) -> Result<Vec<PainterEvent>> {
        let params = self.grid.params().with(overrides);
        if params == self.grid.params() {
            return Ok(Vec::new());
        }
        self.grid = self
            .grid
            .rebuild(overrides, self.palette.len(), &mut self.rng)?;

        if let Some((col, row)) = self.mode.menu_cell()
            && self.grid.cell(col, row).is_none()
        {
            self.mode.close();
        }
        Ok(vec![PainterEvent::ParametersChanged(params)])
    }

    /// Slider moved to `value`.
    pub fn set_slider(&mut self, key: SliderKey, value: u32) -> Result<Vec<PainterEvent>> {
        self.apply(key.overrides(value))
    }

    /// Orientation dropdown changed.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<Vec<PainterEvent>> {
        self.apply(GridOverrides::default().orientation(orientation))
    }

    /// Re-rolls every cell.
    pub fn randomize_all(&mut self) -> Vec<PainterEvent> {
        self.grid.randomize_all(self.palette.len(), &mut self.rng);
        vec![PainterEvent::GridRandomized]
    }

    // ── Buttons ────────────────────────────────────────────────────

    /// Dispatches a terrain-panel button.
    pub fn press(&mut self, button: ButtonId) -> Result<Vec<PainterEvent>> {
        match button {
            ButtonId::RandomizeAll => Ok(self.randomize_all()),
            ButtonId::AddTerrain => {
                let name = format!("Terrain {}", self.palette.len() + 1);
                Ok(self.add_terrain(Terrain::new(name, [128, 128, 128])))
            }
            ButtonId::TerrainColor(terrain) => {
                self.open_color_picker(terrain)?;
                Ok(Vec::new())
            }
            ButtonId::RemoveTerrain(terrain) => self.remove_terrain(terrain),
        }
    }
}
