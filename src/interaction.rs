//! Interaction modes and the stable keys UI events are dispatched by.
//!
//! The host never compares widget handles: sliders report a [`SliderKey`],
//! buttons a [`ButtonId`], and the pointer a [`PointerButton`]. Modal UI
//! (the per-cell terrain menu and the palette color picker) is a single
//! [`InteractionMode`] value, so two modals can never be open at once.

use std::ops::RangeInclusive;
use std::str::FromStr;

use bevy::prelude::Reflect;

use crate::error::GridError;
use crate::grid::{GridOverrides, GridParams};

/// Which modal interaction, if any, currently owns the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
pub enum InteractionMode {
    /// Clicks paint cells.
    #[default]
    Idle,
    /// Terrain menu open for the cell at `(col, row)`.
    MenuOpen {
        /// Column of the cell being edited.
        col: u32,
        /// Row of the cell being edited.
        row: u32,
    },
    /// Color picker open for palette entry `terrain`.
    ColorPickerOpen {
        /// Palette index being recolored.
        terrain: usize,
    },
}

impl InteractionMode {
    /// `true` when no modal is open.
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    /// Switches to `next` if currently idle.
    ///
    /// Returns `false`, leaving the mode unchanged, when another modal is
    /// already open or `next` is `Idle`. Requests are dropped, not queued.
    pub fn enter(&mut self, next: InteractionMode) -> bool {
        if !self.is_idle() || next.is_idle() {
            return false;
        }
        *self = next;
        true
    }

    /// Returns to `Idle`, yielding the mode that was open.
    pub fn close(&mut self) -> InteractionMode {
        std::mem::take(self)
    }

    /// Cell the terrain menu is open for.
    pub fn menu_cell(&self) -> Option<(u32, u32)> {
        match *self {
            InteractionMode::MenuOpen { col, row } => Some((col, row)),
            _ => None,
        }
    }

    /// Palette entry the color picker is open for.
    pub fn picker_terrain(&self) -> Option<usize> {
        match *self {
            InteractionMode::ColorPickerOpen { terrain } => Some(terrain),
            _ => None,
        }
    }
}

/// Settings-panel sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// Column count.
    Cols,
    /// Row count.
    Rows,
    /// Hex circumradius.
    Size,
    /// Border inset.
    Border,
}

impl SliderKey {
    /// Every slider, in panel order.
    pub const ALL: [SliderKey; 4] = [
        SliderKey::Cols,
        SliderKey::Rows,
        SliderKey::Size,
        SliderKey::Border,
    ];

    /// Stable machine name.
    pub fn name(self) -> &'static str {
        match self {
            SliderKey::Cols => "cols",
            SliderKey::Rows => "rows",
            SliderKey::Size => "radius",
            SliderKey::Border => "border",
        }
    }

    /// Panel label.
    pub fn label(self) -> &'static str {
        match self {
            SliderKey::Cols => "Columns",
            SliderKey::Rows => "Rows",
            SliderKey::Size => "Hex Radius",
            SliderKey::Border => "Border Thick",
        }
    }

    /// Values the slider offers.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            SliderKey::Cols | SliderKey::Rows => 1..=50,
            SliderKey::Size => 5..=150,
            SliderKey::Border => 0..=50,
        }
    }

    /// Current value of this slider's parameter.
    pub fn value(self, params: &GridParams) -> u32 {
        match self {
            SliderKey::Cols => params.cols,
            SliderKey::Rows => params.rows,
            SliderKey::Size => params.size,
            SliderKey::Border => params.border,
        }
    }

    /// The grid update a slider move to `value` stands for.
    pub fn overrides(self, value: u32) -> GridOverrides {
        let o = GridOverrides::default();
        match self {
            SliderKey::Cols => o.cols(value),
            SliderKey::Rows => o.rows(value),
            SliderKey::Size => o.size(value),
            SliderKey::Border => o.border(value),
        }
    }
}

impl FromStr for SliderKey {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SliderKey::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| GridError::UnknownSlider(s.to_owned()))
    }
}

/// Buttons on the terrain panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonId {
    /// Re-roll every cell.
    RandomizeAll,
    /// Append a new terrain to the palette.
    AddTerrain,
    /// Open the color picker for a palette entry.
    TerrainColor(usize),
    /// Drop a palette entry.
    RemoveTerrain(usize),
}

/// Mouse buttons that act on cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum PointerButton {
    /// Left click: re-roll the cell's terrain.
    Primary,
    /// Right click: open the terrain menu for the cell.
    Secondary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_are_mutually_exclusive() {
        let mut mode = InteractionMode::default();
        assert!(mode.enter(InteractionMode::MenuOpen { col: 1, row: 2 }));
        assert!(!mode.enter(InteractionMode::ColorPickerOpen { terrain: 0 }));
        assert!(!mode.enter(InteractionMode::MenuOpen { col: 0, row: 0 }));
        assert_eq!(mode.menu_cell(), Some((1, 2)));
        assert_eq!(mode.picker_terrain(), None);

        assert_eq!(mode.close(), InteractionMode::MenuOpen { col: 1, row: 2 });
        assert!(mode.is_idle());

        assert!(mode.enter(InteractionMode::ColorPickerOpen { terrain: 4 }));
        assert_eq!(mode.picker_terrain(), Some(4));
    }

    #[test]
    fn entering_idle_is_not_a_transition() {
        let mut mode = InteractionMode::Idle;
        assert!(!mode.enter(InteractionMode::Idle));
        assert_eq!(mode.close(), InteractionMode::Idle);
    }

    #[test]
    fn slider_names_round_trip_through_lookup() {
        for key in SliderKey::ALL {
            assert_eq!(key.name().parse::<SliderKey>(), Ok(key));
        }
        assert_eq!(
            "depth".parse::<SliderKey>(),
            Err(GridError::UnknownSlider("depth".into()))
        );
    }

    #[test]
    fn slider_overrides_touch_one_parameter() {
        let base = GridParams::default();
        for key in SliderKey::ALL {
            let moved = base.with(key.overrides(17));
            assert_eq!(key.value(&moved), 17);
            for other in SliderKey::ALL.into_iter().filter(|k| *k != key) {
                assert_eq!(other.value(&moved), other.value(&base));
            }
        }
    }

    #[test]
    fn default_params_sit_inside_slider_ranges() {
        let params = GridParams::default();
        for key in SliderKey::ALL {
            assert!(key.range().contains(&key.value(&params)), "{}", key.name());
        }
    }
}
