//! Error type shared by the grid model and the controller.

use thiserror::Error;

/// Errors raised at the boundary of the grid model and its controller.
///
/// None of these are transient: they signal a rejected parameter or a
/// caller passing an index that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A construction parameter is below its minimum.
    #[error("grid parameter `{name}` must be at least {min}, got {value}")]
    InvalidParameter {
        /// Parameter name as shown on the settings panel.
        name: &'static str,
        /// Smallest accepted value.
        min: u32,
        /// Rejected value.
        value: u32,
    },
    /// A palette without terrains cannot seed cells.
    #[error("terrain palette must hold at least one terrain")]
    EmptyPalette,
    /// Removing the only terrain would leave every cell dangling.
    #[error("cannot remove the last terrain from the palette")]
    LastTerrain,
    /// A terrain index that is not in the palette.
    #[error("terrain index {index} is out of range for a palette of {len}")]
    TerrainOutOfRange {
        /// Requested index.
        index: usize,
        /// Current palette length.
        len: usize,
    },
    /// Offset coordinates outside the grid.
    #[error("no cell at ({col}, {row})")]
    CellOutOfRange {
        /// Requested column.
        col: u32,
        /// Requested row.
        row: u32,
    },
    /// Orientation name that is neither flat nor pointy.
    #[error("unknown orientation `{0}` (expected `flat` or `pointy`)")]
    UnknownOrientation(String),
    /// Slider name with no handler.
    #[error("unknown slider `{0}`")]
    UnknownSlider(String),
}

/// Shorthand for results carrying a [`GridError`].
pub type Result<T> = std::result::Result<T, GridError>;
