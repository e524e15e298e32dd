#![warn(missing_docs)]
//! Hex grid painter for game prototyping.
//!
//! The library holds everything that does not need a window: hex geometry
//! ([`math`]), the terrain [`palette`], the terrain-preserving [`grid`]
//! model, the modal [`interaction`] state, and the [`painter`] controller
//! that turns UI events into grid mutations. The binary wraps it in a Bevy
//! app with egui panels.

pub mod error;
pub mod grid;
pub mod interaction;
pub mod math;
pub mod painter;
pub mod palette;

pub use error::{GridError, Result};
pub use grid::{Cell, GridOverrides, GridParams, HexGrid, HexShape, build_grid};
pub use interaction::{ButtonId, InteractionMode, PointerButton, SliderKey};
pub use math::Orientation;
pub use painter::{HexPainter, PainterEvent};
pub use palette::{Palette, Terrain};
