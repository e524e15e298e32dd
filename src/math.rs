//! Hex geometry helpers extracted for testability.
//!
//! All functions in this module are free of ECS state and operate on plain
//! numbers and `glam` vectors. Positions are window pixels with `y` growing
//! downward, the same space the cursor position lives in.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use bevy::math::{DVec2, IVec2, Vec2};
use bevy::prelude::Reflect;

use crate::error::GridError;

/// Gap in pixels between the window's top-left corner and the grid.
pub const GRID_MARGIN: f64 = 10.0;

/// Which way a hex faces: flat edge up, or a vertex up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum Orientation {
    /// Flat top edge; columns are staggered by half a cell.
    #[default]
    Flat,
    /// Vertex on top; rows are staggered by half a cell.
    Pointy,
}

impl Orientation {
    /// Every orientation, in dropdown order.
    pub const ALL: [Orientation; 2] = [Orientation::Flat, Orientation::Pointy];

    /// Label shown in the orientation dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Flat => "Flat",
            Orientation::Pointy => "Pointy",
        }
    }

    /// Angle of corner `index` in radians, measured clockwise on screen.
    ///
    /// Must stay `PI / 3.0 * index`; `FRAC_PI_3` is one ulp off and moves
    /// corners that land exactly on a pixel boundary.
    fn corner_angle(self, index: usize) -> f64 {
        let base = PI / 3.0 * index as f64;
        match self {
            Orientation::Flat => base,
            Orientation::Pointy => base + PI / 6.0,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Orientation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GridError::UnknownOrientation(s.to_owned()))
    }
}

/// Pixel center of the hex at offset coordinates `(col, row)`.
///
/// Flat layouts push odd columns down by half a hex height; pointy layouts
/// push odd rows right by half a hex width. Both are shifted by `size` plus
/// [`GRID_MARGIN`] so cell `(0, 0)` sits fully inside the window.
///
/// The center stays in `f64`; corners are truncated from it directly.
///
/// # Examples
/// ```
/// # use hex_painter::math::{hex_center, Orientation};
/// # use bevy::math::DVec2;
/// assert_eq!(hex_center(0, 0, 40, Orientation::Flat), DVec2::new(50.0, 50.0));
/// assert_eq!(hex_center(2, 0, 40, Orientation::Flat), DVec2::new(170.0, 50.0));
/// assert_eq!(hex_center(0, 1, 40, Orientation::Pointy).y, 110.0);
/// ```
pub fn hex_center(col: u32, row: u32, size: u32, orientation: Orientation) -> DVec2 {
    let size_f = f64::from(size);
    let sqrt3 = 3f64.sqrt();
    let (x, y) = match orientation {
        Orientation::Flat => (
            size_f * 1.5 * f64::from(col),
            size_f * sqrt3 * (f64::from(row) + 0.5 * f64::from(col % 2)),
        ),
        Orientation::Pointy => (
            size_f * sqrt3 * (f64::from(col) + 0.5 * f64::from(row % 2)),
            size_f * 1.5 * f64::from(row),
        ),
    };
    DVec2::new(x + size_f + GRID_MARGIN, y + size_f + GRID_MARGIN)
}

/// The six corners of a hex of circumradius `radius` around `center`.
///
/// Corner `i` sits at `i * 60°` (flat) or `i * 60° + 30°` (pointy).
/// Coordinates are truncated toward zero to whole pixels. Nothing is
/// cached: the same hex is usually queried at its outer radius and at its
/// bordered inner radius.
pub fn hex_vertices(center: DVec2, radius: u32, orientation: Orientation) -> [IVec2; 6] {
    let r = f64::from(radius);
    std::array::from_fn(|i| {
        let angle = orientation.corner_angle(i);
        IVec2::new(
            (center.x + r * angle.cos()) as i32,
            (center.y + r * angle.sin()) as i32,
        )
    })
}

/// Crossing-number test of `point` against the implicitly closed polygon.
///
/// An edge flips the parity when the point's `y` is in `(min_y, max_y]`,
/// its `x` is at most the edge's `max_x`, and the edge is either vertical
/// or passes at or to the right of the point. Horizontal edges have no
/// intercept and never flip.
///
/// # Examples
/// ```
/// # use hex_painter::math::point_in_polygon;
/// # use bevy::math::IVec2;
/// let square = [IVec2::new(0, 0), IVec2::new(10, 0), IVec2::new(10, 10), IVec2::new(0, 10)];
/// assert!(point_in_polygon(IVec2::new(5, 5), &square));
/// assert!(!point_in_polygon(IVec2::new(5, 0), &square));
/// assert!(!point_in_polygon(IVec2::new(11, 5), &square));
/// ```
pub fn point_in_polygon(point: IVec2, vertices: &[IVec2]) -> bool {
    let (x, y) = (point.x, point.y);
    let mut inside = false;

    let next = vertices.iter().cycle().skip(1);
    for (p1, p2) in vertices.iter().zip(next) {
        if y <= p1.y.min(p2.y) || y > p1.y.max(p2.y) || x > p1.x.max(p2.x) {
            continue;
        }
        let x_intercept = (p1.y != p2.y).then(|| {
            f64::from(y - p1.y) * f64::from(p2.x - p1.x) / f64::from(p2.y - p1.y)
                + f64::from(p1.x)
        });
        if p1.x == p2.x || x_intercept.is_some_and(|xi| f64::from(x) <= xi) {
            inside = !inside;
        }
    }

    inside
}

/// Whether `point` falls inside the hex of circumradius `size` at `center`.
///
/// A bounding-box check rejects far points before the polygon test. The
/// box's low edges are floored so it still covers corners that truncation
/// pulled below `center - size`; the answer always equals the polygon test.
pub fn hex_contains(point: IVec2, center: DVec2, size: u32, orientation: Orientation) -> bool {
    let half = DVec2::splat(f64::from(size));
    let min = (center - half).floor();
    let max = center + half;
    let p = point.as_dvec2();
    if p.x < min.x || p.x > max.x || p.y < min.y || p.y > max.y {
        return false;
    }
    point_in_polygon(point, &hex_vertices(center, size, orientation))
}

/// Radius of the filled interior once `border` pixels are inset.
pub fn inner_radius(size: u32, border: u32) -> u32 {
    size.saturating_sub(border)
}

/// Pixel width and height covered by a `cols` x `rows` grid, margins excluded.
pub fn grid_extent(cols: u32, rows: u32, size: u32, orientation: Orientation) -> Vec2 {
    let size_f = f64::from(size);
    let sqrt3 = 3f64.sqrt();
    let (w, h) = match orientation {
        Orientation::Flat => (
            size_f * 1.5 * f64::from(cols) + size_f / 2.0,
            size_f * sqrt3 * (f64::from(rows) + 0.5),
        ),
        Orientation::Pointy => (
            size_f * sqrt3 * (f64::from(cols) + 0.5),
            size_f * 1.5 * f64::from(rows) + size_f / 2.0,
        ),
    };
    Vec2::new(w as f32, h as f32)
}
