//! Projection of axial coordinates onto the board plane.
//!
//! Cells are flat-topped hexagons with the circumradius `size`. The origin of the plane
//! is the center of the `(0, 0)` cell, `x` grows to the right and `y` grows downwards.

use super::hex::HexCoord;
use super::CLICK_RADIUS_FACTOR;

const SQRT_3: f32 = 1.732_050_8;

/// Position on the board plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Returns the center of the cell at `coord`.
pub fn hex_to_pixel(coord: HexCoord, size: f32) -> Point {
    let q = coord.q() as f32;
    let r = coord.r() as f32;
    Point::new(size * 1.5 * q, size * SQRT_3 * (r + q / 2.0))
}

/// Finds the cell whose center is the nearest to `point`.
/// Returns [`None`] if even the nearest one is not closer than `size * CLICK_RADIUS_FACTOR`.
pub fn nearest_cell<I>(cells: I, point: Point, size: f32) -> Option<HexCoord>
where
    I: IntoIterator<Item = HexCoord>,
{
    cells
        .into_iter()
        .map(|coord| (coord, hex_to_pixel(coord, size).distance(point)))
        .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2))
        .filter(|&(_, distance)| distance < size * CLICK_RADIUS_FACTOR)
        .map(|(coord, _)| coord)
}
