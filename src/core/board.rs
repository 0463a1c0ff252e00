use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use super::hex::{HexCoord, DIRECTIONS};
use super::layout::{self, Point};
use super::{Mark, BOARD_RADIUS};

/// A single board cell: its coordinate and the mark it carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    coord: HexCoord,
    mark: Mark,
}

impl Cell {
    fn new(coord: HexCoord) -> Self {
        Self {
            coord,
            mark: Mark::Empty,
        }
    }

    pub fn coord(&self) -> HexCoord {
        self.coord
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_empty(&self) -> bool {
        self.mark.is_empty()
    }
}

/// Three contiguous collinear cells carrying the same mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WinningLine {
    mark: Mark,
    cells: [HexCoord; 3],
}

impl WinningLine {
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Cells of the line, starting from the one the scan found first.
    pub fn cells(&self) -> [HexCoord; 3] {
        self.cells
    }
}

/// Hexagon-shaped board made of hexagonal cells.
/// Contains every cell with `|q| <= R`, `|r| <= R` and `|q + r| <= R`.
/// The set of cells never changes after construction, only their marks do.
#[derive(Clone, Debug)]
pub struct HexBoard {
    radius: u32,
    cells: Vec<Cell>,
    index: HashMap<HexCoord, usize>,
}

impl Default for HexBoard {
    fn default() -> Self {
        Self::new(BOARD_RADIUS)
    }
}

impl HexBoard {
    /// Builds an empty board of the given `radius`.
    /// Cells are ordered by `q` and then by `r`, both ascending.
    pub fn new(radius: u32) -> Self {
        let r_max = radius as i32;
        let cells: Vec<Cell> = (-r_max..=r_max)
            .flat_map(|q| (-r_max..=r_max).map(move |r| HexCoord::new(q, r)))
            .filter(|coord| coord.is_within(radius))
            .map(Cell::new)
            .collect();
        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.coord, i))
            .collect();
        Self {
            radius,
            cells,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns an iterator over all cells in construction order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn contains(&self, coord: HexCoord) -> bool {
        self.index.contains_key(&coord)
    }

    pub fn get(&self, coord: HexCoord) -> Option<&Cell> {
        self.index.get(&coord).map(|&i| &self.cells[i])
    }

    /// Returns the mark at `coord`, [`None`] if there is no such cell.
    pub fn mark(&self, coord: HexCoord) -> Option<Mark> {
        self.get(coord).map(Cell::mark)
    }

    /// Places `mark` on the empty cell at `coord`.
    /// Returns `false` and leaves the board untouched if the cell doesn't exist,
    /// is already occupied or `mark` is [`Mark::Empty`].
    pub fn apply_move(&mut self, coord: HexCoord, mark: Mark) -> bool {
        if mark.is_empty() {
            tracing::debug!("rejected empty mark at {}", coord);
            return false;
        }
        let Some(&i) = self.index.get(&coord) else {
            tracing::debug!("rejected move at {}: no such cell", coord);
            return false;
        };
        let cell = &mut self.cells[i];
        if !cell.is_empty() {
            tracing::debug!("rejected move at {}: occupied by {}", coord, cell.mark);
            return false;
        }
        cell.mark = mark;
        true
    }

    /// Returns the mark of the first three-in-a-row found, [`Mark::Empty`] if there is none.
    pub fn check_winner(&self) -> Mark {
        self.winning_line()
            .map(|line| line.mark)
            .unwrap_or_default()
    }

    /// Scans every occupied cell in all six directions and returns the first
    /// line of three equal marks.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_empty())
            .find_map(|cell| {
                DIRECTIONS.into_iter().find_map(|dir| {
                    let second = cell.coord + dir;
                    let third = cell.coord + dir * 2;
                    if self.mark(second) == Some(cell.mark) && self.mark(third) == Some(cell.mark)
                    {
                        Some(WinningLine {
                            mark: cell.mark,
                            cells: [cell.coord, second, third],
                        })
                    } else {
                        None
                    }
                })
            })
    }

    /// Returns `true` if there is no empty cell left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns the cell nearest to `point` on the board plane if the point is close enough
    /// to its center.
    pub fn cell_at_point(&self, point: Point, size: f32) -> Option<HexCoord> {
        layout::nearest_cell(self.cells.iter().map(Cell::coord), point, size)
    }
}

/// One line per `r`, indented so that the rows line up as a hexagon.
impl Display for HexBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let r_max = self.radius as i32;
        for r in -r_max..=r_max {
            let indent = r.unsigned_abs() as usize;
            write!(f, "{:indent$}", "", indent = indent)?;
            let q_from = (-r_max).max(-r - r_max);
            let q_to = r_max.min(-r + r_max);
            for q in q_from..=q_to {
                let mark = self.mark(HexCoord::new(q, r)).unwrap_or_default();
                write!(f, "[{}]", mark)?;
            }
            if r < r_max {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
