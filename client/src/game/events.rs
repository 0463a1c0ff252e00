use bevy::prelude::*;
use hex_core::core::{HexCoord, Mark, Point, WinningLine};

/// Event emitted when the left mouse button is pressed over the window.
/// Contains the cursor position on the board plane.
#[derive(Debug, Event)]
pub struct BoardClicked {
    point: Point,
}

impl BoardClicked {
    pub fn new(point: Point) -> Self {
        Self { point }
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

#[derive(Debug, Event)]
pub struct MoveApplied {
    coord: HexCoord,
    mark: Mark,
}

impl MoveApplied {
    pub fn new(coord: HexCoord, mark: Mark) -> Self {
        Self { coord, mark }
    }

    pub fn coord(&self) -> HexCoord {
        self.coord
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

#[derive(Debug, Deref, Event)]
pub struct PlayerWon(pub WinningLine);

#[derive(Debug, Event)]
pub struct Draw;

#[derive(Debug, Event)]
pub struct GameRestarted;
