use super::Mark;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({q}, {r}) is not on the board")]
    CellNotOnBoard { q: i32, r: i32 },
    #[error("cell ({q}, {r}) is occupied")]
    CellIsOccupied { q: i32, r: i32 },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("other player's turn (expected: {expected}, found: {found})")]
    NotYourTurn { expected: Mark, found: Mark },
    #[error("empty mark can't be placed on the board")]
    InvalidMark,
    #[error("no cell near the point ({x:.1}, {y:.1})")]
    NoCellAtPoint { x: f32, y: f32 },
}

impl GameError {
    pub fn cell_not_on_board(q: i32, r: i32) -> Self {
        Self::CellNotOnBoard { q, r }
    }

    pub fn cell_is_occupied(q: i32, r: i32) -> Self {
        Self::CellIsOccupied { q, r }
    }

    pub fn not_your_turn(expected: Mark, found: Mark) -> Self {
        Self::NotYourTurn { expected, found }
    }

    pub fn no_cell_at_point(x: f32, y: f32) -> Self {
        Self::NoCellAtPoint { x, y }
    }
}
