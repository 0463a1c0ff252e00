pub mod hex_tic_tac_toe;
pub mod layout;

mod board;
mod error;
mod hex;

use std::fmt::{Display, Formatter};

pub use board::{Cell, HexBoard, WinningLine};
pub use error::GameError;
pub use hex::{HexCoord, DIRECTIONS};
pub use layout::Point;

/// Radius of the playing field, the board holds `3R² + 3R + 1` cells.
pub const BOARD_RADIUS: u32 = 2;
/// Circumradius of a single hexagon on the board plane.
pub const HEX_SIZE: f32 = 50.0;
/// A click is accepted if it is closer than `HEX_SIZE * CLICK_RADIUS_FACTOR`
/// to the center of a cell.
pub const CLICK_RADIUS_FACTOR: f32 = 0.8;

pub type GameResult<T> = Result<T, GameError>;

/// Occupancy of a board cell.
/// `X` always moves first, `Empty` is never a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Returns the other player's mark, `Empty` stays `Empty`.
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Empty => f.write_str(" "),
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FinishedState {
    Win(Mark),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameState {
    Turn(Mark),
    Finished(FinishedState),
}

pub trait Game: Sized {
    type TurnData;

    fn new() -> Self;
    fn update(&mut self, id: Mark, data: Self::TurnData) -> GameResult<GameState>;

    fn board(&self) -> &HexBoard;

    fn state(&self) -> GameState;
    fn set_state(&mut self, state: GameState);

    fn is_finished(&self) -> bool {
        matches!(self.state(), GameState::Finished(_))
    }

    /// Returns the mark of the player to move, [`None`] if the game is finished.
    fn current_player(&self) -> Option<Mark> {
        match self.state() {
            GameState::Turn(mark) => Some(mark),
            GameState::Finished(_) => None,
        }
    }

    fn set_draw(&mut self) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Draw));
        self.state()
    }

    fn set_winner(&mut self, id: Mark) -> GameState {
        self.set_state(GameState::Finished(FinishedState::Win(id)));
        self.state()
    }

    /// Passes the turn to the opponent of the current player.
    fn switch_player(&mut self) -> GameResult<GameState> {
        let current = self.current_player().ok_or(GameError::GameIsFinished)?;
        self.set_state(GameState::Turn(current.opponent()));
        Ok(self.state())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }
}
