use super::{
    Game, GameError, GameResult, GameState, HexBoard, HexCoord, Mark, Point, WinningLine,
    HEX_SIZE,
};

/// Two-player game on a [`HexBoard`], `X` moves first.
#[derive(Clone, Debug)]
pub struct HexTicTacToe {
    state: GameState,
    board: HexBoard,
}

impl Default for HexTicTacToe {
    fn default() -> Self {
        <Self as Game>::new()
    }
}

impl Game for HexTicTacToe {
    type TurnData = HexCoord;

    fn new() -> Self {
        Self {
            state: GameState::Turn(Mark::X),
            board: HexBoard::default(),
        }
    }

    fn update(&mut self, id: Mark, data: Self::TurnData) -> GameResult<GameState> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        if id.is_empty() {
            return Err(GameError::InvalidMark);
        }
        let current = self.current_player().ok_or(GameError::GameIsFinished)?;
        if id != current {
            return Err(GameError::not_your_turn(current, id));
        }

        match self.board.mark(data) {
            None => return Err(GameError::cell_not_on_board(data.q(), data.r())),
            Some(Mark::X | Mark::O) => {
                return Err(GameError::cell_is_occupied(data.q(), data.r()))
            }
            Some(Mark::Empty) => {}
        }
        if !self.board.apply_move(data, id) {
            return Err(GameError::cell_is_occupied(data.q(), data.r()));
        }

        self.update_state()
    }

    fn board(&self) -> &HexBoard {
        &self.board
    }

    fn state(&self) -> GameState {
        self.state
    }

    fn set_state(&mut self, state: GameState) {
        self.state = state;
    }
}

impl HexTicTacToe {
    /// Maps `point` on the board plane to a cell and makes a turn for the current player.
    /// Returns the chosen cell along with the new state.
    pub fn handle_click(&mut self, point: Point) -> GameResult<(HexCoord, GameState)> {
        if self.is_finished() {
            return Err(GameError::GameIsFinished);
        }
        let coord = self
            .board
            .cell_at_point(point, HEX_SIZE)
            .ok_or_else(|| GameError::no_cell_at_point(point.x, point.y))?;
        let player = self.current_player().ok_or(GameError::GameIsFinished)?;
        let state = self.update(player, coord)?;
        Ok((coord, state))
    }

    /// Throws the current board away and starts over with `X` to move.
    pub fn restart(&mut self) {
        *self = <Self as Game>::new();
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    fn update_state(&mut self) -> GameResult<GameState> {
        let winner = self.board.check_winner();
        if !winner.is_empty() {
            tracing::info!("player {} won", winner);
            return Ok(self.set_winner(winner));
        }

        if self.board.is_full() {
            tracing::info!("board is full, draw");
            return Ok(self.set_draw());
        }

        self.switch_player()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::layout::hex_to_pixel;
    use crate::core::FinishedState;

    fn play(game: &mut HexTicTacToe, moves: &[(i32, i32)]) -> GameResult<GameState> {
        let mut state = game.state();
        for &coord in moves {
            let player = game.current_player().ok_or(GameError::GameIsFinished)?;
            state = game.update(player, coord.into())?;
        }
        Ok(state)
    }

    #[test]
    fn test_new_game() {
        let game = HexTicTacToe::default();
        assert_eq!(game.state(), GameState::Turn(Mark::X));
        assert_eq!(game.current_player(), Some(Mark::X));
        assert_eq!(game.board().len(), 19);
        assert!(!game.is_finished());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = HexTicTacToe::default();
        assert_eq!(
            game.update(Mark::X, HexCoord::new(0, 0)),
            Ok(GameState::Turn(Mark::O))
        );
        assert_eq!(
            game.update(Mark::O, HexCoord::new(1, 0)),
            Ok(GameState::Turn(Mark::X))
        );
    }

    #[test]
    fn test_switch_player() {
        let mut game = HexTicTacToe::default();
        assert_eq!(game.switch_player(), Ok(GameState::Turn(Mark::O)));
        assert_eq!(game.switch_player(), Ok(GameState::Turn(Mark::X)));

        game.set_draw();
        assert_eq!(game.switch_player(), Err(GameError::GameIsFinished));
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn test_not_your_turn() {
        let mut game = HexTicTacToe::default();
        assert_eq!(
            game.update(Mark::O, HexCoord::new(0, 0)),
            Err(GameError::not_your_turn(Mark::X, Mark::O))
        );
        assert_eq!(game.board().mark(HexCoord::new(0, 0)), Some(Mark::Empty));
    }

    #[test]
    fn test_invalid_moves() {
        let mut game = HexTicTacToe::default();
        assert_eq!(
            game.update(Mark::Empty, HexCoord::new(0, 0)),
            Err(GameError::InvalidMark)
        );
        assert_eq!(
            game.update(Mark::X, HexCoord::new(3, -1)),
            Err(GameError::cell_not_on_board(3, -1))
        );
        game.update(Mark::X, HexCoord::new(0, 0)).unwrap();
        assert_eq!(
            game.update(Mark::O, HexCoord::new(0, 0)),
            Err(GameError::cell_is_occupied(0, 0))
        );
        // the failed attempt doesn't pass the turn
        assert_eq!(game.state(), GameState::Turn(Mark::O));
    }

    #[test]
    fn test_win() {
        let mut game = HexTicTacToe::default();
        let state = play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
        assert_eq!(state, Ok(GameState::Finished(FinishedState::Win(Mark::X))));
        assert_eq!(game.current_player(), None);
        assert_eq!(
            game.winning_line().map(|line| line.cells()),
            Some([HexCoord::new(0, 0), HexCoord::new(1, 0), HexCoord::new(2, 0)])
        );
        assert_eq!(
            game.update(Mark::O, HexCoord::new(-1, 0)),
            Err(GameError::GameIsFinished)
        );
    }

    #[test]
    fn test_handle_click() {
        let mut game = HexTicTacToe::default();
        let center = hex_to_pixel(HexCoord::new(-1, 2), HEX_SIZE);
        assert_eq!(
            game.handle_click(center),
            Ok((HexCoord::new(-1, 2), GameState::Turn(Mark::O)))
        );
        assert_eq!(game.board().mark(HexCoord::new(-1, 2)), Some(Mark::X));

        // the same cell again
        let nearby = Point::new(center.x + 5.0, center.y + 5.0);
        assert_eq!(
            game.handle_click(nearby),
            Err(GameError::cell_is_occupied(-1, 2))
        );

        let far_away = Point::new(500.0, 500.0);
        assert_eq!(
            game.handle_click(far_away),
            Err(GameError::no_cell_at_point(500.0, 500.0))
        );
        assert_eq!(game.state(), GameState::Turn(Mark::O));
    }

    #[test]
    fn test_restart() {
        let mut game = HexTicTacToe::default();
        play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]).unwrap();
        assert!(game.is_finished());

        game.restart();
        assert_eq!(game.state(), GameState::Turn(Mark::X));
        assert!(game.board().cells().all(|cell| cell.is_empty()));
        assert_eq!(game.winning_line(), None);
    }
}
