extern crate hex_tic_tac_toe;

use hex_tic_tac_toe::core::hex_tic_tac_toe::HexTicTacToe;
use hex_tic_tac_toe::core::layout::hex_to_pixel;
use hex_tic_tac_toe::core::{
    FinishedState, Game, GameError, GameState, HexBoard, HexCoord, Mark, DIRECTIONS, HEX_SIZE,
};

const DRAW_X: [(i32, i32); 10] = [
    (-2, 0),
    (-2, 1),
    (-1, -1),
    (-1, 1),
    (-1, 2),
    (0, -1),
    (0, 0),
    (0, 2),
    (1, 0),
    (2, -2),
];
const DRAW_O: [(i32, i32); 9] = [
    (-2, 2),
    (-1, 0),
    (0, -2),
    (0, 1),
    (1, -2),
    (1, -1),
    (1, 1),
    (2, -1),
    (2, 0),
];

/// Every run of three contiguous cells on the board, once per axis.
fn all_triples(board: &HexBoard) -> Vec<[HexCoord; 3]> {
    board
        .cells()
        .flat_map(|cell| {
            DIRECTIONS[..3].iter().map(move |&dir| {
                let start = cell.coord();
                [start, start + dir, start + dir * 2]
            })
        })
        .filter(|triple| triple.iter().all(|&coord| board.contains(coord)))
        .collect()
}

#[test]
fn every_line_of_three_wins() {
    let triples = all_triples(&HexBoard::default());
    // 3 axes with 5 + 2 * 4 + 2 * 3 cells in rows
    assert_eq!(triples.len(), 27);
    for mark in [Mark::X, Mark::O] {
        for triple in &triples {
            let mut board = HexBoard::default();
            for &coord in &triple[..2] {
                assert!(board.apply_move(coord, mark));
            }
            assert_eq!(board.check_winner(), Mark::Empty, "{:?}", triple);
            assert!(board.apply_move(triple[2], mark));
            assert_eq!(board.check_winner(), mark, "{:?}", triple);
        }
    }
}

#[test]
fn winner_is_found_in_last_direction() {
    let mut board = HexBoard::default();
    // the line is only found in the last of the six directions
    for coord in [(0, 0), (1, -1), (2, -2)] {
        assert!(board.apply_move(coord.into(), Mark::O));
    }
    let line = board.winning_line().unwrap();
    assert_eq!(line.mark(), Mark::O);
    let mut cells = line.cells();
    cells.sort_by_key(|coord| coord.q());
    assert_eq!(
        cells,
        [HexCoord::new(0, 0), HexCoord::new(1, -1), HexCoord::new(2, -2)]
    );
}

#[test]
fn full_game_ends_in_draw() {
    let mut game = HexTicTacToe::default();
    let mut state = game.state();
    for (i, &coord) in DRAW_X.iter().enumerate() {
        state = game.update(Mark::X, coord.into()).unwrap();
        if let Some(&coord) = DRAW_O.get(i) {
            assert!(!game.board().is_full());
            state = game.update(Mark::O, coord.into()).unwrap();
        }
    }
    assert_eq!(state, GameState::Finished(FinishedState::Draw));
    assert!(game.board().is_full());
    assert_eq!(game.board().check_winner(), Mark::Empty);
}

#[test]
fn game_played_with_clicks() {
    let mut game = HexTicTacToe::default();
    let clicks = [(0, 0), (0, 1), (0, -1), (1, 1), (0, -2)];
    let mut state = game.state();
    for coord in clicks {
        let (cell, new_state) = game
            .handle_click(hex_to_pixel(coord.into(), HEX_SIZE))
            .unwrap();
        assert_eq!(cell, HexCoord::from(coord));
        state = new_state;
    }
    assert_eq!(state, GameState::Finished(FinishedState::Win(Mark::X)));
    assert_eq!(
        game.handle_click(hex_to_pixel((2, 0).into(), HEX_SIZE)),
        Err(GameError::GameIsFinished)
    );

    game.restart();
    assert_eq!(
        game.handle_click(hex_to_pixel((2, 0).into(), HEX_SIZE)),
        Ok((HexCoord::new(2, 0), GameState::Turn(Mark::O)))
    );
}

#[test]
fn occupied_cell_keeps_first_mark() {
    let mut board = HexBoard::default();
    assert!(board.apply_move((0, 0).into(), Mark::X));
    assert!(!board.apply_move((0, 0).into(), Mark::O));
    assert_eq!(board.mark((0, 0).into()), Some(Mark::X));
}
