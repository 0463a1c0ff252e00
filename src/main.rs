use hex_tic_tac_toe::core::hex_tic_tac_toe::HexTicTacToe;
use hex_tic_tac_toe::core::{Game, GameState, HexCoord};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = HexTicTacToe::default();
    let moves = [(0, 0), (0, 0), (1, -1), (-1, 1), (1, 0), (3, 0), (-2, 2)];
    for (q, r) in moves {
        let Some(player) = game.current_player() else {
            break;
        };
        match game.update(player, HexCoord::new(q, r)) {
            Ok(state) => {
                println!("{} -> ({}, {}):\n{}\n", player, q, r, game.board());
                if let GameState::Finished(finished) = state {
                    println!("game over: {:?}", finished);
                }
            }
            Err(err) => println!("{} -> ({}, {}) rejected: {}", player, q, r, err),
        }
    }
}
