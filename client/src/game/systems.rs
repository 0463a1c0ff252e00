use bevy::prelude::*;
use hex_core::core::{FinishedState, Game as _, GameState};

use super::{BoardClicked, CurrentGame, Draw, GameClock, GameRestarted, MoveApplied, PlayerWon};
use crate::app_state::GamePhase;

/// Receive [`BoardClicked`] event, make a turn for the current player and
/// report the outcome with [`MoveApplied`], [`PlayerWon`] or [`Draw`].
pub fn apply_click(
    mut game: ResMut<CurrentGame>,
    mut board_clicked: EventReader<BoardClicked>,
    mut move_applied: EventWriter<MoveApplied>,
    mut player_won: EventWriter<PlayerWon>,
    mut draw: EventWriter<Draw>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    for event in board_clicked.read() {
        let Some(player) = game.current_player() else {
            debug!("click at {:?} ignored: game is finished", event.point());
            continue;
        };
        let (coord, state) = match game.handle_click(event.point()) {
            Ok(turn) => turn,
            Err(err) => {
                debug!("click at {:?} ignored: {}", event.point(), err);
                continue;
            }
        };
        debug!("{} placed at {}", player, coord);
        move_applied.send(MoveApplied::new(coord, player));
        match state {
            GameState::Turn(_) => {}
            GameState::Finished(FinishedState::Win(winner)) => {
                match game.winning_line() {
                    Some(line) => {
                        player_won.send(PlayerWon(line));
                    }
                    None => error!("{} won without a winning line", winner),
                }
                next_phase.set(GamePhase::Finished);
            }
            GameState::Finished(FinishedState::Draw) => {
                draw.send(Draw);
                next_phase.set(GamePhase::Finished);
            }
        }
    }
}

pub fn tick_clock(mut clock: ResMut<GameClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

/// Start a new game on `R` or on a click after the game is finished.
pub fn restart(
    mut game: ResMut<CurrentGame>,
    mut clock: ResMut<GameClock>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    phase: Res<State<GamePhase>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut restarted: EventWriter<GameRestarted>,
) {
    let click_after_finish =
        *phase.get() == GamePhase::Finished && mouse.just_pressed(MouseButton::Left);
    if !keys.just_pressed(KeyCode::KeyR) && !click_after_finish {
        return;
    }
    info!("restart the game");
    game.restart();
    clock.reset();
    next_phase.set(GamePhase::Playing);
    restarted.send(GameRestarted);
}
