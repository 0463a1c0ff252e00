use bevy::prelude::*;
use bevy::time::Stopwatch;
use hex_core::core::hex_tic_tac_toe::HexTicTacToe;

#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct CurrentGame(HexTicTacToe);

/// Time spent in the current game. Paused once the game is finished.
#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct GameClock(Stopwatch);
