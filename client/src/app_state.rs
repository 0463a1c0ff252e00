use bevy::prelude::States;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, States)]
pub enum GamePhase {
    #[default]
    Playing,
    Finished,
}
