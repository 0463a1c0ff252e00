mod events;
mod resources;
mod systems;

use bevy::prelude::*;

use crate::app_state::GamePhase;
use systems::*;

pub use events::{BoardClicked, Draw, GameRestarted, MoveApplied, PlayerWon};
pub use resources::{CurrentGame, GameClock};

/// Systems that change [`CurrentGame`]. Views react to their events afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Hash, SystemSet)]
pub struct GameSystems;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentGame>()
            .init_resource::<GameClock>()
            .add_event::<BoardClicked>()
            .add_event::<MoveApplied>()
            .add_event::<PlayerWon>()
            .add_event::<Draw>()
            .add_event::<GameRestarted>()
            .add_systems(
                Update,
                (
                    (restart, apply_click).chain().in_set(GameSystems),
                    tick_clock.run_if(in_state(GamePhase::Playing)),
                ),
            );
    }
}
