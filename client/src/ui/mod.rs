mod components;
mod systems;

use bevy::prelude::*;

use crate::game::GameSystems;
use crate::settings::UiFonts;
use systems::*;

pub const HINT: &str = "R: restart  B: background";
pub const WINNER_PULSE_PERIOD: u64 = 800;
pub const WINNER_PULSE_AMPLITUDE: f32 = 0.2;

pub struct InGameUIPlugin;

impl Plugin for InGameUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFonts>()
            .add_systems(Startup, (set_background, create))
            .add_systems(
                Update,
                (
                    (clear_result, show_result, update_status)
                        .chain()
                        .after(GameSystems),
                    update_clock,
                    animate_winner_text,
                    toggle_background,
                ),
            );
    }
}
