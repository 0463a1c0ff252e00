mod components;
mod resources;
mod systems;

use bevy::prelude::*;

use crate::app_state::GamePhase;
use crate::game::GameSystems;
use resources::{CellMaterials, HexMeshes};
use systems::*;

pub const CELL_GAP: f32 = 1.0;
pub const OUTLINE_WIDTH: f32 = 2.0;
pub const WIN_ANIMATION_PERIOD: u64 = 600;
pub const WIN_ANIMATION_AMPLITUDE: f32 = 0.15;
pub const WIN_ANIMATION_Z: f32 = 1.0;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HexMeshes>()
            .init_resource::<CellMaterials>()
            .add_systems(Startup, create)
            .add_systems(
                Update,
                (
                    handle_mouse_input
                        .run_if(in_state(GamePhase::Playing))
                        .before(GameSystems),
                    (
                        update_win_animation,
                        reset_tiles,
                        set_tile_color,
                        create_win_animation,
                    )
                        .chain()
                        .after(GameSystems),
                ),
            );
    }
}
