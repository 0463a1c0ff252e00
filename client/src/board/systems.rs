use std::f32::consts::FRAC_PI_6;
use std::time::Duration;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use hex_core::core::layout::hex_to_pixel;
use hex_core::core::{Game as _, Mark, Point, HEX_SIZE};

use super::components::{OutlineBundle, Tile, TileBundle, WinAnimation};
use super::resources::{CellMaterials, HexMeshes};
use super::{WIN_ANIMATION_PERIOD, WIN_ANIMATION_Z};
use crate::game::{BoardClicked, CurrentGame, GameRestarted, MoveApplied, PlayerWon};

/// The board plane has `y` pointing down, the world has it pointing up.
fn plane_to_world(point: Point) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

fn world_to_plane(position: Vec2) -> Point {
    Point::new(position.x, -position.y)
}

pub fn create(
    mut commands: Commands,
    game: Res<CurrentGame>,
    meshes: Res<HexMeshes>,
    materials: Res<CellMaterials>,
) {
    debug!("create board of {} cells", game.board().len());
    for cell in game.board().cells() {
        let center = plane_to_world(hex_to_pixel(cell.coord(), HEX_SIZE));
        // flat-topped
        let transform = Transform::from_translation(center.extend(0.0))
            .with_rotation(Quat::from_rotation_z(FRAC_PI_6));
        commands
            .spawn(TileBundle::new(
                meshes.fill(),
                materials.mark(cell.mark()),
                transform,
                cell.coord(),
            ))
            .with_child(OutlineBundle::new(meshes.outline(), materials.outline()));
    }
}

pub fn handle_mouse_input(
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut board_clicked: EventWriter<BoardClicked>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = window.get_single() else {
        error!("failed to get single window");
        return;
    };
    let Ok((camera, camera_transform)) = camera.get_single() else {
        error!("failed to get single camera");
        return;
    };
    if let Some(world_position) = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok())
    {
        board_clicked.send(BoardClicked::new(world_to_plane(world_position)));
    }
}

pub fn set_tile_color(
    mut tiles: Query<(&Tile, &mut MeshMaterial2d<ColorMaterial>)>,
    mut move_applied: EventReader<MoveApplied>,
    materials: Res<CellMaterials>,
) {
    for event in move_applied.read() {
        let Some((_, mut material)) = tiles
            .iter_mut()
            .find(|(tile, _)| tile.coord() == event.coord())
        else {
            warn!("no tile for cell {}", event.coord());
            continue;
        };
        material.0 = materials.mark(event.mark());
    }
}

pub fn create_win_animation(
    mut commands: Commands,
    tiles: Query<(Entity, &Tile)>,
    mut player_won: EventReader<PlayerWon>,
) {
    for event in player_won.read() {
        let line = event.cells();
        debug!("create win animation for {:?}", line);
        for (entity, _) in tiles
            .iter()
            .filter(|(_, tile)| line.contains(&tile.coord()))
        {
            commands
                .entity(entity)
                .insert(WinAnimation::new(Duration::from_millis(
                    WIN_ANIMATION_PERIOD,
                )));
        }
    }
}

pub fn update_win_animation(
    mut tiles: Query<(&mut WinAnimation, &mut Transform)>,
    time: Res<Time>,
) {
    for (mut animation, mut transform) in tiles.iter_mut() {
        animation.tick(time.delta());
        transform.scale = Vec3::splat(animation.scale());
        transform.translation.z = WIN_ANIMATION_Z;
    }
}

/// Receive [`GameRestarted`] event and bring every tile back to the empty state.
pub fn reset_tiles(
    mut commands: Commands,
    mut tiles: Query<(Entity, &mut MeshMaterial2d<ColorMaterial>, &mut Transform), With<Tile>>,
    mut restarted: EventReader<GameRestarted>,
    materials: Res<CellMaterials>,
) {
    if restarted.is_empty() {
        return;
    }
    restarted.clear();
    for (entity, mut material, mut transform) in tiles.iter_mut() {
        material.0 = materials.mark(Mark::Empty);
        transform.scale = Vec3::ONE;
        transform.translation.z = 0.0;
        commands.entity(entity).remove::<WinAnimation>();
    }
}
