mod app_state;
mod board;
mod common;
mod game;
mod settings;
mod ui;

use bevy::prelude::*;
use clap::Parser;

use crate::app_state::GamePhase;
use crate::board::BoardPlugin;
use crate::common::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::game::GamePlugin;
use crate::settings::{Args, Palette, Settings};
use crate::ui::InGameUIPlugin;

fn init_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    let args = Args::parse();
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .init_state::<GamePhase>()
        .insert_resource(Settings::from(args))
        .init_resource::<Palette>()
        .add_plugins((GamePlugin, BoardPlugin, InGameUIPlugin))
        .add_systems(Startup, init_camera)
        .run();
}
