use std::time::Duration;

use bevy::prelude::*;
use hex_core::core::{FinishedState, Game as _, GameState};

use super::components::{ClockText, ResultOverlay, StatusText, ThemedText, WinnerText};
use super::{HINT, WINNER_PULSE_PERIOD};
use crate::common::{self, FONT_SIZE, HINT_FONT_SIZE, WINNER_FONT_SIZE};
use crate::game::{CurrentGame, Draw, GameClock, GameRestarted, PlayerWon};
use crate::settings::{Palette, Settings, UiFonts};

fn status_text(state: GameState) -> String {
    match state {
        GameState::Turn(mark) => format!("Turn: {}", mark),
        GameState::Finished(FinishedState::Win(mark)) => format!("Winner: {}", mark),
        GameState::Finished(FinishedState::Draw) => "Draw".into(),
    }
}

/// Formats `elapsed` as `mm:ss`.
fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn set_background(
    mut clear_color: ResMut<ClearColor>,
    settings: Res<Settings>,
    palette: Res<Palette>,
) {
    clear_color.0 = palette.background(settings.background());
}

pub fn create(
    mut commands: Commands,
    game: Res<CurrentGame>,
    settings: Res<Settings>,
    palette: Res<Palette>,
    fonts: Res<UiFonts>,
) {
    let text_font = TextFont {
        font: fonts.regular(),
        font_size: FONT_SIZE,
        ..default()
    };
    let text_color = TextColor(palette.text(settings.background()));
    commands.spawn(common::root_node()).with_children(|builder| {
        builder.spawn((
            Text::new(status_text(game.state())),
            text_font.clone(),
            text_color,
            StatusText,
            ThemedText,
        ));
        builder.spawn(common::row_node()).with_children(|builder| {
            builder.spawn((
                Text::new(format_clock(Duration::ZERO)),
                text_font.clone(),
                text_color,
                ClockText,
                ThemedText,
            ));
            builder.spawn((
                Text::new(HINT),
                TextFont {
                    font_size: HINT_FONT_SIZE,
                    ..text_font
                },
                text_color,
                ThemedText,
            ));
        });
    });
}

pub fn update_status(game: Res<CurrentGame>, mut text: Query<&mut Text, With<StatusText>>) {
    if !game.is_changed() {
        return;
    }
    for mut text in text.iter_mut() {
        text.0 = status_text(game.state());
    }
}

pub fn update_clock(clock: Res<GameClock>, mut text: Query<&mut Text, With<ClockText>>) {
    if !clock.is_changed() {
        return;
    }
    for mut text in text.iter_mut() {
        text.0 = format_clock(clock.elapsed());
    }
}

/// Receive [`PlayerWon`] or [`Draw`] event and show the result over the board.
pub fn show_result(
    mut commands: Commands,
    mut player_won: EventReader<PlayerWon>,
    mut draw: EventReader<Draw>,
    settings: Res<Settings>,
    palette: Res<Palette>,
    fonts: Res<UiFonts>,
) {
    // the winner banner keeps the winner's color, the draw banner follows the background
    let won = player_won
        .read()
        .last()
        .map(|event| (format!("{} wins!", event.mark()), palette.mark(event.mark()), false));
    let drawn = draw
        .read()
        .last()
        .map(|_| ("Draw!".to_string(), palette.text(settings.background()), true));
    let Some((text, color, themed)) = won.or(drawn) else {
        return;
    };
    debug!("show result: {}", text);
    commands
        .spawn((common::overlay_node(), ResultOverlay))
        .with_children(|builder| {
            let mut banner = builder.spawn((
                Text::new(text),
                TextFont {
                    font: fonts.winner(),
                    font_size: WINNER_FONT_SIZE,
                    ..default()
                },
                TextColor(color),
                WinnerText::new(
                    WINNER_FONT_SIZE,
                    Duration::from_millis(WINNER_PULSE_PERIOD),
                ),
            ));
            if themed {
                banner.insert(ThemedText);
            }
        });
}

pub fn animate_winner_text(mut text: Query<(&mut WinnerText, &mut TextFont)>, time: Res<Time>) {
    for (mut winner, mut font) in text.iter_mut() {
        winner.tick(time.delta());
        font.font_size = winner.font_size();
    }
}

/// Receive [`GameRestarted`] event and remove the result overlay.
pub fn clear_result(
    mut commands: Commands,
    overlay: Query<Entity, With<ResultOverlay>>,
    mut restarted: EventReader<GameRestarted>,
) {
    if restarted.is_empty() {
        return;
    }
    restarted.clear();
    for entity in overlay.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Switch between the light and the dark background on `B`.
pub fn toggle_background(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<Settings>,
    mut clear_color: ResMut<ClearColor>,
    mut text_color: Query<&mut TextColor, With<ThemedText>>,
    palette: Res<Palette>,
) {
    if !keys.just_pressed(KeyCode::KeyB) {
        return;
    }
    let mode = settings.toggle_background();
    debug!("background: {:?}", mode);
    clear_color.0 = palette.background(mode);
    for mut color in text_color.iter_mut() {
        color.0 = palette.text(mode);
    }
}
