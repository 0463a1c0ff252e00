use bevy::prelude::*;
use clap::Parser;
use hex_core::core::Mark;

use crate::common::{
    DARK_BACKGROUND_COLOR, DARK_TEXT_COLOR, EMPTY_CELL_COLOR, LIGHT_BACKGROUND_COLOR,
    LIGHT_TEXT_COLOR, OUTLINE_COLOR, O_COLOR, X_COLOR,
};

/// Hex tic-tac-toe for two players sharing one mouse.
#[derive(Debug, Default, Parser)]
#[command(name = "hex-tic-tac-toe", version)]
pub struct Args {
    /// Font of the status line and the clock, relative to the assets folder
    #[arg(long)]
    pub font: Option<String>,
    /// Font of the winner banner, the regular font is used if omitted
    #[arg(long)]
    pub winner_font: Option<String>,
    /// Start with the dark background
    #[arg(long)]
    pub dark: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BackgroundMode {
    #[default]
    Light,
    Dark,
}

impl BackgroundMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Default, Resource)]
pub struct Settings {
    font: Option<String>,
    winner_font: Option<String>,
    background: BackgroundMode,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            font: args.font,
            winner_font: args.winner_font,
            background: if args.dark {
                BackgroundMode::Dark
            } else {
                BackgroundMode::Light
            },
        }
    }
}

impl Settings {
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    /// Falls back to the regular font.
    pub fn winner_font(&self) -> Option<&str> {
        self.winner_font.as_deref().or(self.font())
    }

    pub fn background(&self) -> BackgroundMode {
        self.background
    }

    /// Switches between the light and the dark background and returns the new one.
    pub fn toggle_background(&mut self) -> BackgroundMode {
        self.background = self.background.toggled();
        self.background
    }
}

/// Colors of everything drawn on the screen.
#[derive(Clone, Debug, Resource)]
pub struct Palette {
    pub light_background: Color,
    pub dark_background: Color,
    pub light_text: Color,
    pub dark_text: Color,
    pub empty: Color,
    pub x: Color,
    pub o: Color,
    pub outline: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light_background: LIGHT_BACKGROUND_COLOR,
            dark_background: DARK_BACKGROUND_COLOR,
            light_text: LIGHT_TEXT_COLOR,
            dark_text: DARK_TEXT_COLOR,
            empty: EMPTY_CELL_COLOR,
            x: X_COLOR,
            o: O_COLOR,
            outline: OUTLINE_COLOR,
        }
    }
}

impl Palette {
    pub fn background(&self, mode: BackgroundMode) -> Color {
        match mode {
            BackgroundMode::Light => self.light_background,
            BackgroundMode::Dark => self.dark_background,
        }
    }

    /// Text has to stay readable on top of the background.
    pub fn text(&self, mode: BackgroundMode) -> Color {
        match mode {
            BackgroundMode::Light => self.dark_text,
            BackgroundMode::Dark => self.light_text,
        }
    }

    pub fn mark(&self, mark: Mark) -> Color {
        match mark {
            Mark::Empty => self.empty,
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }
}

/// Font handles loaded according to [`Settings`].
/// Bevy's embedded font is used when no path is given.
#[derive(Debug, Resource)]
pub struct UiFonts {
    regular: Handle<Font>,
    winner: Handle<Font>,
}

impl UiFonts {
    pub fn regular(&self) -> Handle<Font> {
        self.regular.clone()
    }

    pub fn winner(&self) -> Handle<Font> {
        self.winner.clone()
    }

    #[cfg(test)]
    pub fn embedded() -> Self {
        Self {
            regular: Handle::default(),
            winner: Handle::default(),
        }
    }
}

impl FromWorld for UiFonts {
    fn from_world(world: &mut World) -> Self {
        let settings = world.resource::<Settings>();
        let asset_server = world.resource::<AssetServer>();
        let load = |path: Option<&str>| -> Handle<Font> {
            path.map(|path| asset_server.load(path.to_owned()))
                .unwrap_or_default()
        };
        Self {
            regular: load(settings.font()),
            winner: load(settings.winner_font()),
        }
    }
}
