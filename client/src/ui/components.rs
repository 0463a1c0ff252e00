use std::time::Duration;

use bevy::prelude::*;

use super::WINNER_PULSE_AMPLITUDE;
use crate::common::pulse;

/// Component that indicates the text with the player to move or the result.
#[derive(Debug, Component)]
pub struct StatusText;

#[derive(Debug, Component)]
pub struct ClockText;

/// Text whose color follows the background.
#[derive(Debug, Component)]
pub struct ThemedText;

/// Component that indicates the container shown over the board once the game is finished.
#[derive(Debug, Component)]
pub struct ResultOverlay;

/// Result banner, its font size pulses around `base_size`.
#[derive(Debug, Component)]
pub struct WinnerText {
    base_size: f32,
    timer: Timer,
}

impl WinnerText {
    pub fn new(base_size: f32, period: Duration) -> Self {
        Self {
            base_size,
            timer: Timer::new(period, TimerMode::Repeating),
        }
    }

    pub fn tick(&mut self, delta: Duration) -> &Timer {
        self.timer.tick(delta)
    }

    pub fn font_size(&self) -> f32 {
        self.base_size * pulse(self.timer.fraction(), WINNER_PULSE_AMPLITUDE)
    }
}
