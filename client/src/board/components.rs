use std::time::Duration;

use bevy::prelude::*;
use hex_core::core::HexCoord;

use super::WIN_ANIMATION_AMPLITUDE;
use crate::common::pulse;

/// Board cell view, remembers which cell of the game it shows.
#[derive(Clone, Copy, Debug, PartialEq, Component)]
pub struct Tile(HexCoord);

impl Tile {
    pub fn coord(&self) -> HexCoord {
        self.0
    }
}

#[derive(Component)]
pub struct Outline;

/// Makes a tile pulse until the game is restarted.
#[derive(Component)]
pub struct WinAnimation {
    timer: Timer,
}

impl WinAnimation {
    pub fn new(period: Duration) -> Self {
        Self {
            timer: Timer::new(period, TimerMode::Repeating),
        }
    }

    pub fn tick(&mut self, delta: Duration) -> &Timer {
        self.timer.tick(delta)
    }

    pub fn scale(&self) -> f32 {
        pulse(self.timer.fraction(), WIN_ANIMATION_AMPLITUDE)
    }
}

/// Bundle for a board tile: a hexagon mesh colored by the mark and a [`Tile`].
#[derive(Bundle)]
pub struct TileBundle {
    mesh: Mesh2d,
    material: MeshMaterial2d<ColorMaterial>,
    transform: Transform,
    tile: Tile,
}

impl TileBundle {
    pub fn new(
        mesh: Handle<Mesh>,
        material: Handle<ColorMaterial>,
        transform: Transform,
        coord: HexCoord,
    ) -> Self {
        Self {
            mesh: Mesh2d(mesh),
            material: MeshMaterial2d(material),
            transform,
            tile: Tile(coord),
        }
    }
}

/// A slightly bigger hexagon drawn right behind its parent tile.
#[derive(Bundle)]
pub struct OutlineBundle {
    mesh: Mesh2d,
    material: MeshMaterial2d<ColorMaterial>,
    transform: Transform,
    outline: Outline,
}

impl OutlineBundle {
    pub fn new(mesh: Handle<Mesh>, material: Handle<ColorMaterial>) -> Self {
        Self {
            mesh: Mesh2d(mesh),
            material: MeshMaterial2d(material),
            transform: Transform::from_xyz(0.0, 0.0, -0.1),
            outline: Outline,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_win_animation_pulses() {
        let mut animation = WinAnimation::new(Duration::from_millis(100));
        assert_eq!(animation.scale(), 1.0);

        animation.tick(Duration::from_millis(50));
        assert!((animation.scale() - (1.0 + WIN_ANIMATION_AMPLITUDE)).abs() < 1e-4);

        // repeats
        assert!(animation.tick(Duration::from_millis(50)).just_finished());
        assert!((animation.scale() - 1.0).abs() < 1e-4);
    }
}
