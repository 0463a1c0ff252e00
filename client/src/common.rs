use std::f32::consts::PI;

use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Hex Tic-Tac-Toe";
pub const WINDOW_WIDTH: f32 = 600.0;
pub const WINDOW_HEIGHT: f32 = 600.0;

pub const FONT_SIZE: f32 = 30.0;
pub const HINT_FONT_SIZE: f32 = 18.0;
pub const WINNER_FONT_SIZE: f32 = 60.0;

pub const LIGHT_BACKGROUND_COLOR: Color = Color::srgb(0.88, 1.0, 0.88);
pub const DARK_BACKGROUND_COLOR: Color = Color::srgb(0.12, 0.16, 0.12);
pub const LIGHT_TEXT_COLOR: Color = Color::srgb(0.88, 1.0, 0.88);
pub const DARK_TEXT_COLOR: Color = Color::srgb(0.29, 0.40, 0.29);
pub const EMPTY_CELL_COLOR: Color = Color::srgb(0.96, 0.96, 0.94);
pub const X_COLOR: Color = Color::srgb(0.80, 0.16, 0.16);
pub const O_COLOR: Color = Color::srgb(0.16, 0.36, 0.80);
pub const OUTLINE_COLOR: Color = Color::BLACK;

/// Grows from `1.0` to `1.0 + amplitude` and back while `fraction` goes from `0.0` to `1.0`.
pub fn pulse(fraction: f32, amplitude: f32) -> f32 {
    1.0 + amplitude * (PI * fraction.clamp(0.0, 1.0)).sin()
}

// Containers

pub fn root_node() -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::SpaceBetween,
        height: Val::Percent(100.0),
        width: Val::Percent(100.0),
        padding: UiRect::all(Val::Px(10.0)),
        ..default()
    }
}

pub fn row_node() -> Node {
    Node {
        flex_direction: FlexDirection::Row,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::SpaceBetween,
        width: Val::Percent(100.0),
        ..default()
    }
}

pub fn overlay_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        height: Val::Percent(100.0),
        width: Val::Percent(100.0),
        ..default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pulse() {
        assert_eq!(pulse(0.0, 0.2), 1.0);
        assert!((pulse(0.5, 0.2) - 1.2).abs() < 1e-6);
        assert!((pulse(1.0, 0.2) - 1.0).abs() < 1e-6);
        // out of range fractions are clamped
        assert_eq!(pulse(-1.0, 0.2), 1.0);
        assert!(pulse(0.25, 0.2) > 1.0);
    }
}
