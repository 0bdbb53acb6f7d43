use glam::Vec2;
use macroquad::prelude::*;

/// One frame worth of player input, translated into game terms.
#[derive(Clone, Copy, Debug)]
pub struct InputModel {
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub confirmation_detected: bool,
    pub cancel_requested: bool,
    pub fullscreen_toggle_requested: bool,
    pub click: Option<Vec2>,
}

impl InputModel {
    pub fn capture(camera: &Camera2D) -> Self {
        let left_pressed = is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A);
        let right_pressed = is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D);
        let confirmation_detected =
            is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space);
        let cancel_requested = is_key_pressed(KeyCode::Escape);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);

        let click = if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            let world = camera.screen_to_world(vec2(mx, my));
            Some(Vec2::new(world.x, world.y))
        } else {
            None
        };

        Self {
            left_pressed,
            right_pressed,
            confirmation_detected,
            cancel_requested,
            fullscreen_toggle_requested,
            click,
        }
    }
}
