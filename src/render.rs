use lib_session::{GameSession, SessionMode};
use macroquad::prelude::*;

use crate::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

pub const WATER_COLOR: Color = Color::from_rgba(0, 12, 30, 255);

/// Draws the playfield: the backdrop and, during play, the fish.
/// Text overlays live in [crate::ui].
pub struct Render {
    background: Texture2D,
    clownfish: Texture2D,
}

/// The camera mapping the fixed 1024x768 playfield onto the window.
/// Everything, including cursor coordinates, goes through it.
pub fn playfield_camera() -> Camera2D {
    let mut cam = Camera2D::from_display_rect(Rect {
        x: 0.0,
        y: 0.0,
        w: PLAYFIELD_WIDTH,
        h: PLAYFIELD_HEIGHT,
    });
    cam.zoom.y *= -1.0;

    cam
}

impl Render {
    pub async fn new() -> anyhow::Result<Self> {
        set_default_filter_mode(FilterMode::Nearest);

        Ok(Self {
            background: load_texture("assets/background.png").await?,
            clownfish: load_texture("assets/clown-fish-icon.png").await?,
        })
    }

    pub fn draw(&self, session: &GameSession) {
        set_camera(&playfield_camera());

        clear_background(WATER_COLOR);

        draw_texture_ex(
            &self.background,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)),
                ..Default::default()
            },
        );

        if session.mode() == SessionMode::Playing {
            let pos = session.target_pos();
            let size = session.target_rect().size();

            // The source art faces left, the fish swims right.
            draw_texture_ex(
                &self.clownfish,
                pos.x,
                pos.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(size.x, size.y)),
                    flip_x: true,
                    ..Default::default()
                },
            );
        }
    }
}
