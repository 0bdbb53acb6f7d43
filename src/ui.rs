use lib_session::{GameSession, MenuOption, SessionMode};
use macroquad::prelude::*;

use crate::render::playfield_camera;

const FONT_SCALE: f32 = 1.0;
const MAIN_FONT_SIZE: u16 = 32;

pub const TEXT_COLOR: Color = Color::from_rgba(255, 140, 0, 255);

static MENU_BANNER: &'static str = "FISH ARE FRIENDS NOT FOOD\nSELECT FOOD TO START";
static FOOD_TEXT: &'static str = "FOOD";
static FOOD_TEXT_SELECTED: &'static str = ">FOOD";
static FRIENDS_TEXT: &'static str = "FRIENDS";
static FRIENDS_TEXT_SELECTED: &'static str = ">FRIENDS";

pub struct Ui {
    font: Font,
}

impl Ui {
    pub async fn new() -> anyhow::Result<Self> {
        Ok(Self {
            font: load_ttf_font("assets/seaside.ttf").await?,
        })
    }

    pub fn draw(&self, session: &GameSession) {
        set_camera(&playfield_camera());

        match session.mode() {
            SessionMode::Menu => self.draw_menu(session.menu_option()),
            SessionMode::Playing => self.draw_score(session.score()),
        }
    }

    fn draw_menu(&self, selected: MenuOption) {
        draw_multiline_text_ex(
            MENU_BANNER,
            150.0,
            150.0,
            None,
            self.text_params(),
        );

        self.put_text(
            if selected == MenuOption::Food {
                FOOD_TEXT_SELECTED
            } else {
                FOOD_TEXT
            },
            250.0,
            650.0,
        );
        self.put_text(
            if selected == MenuOption::Friends {
                FRIENDS_TEXT_SELECTED
            } else {
                FRIENDS_TEXT
            },
            450.0,
            650.0,
        );
    }

    fn draw_score(&self, score: u32) {
        self.put_text(&format!("SCORE: {}", score), 850.0, 25.0);
    }

    fn put_text(&self, text: &str, x: f32, y: f32) {
        draw_text_ex(text, x, y, self.text_params());
    }

    fn text_params(&self) -> TextParams<'_> {
        TextParams {
            font: Some(&self.font),
            font_size: MAIN_FONT_SIZE,
            color: TEXT_COLOR,
            font_scale: FONT_SCALE,
            ..Default::default()
        }
    }
}
