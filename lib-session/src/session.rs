use glam::{vec2, Vec2};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::menu::{MenuAction, MenuOption, MenuState};
use crate::{motion, Aabb};

pub const TARGET_SIZE: f32 = 64.0;
pub const TARGET_SPEED: f32 = 500.0;

/// Immutable playfield dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// Tuning for the clickable target.
#[derive(Clone, Copy, Debug)]
pub struct TargetParams {
    pub size: f32,
    pub speed: f32,
}

impl Default for TargetParams {
    fn default() -> Self {
        Self {
            size: TARGET_SIZE,
            speed: TARGET_SPEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Menu,
    Playing,
}

/// One continuous run from menu through play. The host owns a single
/// instance for the process lifetime, forwards input events into the
/// `handle_*` methods and calls [GameSession::tick] once per frame.
///
/// Exiting is never a mode: the session only raises a flag the host
/// polls through [GameSession::exit_requested].
pub struct GameSession {
    bounds: Bounds,
    params: TargetParams,
    mode: SessionMode,
    menu: MenuState,
    target_pos: Vec2,
    score: u32,
    exit_requested: bool,
    rng: SmallRng,
}

impl GameSession {
    /// The seed is injected by the caller so spawn sequences can be
    /// replayed. The first spawn happens on entering play, not here.
    pub fn new(bounds: Bounds, params: TargetParams, seed: u64) -> GameSession {
        GameSession {
            bounds,
            params,
            mode: SessionMode::Menu,
            menu: MenuState::new(),
            target_pos: Vec2::ZERO,
            score: 0,
            exit_requested: false,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn handle_left(&mut self) {
        if self.mode != SessionMode::Menu {
            return;
        }

        self.menu.toggle();
    }

    pub fn handle_right(&mut self) {
        if self.mode != SessionMode::Menu {
            return;
        }

        self.menu.toggle();
    }

    pub fn handle_confirm(&mut self) {
        if self.mode != SessionMode::Menu {
            return;
        }

        match self.menu.confirm() {
            MenuAction::StartGame => {
                info!("Starting the game");
                self.mode = SessionMode::Playing;
                self.spawn_target();
            }
            MenuAction::RequestExit => self.request_exit(),
        }
    }

    /// Escape always quits, even mid-game.
    pub fn handle_cancel(&mut self) {
        if let MenuAction::RequestExit = self.menu.cancel() {
            self.request_exit();
        }
    }

    /// Hit-tests a click against the target. On a hit the score goes up
    /// by one and the target respawns. Ignored while in the menu.
    pub fn handle_click(&mut self, point: Vec2) -> bool {
        if self.mode != SessionMode::Playing {
            return false;
        }

        if !self.target_rect().contains(point) {
            return false;
        }

        self.score += 1;
        debug!("Target hit, score: {}", self.score);
        self.spawn_target();

        true
    }

    /// Advances the target. The position is frozen while in the menu.
    pub fn tick(&mut self, dt: f32) {
        if self.mode != SessionMode::Playing {
            return;
        }

        self.target_pos = motion::advance(
            self.target_pos,
            dt,
            self.params.speed,
            self.bounds.width,
        );
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn menu_option(&self) -> MenuOption {
        self.menu.selected()
    }

    pub fn target_pos(&self) -> Vec2 {
        self.target_pos
    }

    pub fn target_rect(&self) -> Aabb {
        Aabb::from_pos_size(self.target_pos, Vec2::splat(self.params.size))
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    fn request_exit(&mut self) {
        if !self.exit_requested {
            info!("Exit requested");
        }

        self.exit_requested = true;
    }

    // The spawn area is inset by the target size so the sprite always
    // lands fully on-screen.
    fn spawn_target(&mut self) {
        let max_x = self.bounds.width - self.params.size;
        let max_y = self.bounds.height - self.params.size;

        self.target_pos = vec2(
            self.rng.random_range(0.0..=max_x),
            self.rng.random_range(0.0..=max_y),
        );
    }
}
