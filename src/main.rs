use clap::Parser;
use lib_session::{Bounds, GameSession, TargetParams};
use log::info;
use macroquad::miniquad;
use macroquad::prelude::*;

use debug::{init_on_screen_log, Debug};
use input::InputModel;
use render::Render;
use ui::Ui;

mod cli;
mod config;
mod debug;
mod input;
mod render;
mod sys;
mod ui;

pub const PLAYFIELD_WIDTH: f32 = 1024.0;
pub const PLAYFIELD_HEIGHT: f32 = 768.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Nemo Game".to_owned(),
        high_dpi: true,
        window_width: PLAYFIELD_WIDTH as i32,
        window_height: PLAYFIELD_HEIGHT as i32,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
    }
}

async fn run() -> anyhow::Result<()> {
    log::set_max_level(log::STATIC_MAX_LEVEL);
    init_on_screen_log();

    let args = cli::Args::parse();
    let cfg = config::load().await;

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    // Time-based seeding is only the fallback. A fixed seed makes the
    // fish spawn sequence replayable.
    let seed = args
        .seed
        .or(cfg.seed)
        .unwrap_or_else(|| miniquad::date::now() as u64);
    info!("Session seed: {seed}");

    let mut session = GameSession::new(
        Bounds {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        },
        TargetParams {
            size: cfg.fish.size,
            speed: cfg.fish.speed,
        },
        seed,
    );
    if args.skip_menu {
        session.handle_confirm();
    }

    let render = Render::new().await?;
    let ui = Ui::new().await?;
    let mut debug = Debug::new();

    build_textures_atlas();

    let mut fullscreen = window_conf().fullscreen;

    // Save old size as leaving fullscreen will give window a different size
    // This value is our best bet as macroquad doesn't allow us to get window size
    let old_size = (window_conf().window_width, window_conf().window_height);

    sys::done_loading();

    info!("Done loading");

    loop {
        let dt = get_frame_time();
        let input = InputModel::capture(&render::playfield_camera());

        if input.fullscreen_toggle_requested {
            // NOTE: macroquad does not update window config when it goes fullscreen
            set_fullscreen(!fullscreen);

            if fullscreen {
                miniquad::window::set_window_size(old_size.0 as u32, old_size.1 as u32);
            }

            fullscreen = !fullscreen;
        }

        if input.left_pressed {
            session.handle_left();
        }
        if input.right_pressed {
            session.handle_right();
        }
        if input.confirmation_detected {
            session.handle_confirm();
        }
        if input.cancel_requested {
            session.handle_cancel();
        }
        if let Some(point) = input.click {
            session.handle_click(point);
        }

        session.tick(dt);

        if session.exit_requested() {
            info!("Shutting down");
            break;
        }

        render.draw(&session);
        ui.draw(&session);

        debug.new_frame();
        debug.draw_input_debug(&input);
        debug.draw_session_debug(&session);
        debug.draw_events();

        next_frame().await
    }

    Ok(())
}
