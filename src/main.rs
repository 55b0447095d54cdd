use std::time::Duration;

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod autoplay;
mod cli;
mod constants;
mod debounce;
mod engine;
mod error;
mod fit;
mod loader;
mod pagination;
mod shader;
mod slide;
mod slider;
mod state;
mod texture_loader;
mod transition;

use crate::constants::*;
use crate::engine::{Engine, LoadOptions, ShaderSliderEngine};
use crate::fit::Size;

fn main() -> Result<()> {
    let cli = cli::parse();
    initialise_tracing();

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Shader Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let container = Size::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    let config = cli.slider_config(Some(container));

    run::<ShaderSliderEngine>(&mut rl, &thread, config, cli.load_options())
}

fn run<E: Engine>(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: slider::SliderConfig,
    options: LoadOptions,
) -> Result<()> {
    let mut engine = match E::initialize(rl, thread, config, options) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "slider failed to start");
            show_error(rl, thread, &e.to_string());
            return Err(e).context("failed to initialise the slider");
        }
    };

    info!("render loop started");
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        if !engine.render_frame(dt, rl, thread) {
            break;
        }
    }

    engine.teardown();
    info!("render loop stopped");
    Ok(())
}

fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(&format!("Error: {message}"), 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(ERROR_DISPLAY_SECONDS));
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
