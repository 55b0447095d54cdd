use std::time::Duration;

use clap::Parser;

use crate::constants::*;
use crate::engine::LoadOptions;
use crate::fit::Size;
use crate::slider::SliderConfig;

#[derive(Parser, Debug)]
#[command(
    name = "shader-slider",
    version,
    about = "Image slider with shader-driven displacement transitions"
)]
pub struct Cli {
    /// Image files, or directories of images
    #[arg(value_name = "IMAGES")]
    pub images: Vec<String>,

    /// Do not advance automatically.
    #[arg(long)]
    pub no_auto: bool,

    /// Autoplay interval in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = AUTOPLAY_INTERVAL_MS)]
    pub interval: u64,

    /// Transition duration in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = TRANSITION_DURATION)]
    pub duration: f32,

    /// Strength of the displacement effect.
    #[arg(long, default_value_t = DISPLACEMENT_INTENSITY)]
    pub intensity: f32,

    /// Shuffle the images before showing them.
    #[arg(long)]
    pub shuffle: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

impl Cli {
    pub fn slider_config(&self, container: Option<Size>) -> SliderConfig {
        SliderConfig {
            container,
            urls: self.images.clone(),
            auto: !self.no_auto,
            interval: Duration::from_millis(self.interval),
            duration: self.duration,
            intensity: self.intensity,
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            shuffle: self.shuffle,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
