use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crate::constants::*;

/// Image carousel with autoplay, prev/next controls and indicator dots.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about)]
pub struct Args {
    /// Directory holding the slide images
    pub image_dir: PathBuf,

    /// Time between automatic advances, in milliseconds
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Shuffle the slide order once at startup
    #[arg(long)]
    pub shuffle: bool,

    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Enable the contact form (toggle with F2)
    #[arg(long)]
    pub contact_form: bool,
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
