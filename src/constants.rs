pub const RENDER_WIDTH: i32 = 1920;           // Reference render width
pub const RENDER_HEIGHT: i32 = 1080;          // Reference render height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;   // Time between automatic advances (milliseconds)
pub const FADE_DURATION: f32 = 0.5;           // Cross-fade between slides (seconds)
pub const TOAST_DURATION: f32 = 3.0;          // How long an acknowledgment stays on screen (seconds)
pub const FIT_RATIO: f32 = 0.9;               // Largest share of the screen a slide may cover

pub const INDICATOR_RADIUS: f32 = 8.0;        // Dot radius (pixels)
pub const INDICATOR_HIT_SLOP: f32 = 4.0;      // Extra click tolerance around a dot (pixels)
pub const INDICATOR_SPACING: f32 = 28.0;      // Distance between dot centers (pixels)
pub const INDICATOR_MARGIN: f32 = 32.0;       // Dot row distance from the bottom edge (pixels)

pub const CONTROL_WIDTH: f32 = 64.0;          // Prev/next control width (pixels)
pub const CONTROL_HEIGHT: f32 = 120.0;        // Prev/next control height (pixels)
