pub const WINDOW_WIDTH: i32 = 1280;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;            // Initial window height
pub const FPS: u32 = 60;                       // Target frames per second

pub const TRANSITION_DURATION: f32 = 1.5;      // Blend and scale tracks (seconds)
pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;    // Time between automatic advances
pub const DISPLACEMENT_INTENSITY: f32 = 0.3;   // UV displacement strength in the shader
pub const RESIZE_QUIET_PERIOD: f32 = 0.3;      // Quiet period before a relayout (seconds)

pub const PAGINATION_RADIUS: f32 = 6.0;        // Dot radius
pub const PAGINATION_HIT_RADIUS: f32 = 12.0;   // Clickable radius around a dot centre
pub const PAGINATION_SPACING: f32 = 24.0;      // Distance between dot centres
pub const PAGINATION_MARGIN: f32 = 32.0;       // Distance from the bottom edge

pub const ERROR_DISPLAY_SECONDS: u64 = 5;      // How long a startup error stays on screen
