use std::time::Duration;

// Screen (world units are pixels of a 400x600 window)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Avatar
pub const AVATAR_X: f64 = 50.0;
pub const AVATAR_WIDTH: f64 = 40.0;
pub const AVATAR_HEIGHT: f64 = 30.0;

// Physics, calibrated to a 60 Hz tick
pub const GRAVITY: f64 = 0.5;
pub const FLAP_STRENGTH: f64 = -10.0;
pub const FLAP_COOLDOWN_TICKS: u32 = 10;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 70.0;
pub const OBSTACLE_GAP: f64 = 200.0;
pub const OBSTACLE_VELOCITY: f64 = -2.0;
pub const GAP_MARGIN_TOP: f64 = 100.0;
pub const GAP_MARGIN_BOTTOM: f64 = 100.0;
pub const SPAWN_THRESHOLD: f64 = 200.0;

// Restart button (game over screen), centred horizontally
pub const BUTTON_WIDTH: f64 = 200.0;
pub const BUTTON_HEIGHT: f64 = 50.0;
pub const BUTTON_OFFSET_Y: f64 = -50.0;

// Frame pacing
pub const TARGET_FPS: u32 = 60;
pub const FRAME_BUDGET: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FPS as u64);
