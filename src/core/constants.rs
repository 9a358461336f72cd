// World geometry (pixels; y grows downward)
pub const WORLD_WIDTH: f64 = 960.0;
pub const WORLD_HEIGHT: f64 = 360.0;
pub const GROUND_Y: f64 = 280.0;

// Player silhouette
pub const PLAYER_X: f64 = 72.0;
pub const PLAYER_RUN_WIDTH: f64 = 44.0;
pub const PLAYER_RUN_HEIGHT: f64 = 47.0;
pub const PLAYER_DUCK_WIDTH: f64 = 59.0;
pub const PLAYER_DUCK_HEIGHT: f64 = 30.0;

// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS fixed step
pub const MAX_FRAME_DELTA_MS: u64 = 100;
pub const FRAME_DT_SECONDS: f64 = FRAME_MS as f64 / 1000.0;

// Scoring
pub const MILESTONE_INTERVAL: u32 = 100;
pub const MILESTONE_FLASH_SECONDS: f64 = 0.75;

// Pterodactyl flight bands (bottom edge of the bird). The low band sits
// between a ducking and a standing head; the high band clears a standing one.
pub const PTERODACTYL_LOW_BOTTOM: f64 = GROUND_Y - 34.0;
pub const PTERODACTYL_HIGH_BOTTOM: f64 = GROUND_Y - 90.0;
pub const PTERODACTYL_FLAP_SECONDS: f64 = 0.18;

// Scenery
pub const CLOUD_COUNT: usize = 3;
pub const CLOUD_SPEED: f64 = 60.0;
pub const CLOUD_Y_RANGE: (f64, f64) = (40.0, 140.0);

// Input
/// Duck hold after the initial Down press. Covers the keyboard's
/// auto-repeat delay (660 ms on X11 defaults).
pub const DUCK_FIRST_LATCH_MS: u64 = 750;
/// Duck hold refreshed by each auto-repeat.
pub const DUCK_LATCH_MS: u64 = 550;
