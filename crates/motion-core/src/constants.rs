// Shared motion/audio tuning constants used by the web frontend.

// Layout gating
pub const POINTER_MIN_VIEWPORT_WIDTH: f64 = 768.0; // cursor/tilt need a wider, pointer-capable layout

// Pointer-reactive effects
pub const MAGNETIC_STRENGTH: f32 = 0.3; // fraction of the pointer offset a button follows
pub const MAGNETIC_PULL_SEC: f64 = 0.3;
pub const MAGNETIC_RELEASE_SEC: f64 = 0.5;
pub const TILT_DIVISOR: f32 = 40.0; // px of pointer offset per degree of rotation
pub const TILT_PULL_SEC: f64 = 0.4;
pub const TILT_RELEASE_SEC: f64 = 0.6;
pub const TILT_PERSPECTIVE_PX: u32 = 1000;

// Ephemeral visuals
pub const RIPPLE_SIZE_PX: f64 = 20.0;
pub const RIPPLE_MAX_SCALE: f64 = 8.0;
pub const RIPPLE_DURATION_SEC: f64 = 0.6;
pub const PARTICLE_SIZE_PX: f64 = 8.0;
pub const PARTICLE_INTERVAL_MS: f64 = 50.0; // at most one drag particle per interval
pub const PARTICLE_SPREAD_PX: f64 = 30.0; // offsets drawn from [-spread, spread)
pub const PARTICLE_DURATION_SEC: f64 = 0.6;
pub const PULSE_GRACE_MS: f64 = 1000.0 / 60.0; // one rendering pulse at 60Hz

// Scroll-linked effects
pub const PROGRESS_SCRUB_SEC: f64 = 0.3;
pub const PARALLAX_Y_PERCENT: f64 = -20.0;
pub const PARALLAX_SCRUB_SEC: f64 = 1.0;
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.9; // section reveals once its top passes 90% of the viewport
pub const REVEAL_OFFSET_Y: f64 = 50.0;
pub const REVEAL_DURATION_SEC: f64 = 1.0;

// Startup
pub const READY_TIMEOUT_MS: u32 = 2000;

// Wheel surface
pub const WHEEL_PERSPECTIVE_PX: u32 = 1200;
pub const WHEEL_TILT_DEG: f64 = 10.0;

// Tone cues
pub const HOVER_FREQ_HZ: f32 = 800.0;
pub const HOVER_GAIN: f32 = 0.02;
pub const HOVER_DECAY_SEC: f64 = 0.08;
pub const CLICK_FREQ_HZ: f32 = 600.0;
pub const CLICK_GAIN: f32 = 0.04;
pub const CLICK_DECAY_SEC: f64 = 0.12;
pub const SUCCESS_FREQS_HZ: [f32; 4] = [523.0, 659.0, 784.0, 1047.0]; // C5 E5 G5 C6
pub const SUCCESS_GAIN: f32 = 0.06;
pub const SUCCESS_STEP_SEC: f64 = 0.08;
pub const SUCCESS_DECAY_SEC: f64 = 0.25;
pub const SUCCESS_STOP_SEC: f64 = 0.3;
pub const ENVELOPE_FLOOR: f32 = 0.001; // exponential ramps cannot reach zero

// Haptics (ms)
pub const HAPTIC_TAP_MS: u32 = 25;
pub const HAPTIC_CONFIRM_PATTERN_MS: [u32; 3] = [25, 40, 25];

// Hero entrances
pub const LETTER_RISE_PX: f64 = 50.0;
pub const LETTER_ROTATION_X_DEG: f64 = -60.0;
pub const LETTER_STAGGER_SEC: f64 = 0.02;
pub const LETTER_DURATION_SEC: f64 = 0.5;
pub const LETTER_OVERSHOOT: f32 = 1.5;
pub const LETTER_DELAY_SEC: f64 = 0.3;
pub const FADE_UP_PX: f64 = 30.0;
pub const FADE_UP_SEC: f64 = 0.8;
pub const TAG_DELAY_SEC: f64 = 0.1;
pub const DESCRIPTION_DELAY_SEC: f64 = 0.6;
