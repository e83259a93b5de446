//! Runtime tuning for the effect layer.
//!
//! Defaults mirror [`crate::constants`]; the web frontend uses
//! `MotionConfig::default()` and tests override individual fields.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub pointer_min_viewport_width: f64,
    pub magnetic_strength: f32,
    pub tilt_divisor: f32,
    pub particle_interval_ms: f64,
    pub particle_spread_px: f64,
    pub ready_timeout_ms: u32,
    pub reveal_viewport_fraction: f64,
    pub progress_scrub_sec: f64,
    pub parallax_scrub_sec: f64,
    /// Seed for the particle offset generator.
    pub seed: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            pointer_min_viewport_width: POINTER_MIN_VIEWPORT_WIDTH,
            magnetic_strength: MAGNETIC_STRENGTH,
            tilt_divisor: TILT_DIVISOR,
            particle_interval_ms: PARTICLE_INTERVAL_MS,
            particle_spread_px: PARTICLE_SPREAD_PX,
            ready_timeout_ms: READY_TIMEOUT_MS,
            reveal_viewport_fraction: REVEAL_VIEWPORT_FRACTION,
            progress_scrub_sec: PROGRESS_SCRUB_SEC,
            parallax_scrub_sec: PARALLAX_SCRUB_SEC,
            seed: 0x5EED_CAFE,
        }
    }
}

impl MotionConfig {
    /// Cursor follower and tilt only run on layouts wider than the threshold.
    #[inline]
    pub fn pointer_effects_enabled(&self, viewport_width: f64) -> bool {
        viewport_width > self.pointer_min_viewport_width
    }
}
