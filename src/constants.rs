// Page selectors and class names the effect layer binds to.

// Readiness
pub const READY_CLASS: &str = "js-ready";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Hero
pub const HERO: &str = ".hero";
pub const HERO_CONTENT: &str = ".hero-content";
pub const HERO_TITLE: &str = ".hero-title";
pub const HERO_TAG: &str = ".hero-tag";
pub const HERO_DESCRIPTION: &str = ".hero-description";
pub const HERO_WORD_CLASS: &str = "hero-word";
pub const HERO_LETTER_CLASS: &str = "hero-letter";
pub const HERO_LETTERS: &str = ".hero-letter";
pub const HERO_WORD_GAP_EM: f32 = 0.25;
pub const ATMOSPHERE: &str = ".atmosphere";

// Pointer-reactive targets
pub const MAGNETIC_TARGETS: &str = ".calculate-btn, .cta-main, .btn-header";
pub const INTERACTIVE_TARGETS: &str = "a, button, .crop-item, .calculate-btn, .cta-main, .input-card";
pub const RIPPLE_CLASS: &str = "btn-ripple";

// Cursor follower
pub const CURSOR_CLASS: &str = "custom-cursor";
pub const CURSOR_INNER_HTML: &str = "<div class=\"cursor-dot\"></div><div class=\"cursor-ring\"></div>";
pub const CURSOR_HOVER_CLASS: &str = "hover";
pub const CURSOR_PRESSED_CLASS: &str = "clicking";

// Wheel surface and drag particles
pub const WHEEL_CONTAINER: &str = ".wheel-container";
pub const WHEEL_WRAPPER: &str = ".wheel-wrapper";
pub const PARTICLE_CLASS: &str = "drag-particle";

// Scroll-linked
pub const PROGRESS_CLASS: &str = "scroll-progress";
pub const PROGRESS_FILL_CLASS: &str = "scroll-progress-fill";
pub const PROGRESS_FILL: &str = ".scroll-progress-fill";
pub const REVEAL_SECTION: &str = ".cta-section";

// Sound + haptics
pub const HOVER_SOUND_TARGETS: &str = ".crop-item";
pub const CLICK_SOUND_TARGETS: &str = "button, .calculate-btn, .cta-main";
pub const TAP_HAPTIC_TARGETS: &str = ".crop-item";
pub const CONFIRM_HAPTIC_TARGET: &str = ".calculate-btn";

// JS globals
pub const ANIMATOR_GLOBAL: &str = "gsap";
pub const SCROLL_PLUGIN_GLOBAL: &str = "ScrollTrigger";
pub const SCROLLER_GLOBAL: &str = "Lenis";
