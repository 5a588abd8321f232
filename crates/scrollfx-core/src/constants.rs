//! Motion tuning constants.
//!
//! These numbers were tuned by eye against the rendered page. They have no
//! derivation beyond "this is how it should look", so keep them as named
//! values rather than re-deriving them.

// Smooth scroll
pub const SCROLL_SMOOTHING_FACTOR: f64 = 0.1; // fraction of the gap closed per tick
pub const SCROLL_SETTLE_EPSILON: f64 = 0.5; // px; below this the loop stops

// Intersection sampling
pub const INTERSECTION_THRESHOLD_STEPS: usize = 100; // 101 thresholds, 0.00..=1.00

// Long-scroll section geometry
pub const GEOMETRY_SPEEDUP: f32 = 1.3; // progress runs ahead of the physical scroll
pub const GEOMETRY_OVERSHOOT: f32 = 1.3; // reported once the section has fully passed

// Word reveal (diagonal cascade)
pub const WORD_DIAGONAL_SPREAD: f32 = 0.4;
pub const WORD_REVEAL_GAIN: f32 = 3.0;
pub const WORD_BLUR_MAX_PX: f32 = 12.0;
pub const WORD_OFFSET_MAX_PX: f32 = 30.0;

// Skill timeline
pub const SKILL_LEAD_IN: f32 = 0.18; // section fraction before the trigger point
pub const SKILL_ANIMATION_RANGE: f32 = 0.3;
pub const SKILL_EXPLOSION_START: f32 = 0.5; // exclusive
pub const SKILL_EXPLOSION_END: f32 = 0.7; // exclusive
pub const SKILL_FORMATION_START: f32 = 0.55;
pub const SKILL_FORMATION_OPACITY_GAIN: f32 = 2.2;
pub const SKILL_FORMATION_SCALE_GAIN: f32 = 1.6;
pub const SKILL_FORMATION_SCALE_BASE: f32 = 0.2;
pub const SKILL_CARD_OPACITY_GAIN: f32 = 1.2;
pub const SKILL_CARD_OFFSET_PX: f32 = 60.0;

// Rocket trail drawn along the skill section
pub const TRAIL_PATH_LENGTH: f32 = 3000.0;
pub const TRAIL_DRAW_RATIO: f32 = 0.67;

// Skill section backdrop and closing message
pub const BACKDROP_REVEAL_AT: f32 = 0.15;
pub const JOURNEY_END_AT: f32 = 0.88;
pub const JOURNEY_END_GAIN: f32 = 8.0;
pub const JOURNEY_END_OFFSET_PX: f32 = 50.0;

// Section entrances
pub const HERO_SCALE_BASE: f32 = 1.15;
pub const HERO_SCALE_SPAN: f32 = 0.1;
pub const HERO_COPY_OFFSET_PX: f32 = 50.0;
pub const HEADING_OFFSET_PX: f32 = 30.0;
pub const CONTACT_SCALE_SPAN: f32 = 0.1;
pub const CONTACT_COPY_OFFSET_PX: f32 = 50.0;

// Pointer parallax
pub const PORTRAIT_PARALLAX_PX: [f32; 2] = [5.0, 3.0];
pub const GLOW_CENTER_PERCENT: f32 = 50.0;

// Star field behind the skill section
pub const STAR_COUNT: usize = 80;
pub const STAR_SEED: u64 = 0x5EED_57A2;
