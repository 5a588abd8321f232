// DOM hooks the page markup exposes to the motion layer.
//
// Sections carry `data-section="<name>"`; animated elements carry
// `data-fx="<role>"`. Everything else on the page is static.

pub const SECTION_ATTR: &str = "data-section";
pub const FX_ATTR: &str = "data-fx";
pub const WORD_ATTR: &str = "data-word";
pub const SKILL_ATTR: &str = "data-skill";

// Hero
pub const FX_HERO_BACKDROP: &str = "hero-backdrop";
pub const FX_HERO_COPY: &str = "hero-copy";
pub const FX_PORTRAIT: &str = "portrait";
pub const FX_GLOW: &str = "glow";
pub const FX_AURORA: &str = "aurora";

// Intro
pub const FX_INTRO_HEADING: &str = "intro-heading";
pub const FX_TAGLINE: &str = "tagline";

// Skills
pub const FX_SPACE: &str = "space";
pub const FX_TRAIL: &str = "trail";
pub const FX_SKILLS: &str = "skills";
pub const FX_SKILL_CARD: &str = "skill-card";
pub const FX_SKILL_STAR: &str = "skill-star";
pub const FX_SKILL_BURST: &str = "skill-burst";
pub const FX_JOURNEY_END: &str = "journey-end";

// Contact
pub const FX_CONTACT_BACKDROP: &str = "contact-backdrop";
pub const FX_CONTACT_COPY: &str = "contact-copy";

pub const ALL_FX: [&str; 16] = [
    FX_HERO_BACKDROP,
    FX_HERO_COPY,
    FX_PORTRAIT,
    FX_GLOW,
    FX_AURORA,
    FX_INTRO_HEADING,
    FX_TAGLINE,
    FX_SPACE,
    FX_TRAIL,
    FX_SKILLS,
    FX_SKILL_CARD,
    FX_SKILL_STAR,
    FX_SKILL_BURST,
    FX_JOURNEY_END,
    FX_CONTACT_BACKDROP,
    FX_CONTACT_COPY,
];

// Classes toggled for CSS keyframe animations
pub const EXPLODING_CLASS: &str = "is-exploding";
pub const STAR_CLASS: &str = "star";
pub const WORD_CLASS: &str = "word";

// SVG presentation attributes of the rocket trail path
pub const TRAIL_DASHARRAY_ATTR: &str = "stroke-dasharray";
pub const TRAIL_DASHOFFSET_ATTR: &str = "stroke-dashoffset";

// Custom property carrying the smoothed scroll offset (px)
pub const SCROLL_VAR: &str = "--scroll-smooth";

// Aurora mask radius (CSS px)
pub const AURORA_MASK_RADIUS_PX: f32 = 400.0;

// Backdrop stacking while hidden/shown
pub const SPACE_Z_SHOWN: i32 = 1;
pub const SPACE_Z_HIDDEN: i32 = -10;
