//! Static page content consumed by the timelines.

use crate::error::Result;
use crate::timeline::TimelineItem;

pub const TAGLINE: &str = "As a digital designer, I build interactive, motion driven experiences \
that help brands connect, communicate, and stand out. My philosophy is rooted in curiosity, \
experimentation, and designing systems that feel alive in a fast moving world.";

// (label, description, pos, lateral x %)
const SKILLS: [(&str, &str, f32, f32); 6] = [
    ("Web Design", "Crafting beautiful, responsive interfaces", 10.0, 65.0),
    ("UI/UX Design", "User-centered experiences that convert", 25.0, 40.0),
    ("Animation", "Bringing designs to life with motion", 40.0, 60.0),
    ("Branding", "Creating memorable brand identities", 55.0, 45.0),
    ("Art Direction", "Leading creative vision & strategy", 70.0, 50.0),
    ("Development", "Building scalable web applications", 85.0, 46.0),
];

pub fn tagline_words() -> Vec<&'static str> {
    TAGLINE.split(' ').collect()
}

/// The skills timeline, in trigger order.
pub fn skill_timeline() -> Result<Vec<TimelineItem>> {
    SKILLS
        .iter()
        .map(|&(label, desc, pos, x)| TimelineItem::new(label, desc, pos, x))
        .collect()
}
