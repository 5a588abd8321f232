use rand::prelude::*;

/// One twinkling star of the skills backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub width_px: f32,
    pub height_px: f32,
    pub top_percent: f32,
    pub left_percent: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub opacity: f32,
}

/// Generate `count` stars from `seed`. The same seed always gives the same
/// sky, so the backdrop does not reshuffle between renders.
pub fn generate(count: usize, seed: u64) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Star {
            width_px: 1.0 + rng.gen::<f32>() * 2.0,
            height_px: 1.0 + rng.gen::<f32>() * 2.0,
            top_percent: rng.gen::<f32>() * 100.0,
            left_percent: rng.gen::<f32>() * 100.0,
            delay_sec: rng.gen::<f32>() * 3.0,
            duration_sec: 2.0 + rng.gen::<f32>() * 2.0,
            opacity: 0.2 + rng.gen::<f32>() * 0.8,
        })
        .collect()
}
