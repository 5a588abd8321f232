use scrollfx_core::constants::{STAR_COUNT, STAR_SEED};
use scrollfx_core::content::{skill_timeline, tagline_words};
use scrollfx_core::starfield;
use scrollfx_core::{CoreError, MotionConfig};

#[test]
fn skill_timeline_is_valid_and_ordered() {
    let items = skill_timeline().unwrap();
    assert_eq!(items.len(), 6);
    assert!(items.windows(2).all(|w| w[0].pos < w[1].pos));
    assert_eq!(items[0].label, "Web Design");
    assert_eq!(items[5].pos, 85.0);
}

#[test]
fn tagline_splits_on_spaces() {
    let words = tagline_words();
    assert_eq!(words.first(), Some(&"As"));
    assert_eq!(words.last(), Some(&"world."));
    assert!(words.iter().all(|w| !w.is_empty()));
}

#[test]
fn starfield_is_reproducible_and_in_range() {
    let a = starfield::generate(STAR_COUNT, STAR_SEED);
    let b = starfield::generate(STAR_COUNT, STAR_SEED);
    assert_eq!(a, b);
    assert_eq!(a.len(), 80);
    for s in &a {
        assert!((1.0..=3.0).contains(&s.width_px));
        assert!((1.0..=3.0).contains(&s.height_px));
        assert!((0.0..=100.0).contains(&s.top_percent));
        assert!((0.0..=100.0).contains(&s.left_percent));
        assert!((0.0..=3.0).contains(&s.delay_sec));
        assert!((2.0..=4.0).contains(&s.duration_sec));
        assert!((0.2..=1.0).contains(&s.opacity));
    }
    assert_ne!(a, starfield::generate(STAR_COUNT, STAR_SEED + 1));
}

#[test]
fn default_config_validates() {
    assert_eq!(MotionConfig::default().validate(), Ok(()));
}

#[test]
fn config_validation_names_the_bad_field() {
    let bad = |f: fn(&mut MotionConfig)| {
        let mut c = MotionConfig::default();
        f(&mut c);
        c.validate().unwrap_err()
    };
    assert_eq!(
        bad(|c| c.smoothing_factor = 0.0),
        CoreError::SmoothingFactor(0.0)
    );
    assert_eq!(bad(|c| c.settle_epsilon = -1.0), CoreError::SettleEpsilon(-1.0));
    assert_eq!(bad(|c| c.threshold_steps = 0), CoreError::ThresholdSteps);
    assert_eq!(bad(|c| c.geometry_speedup = 0.0), CoreError::Speedup(0.0));
    assert_eq!(bad(|c| c.geometry_overshoot = 0.9), CoreError::Overshoot(0.9));
}
