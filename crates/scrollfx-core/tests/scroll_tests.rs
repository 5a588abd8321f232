// Exponential smoothing and the self-terminating scroll loop.

use scrollfx_core::{Interpolator, MotionConfig, ScrollSmoother, Tick};

#[test]
fn lerp_closes_a_fixed_fraction_of_the_gap() {
    let i = Interpolator::new(0.1, 0.5);
    assert_eq!(i.step(0.0, 100.0), 10.0);
    assert_eq!(i.step(90.0, 100.0), 91.0);
    assert_eq!(i.step(100.0, 0.0), 90.0);
}

#[test]
fn interpolation_converges_monotonically_without_overshoot() {
    for &factor in &[0.05_f64, 0.1, 0.5, 0.9] {
        for &(start, target) in &[(0.0_f64, 1000.0_f64), (5000.0, -20.0), (3.0, 3.4)] {
            let i = Interpolator::new(factor, 0.5);
            let mut current = start;
            let mut gap = (target - current).abs();
            let mut steps = 0;
            while !i.is_settled(current, target) {
                current = i.step(current, target);
                let next_gap = (target - current).abs();
                assert!(next_gap < gap, "gap grew for factor {}", factor);
                // Never crosses the target.
                assert_eq!((target - start).signum(), (target - current).signum());
                gap = next_gap;
                steps += 1;
                assert!(steps < 10_000);
            }
            assert_eq!(steps, i.steps_to_settle(start, target));
        }
    }
}

#[test]
fn default_factor_settles_a_long_jump_in_under_a_hundred_steps() {
    let i = Interpolator::new(0.1, 0.5);
    let steps = i.steps_to_settle(0.0, 1000.0);
    // ln(0.5 / 1000) / ln(0.9) ~ 72.1
    assert!((72..=74).contains(&steps), "steps = {}", steps);
}

#[test]
fn smoother_with_nothing_to_scroll_stops_after_first_tick() {
    let mut s = ScrollSmoother::new(0.0, &MotionConfig::default());
    assert!(s.start());
    assert_eq!(s.tick(), Tick::Settled);
    assert!(!s.is_pending());
    assert_eq!(s.state().current, 0.0);
}

#[test]
fn smoother_keeps_a_single_outstanding_request() {
    let mut s = ScrollSmoother::new(0.0, &MotionConfig::default());
    assert!(s.start());
    assert!(!s.start());
    assert!(!s.on_raw_scroll(100.0));
    assert_eq!(s.tick(), Tick::Continue);
    assert!(s.is_pending());
    // Already pending: a new scroll must not schedule twice.
    assert!(!s.on_raw_scroll(300.0));
}

#[test]
fn smoother_restarts_after_settling() {
    let mut s = ScrollSmoother::new(0.0, &MotionConfig::default());
    s.start();
    assert_eq!(s.tick(), Tick::Settled);

    assert!(s.on_raw_scroll(400.0));
    let mut frames = 0;
    while s.tick() == Tick::Continue {
        frames += 1;
        assert!(frames < 1000);
    }
    let st = s.state();
    assert_eq!(st.target, 400.0);
    assert!((st.target - st.current).abs() <= 0.5);
    assert!(!s.is_pending());
}

#[test]
fn smoother_accepts_offsets_past_document_bounds() {
    let mut s = ScrollSmoother::new(10.0, &MotionConfig::default());
    s.on_raw_scroll(-40.0);
    assert_eq!(s.state().target, -40.0);
    s.tick();
    assert_eq!(s.state().current, 5.0);
}

#[test]
fn cancel_clears_the_pending_request() {
    let mut s = ScrollSmoother::new(0.0, &MotionConfig::default());
    s.on_raw_scroll(50.0);
    s.cancel();
    assert!(!s.is_pending());
    assert!(s.on_raw_scroll(60.0));
}

#[test]
fn smoother_settles_on_very_large_offsets() {
    for &target in &[5_000_000.0_f64, -5_000_000.0, 1.0e12, 1.0e300] {
        let mut s = ScrollSmoother::new(0.0, &MotionConfig::default());
        s.on_raw_scroll(target);
        let mut frames = 0;
        while s.tick() == Tick::Continue {
            frames += 1;
            assert!(frames < 10_000, "no settle for target {}", target);
        }
        assert!(!s.is_pending());
    }

    let mut s = ScrollSmoother::new(0.0, &MotionConfig::default());
    s.on_raw_scroll(5_000_000.0);
    while s.tick() == Tick::Continue {}
    let st = s.state();
    assert!((st.target - st.current).abs() <= 0.5, "{:?}", st);
}

#[test]
fn step_that_cannot_move_counts_as_settled() {
    // At this magnitude a tenth of the gap is below one ulp.
    let i = Interpolator::new(0.1, 0.5);
    let current = 1.0e17_f64;
    let target = current + 32.0;
    assert_eq!(i.step(current, target), current);
    assert!(i.has_converged(current, i.step(current, target), target));
    assert_eq!(i.steps_to_settle(current, target), 1);
    assert!(i.steps_to_settle(0.0, f64::INFINITY) < 10);
}
