use glam::Vec2;
use scrollfx_core::{PointerState, PointerTracker};

#[test]
fn centre_maps_to_origin() {
    let mut p = PointerTracker::new();
    assert!(p.on_pointer_move(500.0, 400.0, 1000.0, 800.0));
    assert_eq!(p.state(), PointerState(Vec2::ZERO));
}

#[test]
fn edges_map_to_unit_bounds() {
    let mut p = PointerTracker::new();
    p.on_pointer_move(0.0, 0.0, 1000.0, 800.0);
    assert_eq!(p.state().x(), -1.0);
    assert_eq!(p.state().y(), -1.0);

    p.on_pointer_move(1000.0, 800.0, 1000.0, 800.0);
    assert_eq!(p.state().x(), 1.0);
    assert_eq!(p.state().y(), 1.0);

    p.on_pointer_move(250.0, 600.0, 1000.0, 800.0);
    assert_eq!(p.state().x(), -0.5);
    assert_eq!(p.state().y(), 0.5);
}

#[test]
fn zero_sized_viewport_keeps_previous_position() {
    let mut p = PointerTracker::new();
    p.on_pointer_move(750.0, 200.0, 1000.0, 800.0);
    let before = p.state();

    assert!(!p.on_pointer_move(10.0, 10.0, 0.0, 800.0));
    assert!(!p.on_pointer_move(10.0, 10.0, 1000.0, 0.0));
    assert_eq!(p.state(), before);
}

#[test]
fn parallax_outputs_follow_the_pointer() {
    let s = PointerState(Vec2::new(1.0, -0.5));
    assert_eq!(s.portrait_offset(), Vec2::new(5.0, -1.5));
    assert_eq!(s.glow_center_percent(), Vec2::new(51.0, 49.5));
    assert_eq!(PointerState::default().portrait_offset(), Vec2::ZERO);
}
