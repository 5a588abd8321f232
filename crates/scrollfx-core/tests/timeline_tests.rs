// Pure progress-to-visual-state mappers.

use glam::Vec2;
use scrollfx_core::timeline::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn item_at(pos: f32) -> TimelineItem {
    TimelineItem::new("Item", "desc", pos, 50.0).unwrap()
}

#[test]
fn first_word_is_fully_revealed_at_a_third() {
    assert!(word_reveal_amount(0, 20, 1.0 / 3.0) > 0.999);
    assert_eq!(word_reveal_amount(0, 20, 0.34), 1.0);
    assert!(word_reveal_amount(0, 20, 0.2) < 1.0);
}

#[test]
fn later_words_never_lead_earlier_ones() {
    let total = 36;
    for step in 0..=100 {
        let p = step as f32 / 100.0;
        let first = word_reveal_amount(0, total, p);
        let last = word_reveal_amount(total - 1, total, p);
        assert!(last <= first, "p = {}", p);
        for i in 1..total {
            assert!(word_reveal_amount(i, total, p) <= word_reveal_amount(i - 1, total, p));
        }
    }
    // The last word needs most of the section.
    assert_eq!(word_reveal_amount(total - 1, total, 0.3), 0.0);
    assert_eq!(word_reveal_amount(total - 1, total, 0.8), 1.0);
}

#[test]
fn hidden_word_is_blurred_and_offset_down_left() {
    let s = word_reveal(5, 10, 0.0);
    assert!(!s.visible);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.blur_px, 12.0);
    assert_eq!(s.translate, Vec2::new(-30.0, 30.0));
    assert!(!s.explosion_active);

    let s = word_reveal(0, 10, 1.0);
    assert!(s.visible);
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.blur_px, 0.0);
    assert_eq!(s.translate, Vec2::ZERO);
}

#[test]
fn word_reveal_tolerates_empty_and_overshooting_input() {
    assert_eq!(word_reveal_amount(0, 0, 0.5), 1.0);
    assert_eq!(word_reveal_amount(9, 10, 1.3), 1.0);
    assert_eq!(word_reveal_amount(0, 10, -0.5), 0.0);
}

#[test]
fn skill_at_fifty_appears_eighteen_percent_early() {
    let item = item_at(50.0);
    assert!(!skill_state(&item, 0, 0.0).card.visible);
    assert!(!skill_state(&item, 0, 0.31).card.visible);
    assert_eq!(skill_state(&item, 0, 0.31).card, VisualState::HIDDEN);

    // Exactly at the lead-in boundary the card is shown, at zero progress.
    let s = skill_state(&item, 0, 0.32);
    assert!(s.card.visible);
    assert!(approx(s.raw_progress, 0.0), "raw = {}", s.raw_progress);
    assert!(approx(s.progress, 0.0));

    let s = skill_state(&item, 0, 0.3201);
    assert!(s.card.visible);
    assert!(s.progress < 0.01);
}

#[test]
fn skill_at_fifty_completes_at_sixty_two_percent() {
    let item = item_at(50.0);
    let s = skill_state(&item, 0, 0.62);
    assert!(approx(s.raw_progress, 1.0), "raw = {}", s.raw_progress);
    assert!(approx(s.progress, 1.0));
    assert!(s.card.visible);
    assert!(approx(skill_raw_progress(&item, 0.62), 1.0));
    let s = skill_state(&item, 0, 0.7);
    assert_eq!(s.progress, 1.0);
    assert_eq!(s.card.opacity, 1.0);
}

#[test]
fn explosion_only_in_the_middle_window() {
    let item = item_at(50.0);
    // rawProgress in (0.5, 0.7) <=> p in (0.47, 0.53)
    assert!(!skill_state(&item, 0, 0.40).card.explosion_active);
    assert!(!skill_state(&item, 0, 0.46).card.explosion_active);
    assert!(skill_state(&item, 0, 0.48).card.explosion_active);
    assert!(skill_state(&item, 0, 0.50).card.explosion_active);
    assert!(skill_state(&item, 0, 0.52).card.explosion_active);
    assert!(!skill_state(&item, 0, 0.54).card.explosion_active);
    assert!(!skill_state(&item, 0, 1.3).card.explosion_active);
}

#[test]
fn formation_follows_the_explosion() {
    let item = item_at(50.0);
    // raw = 0.5
    assert!(skill_state(&item, 0, 0.47).formation.is_none());
    let f = skill_state(&item, 0, 0.7).formation.unwrap();
    assert!(approx(f.opacity, 0.99));
    assert!(approx(f.scale, 0.92));
    let f = skill_state(&item, 0, 0.5).formation.unwrap();
    // raw = 0.6
    assert!(approx(f.opacity, 0.11));
    assert!(approx(f.scale, 0.28));
}

#[test]
fn cards_slide_in_from_their_side() {
    let item = item_at(50.0);
    let left = skill_state(&item, 0, 0.3201).card;
    let right = skill_state(&item, 1, 0.3201).card;
    assert!(left.translate.x > 59.0);
    assert!(right.translate.x < -59.0);
    assert_eq!(skill_state(&item, 0, 0.9).card.translate, Vec2::ZERO);
    assert!(is_left(2) && !is_left(3));
}

#[test]
fn skill_states_hold_at_overshoot() {
    let item = item_at(85.0);
    let s = skill_state(&item, 5, 1.3);
    assert!(s.card.visible);
    assert_eq!(s.progress, 1.0);
    assert!(s.raw_progress > 1.0);
    assert_eq!(s.card.opacity, 1.0);
    assert!(s.formation.is_some());
}

#[test]
fn timeline_item_rejects_out_of_range_positions() {
    assert!(TimelineItem::new("x", "", 101.0, 50.0).is_err());
    assert!(TimelineItem::new("x", "", -1.0, 50.0).is_err());
    assert!(TimelineItem::new("x", "", f32::NAN, 50.0).is_err());
    assert_eq!(item_at(40.0).trigger(), 0.4);
}

#[test]
fn entrances_clamp_their_input() {
    let e = hero_backdrop(0.5);
    assert_eq!(e.opacity, 0.5);
    assert!(approx(e.scale, 1.2));
    assert_eq!(hero_backdrop(1.3), hero_backdrop(1.0));

    assert_eq!(hero_copy(0.0).translate, Vec2::new(50.0, 0.0));
    assert_eq!(intro_heading(0.0).translate, Vec2::new(0.0, 30.0));
    assert_eq!(intro_heading(1.0).translate, Vec2::ZERO);

    let c = contact_backdrop(0.0);
    assert_eq!(c.opacity, 0.0);
    assert!(approx(c.scale, 1.1));
    assert_eq!(contact_copy(0.5).translate, Vec2::new(0.0, 25.0));
}

#[test]
fn trail_and_closing_message() {
    assert_eq!(path_draw(0.5, 2000.0), 1000.0);
    assert_eq!(path_draw(1.3, 2000.0), 2000.0);

    // 3000 - 0.18 * 3000 * 0.67
    assert!((trail_dash_offset(0.0) - 2638.2).abs() < 0.01);
    assert!(trail_dash_offset(1.0) < trail_dash_offset(0.5));
    assert!(trail_dash_offset(5.0) >= 0.0);
    // The dash covers the whole path: before the lead-in nothing is drawn.
    assert_eq!(trail_dash_offset(-1.0), trail_dash_array());
    for step in -20..=150 {
        let p = step as f32 / 100.0;
        assert!(trail_dash_offset(p) <= trail_dash_array(), "p = {}", p);
    }

    assert!(!backdrop_visible(0.15));
    assert!(backdrop_visible(0.16));

    let end = journey_end(0.88);
    assert_eq!(end.opacity, 0.0);
    assert_eq!(end.translate, Vec2::new(0.0, 50.0));
    assert!(approx(journey_end(0.94).opacity, 0.48));
    let end = journey_end(1.3);
    assert_eq!(end.opacity, 1.0);
    assert_eq!(end.translate, Vec2::ZERO);
}
