// Host-side tests for item tweening and re-targeting.

use carousel_core::{item_transform, Easing, ItemAnimator, Tween, SPACING_WIDE};
use std::time::Duration;

const HALF_SEC: Duration = Duration::from_millis(500);

#[test]
fn tween_reaches_target_at_duration() {
    let mut t = Tween::new(0.0_f32, 10.0, HALF_SEC, Easing::PowerInOut);
    assert_eq!(t.value(), 0.0);
    t.step(0.1);
    assert!(t.value() > 0.0 && t.value() < 10.0);
    t.step(0.4);
    assert!(t.is_finished());
    assert_eq!(t.value(), 10.0);
    // Stepping past the end stays put
    t.step(1.0);
    assert_eq!(t.value(), 10.0);
}

#[test]
fn retarget_mid_flight_starts_from_current_value() {
    let mut t = Tween::new(0.0_f32, 10.0, HALF_SEC, Easing::Linear);
    t.step(0.25);
    assert!((t.value() - 5.0).abs() < 1e-5);

    t.retarget(-10.0, HALF_SEC);
    // No jump: the new tween begins where the old one was
    assert!((t.value() - 5.0).abs() < 1e-5);
    assert_eq!(t.target(), -10.0);
    t.step(0.25);
    assert!((t.value() - (-2.5)).abs() < 1e-5);
    t.step(0.25);
    assert_eq!(t.value(), -10.0);
}

#[test]
fn animator_starts_at_rest() {
    let anim = ItemAnimator::new(5, 0, SPACING_WIDE, HALF_SEC);
    assert_eq!(anim.len(), 5);
    assert!(!anim.is_animating());
    let ts = anim.transforms();
    for (i, t) in ts.iter().enumerate() {
        assert_eq!(*t, item_transform(i, 0, SPACING_WIDE));
    }
}

#[test]
fn animator_retarget_moves_every_item() {
    let mut anim = ItemAnimator::new(5, 0, SPACING_WIDE, HALF_SEC);
    anim.retarget(1, SPACING_WIDE);
    assert!(anim.is_animating());

    anim.step(0.25);
    let mid = anim.transforms();
    // Item 1 is on its way to the centre
    assert!(mid[1].offset() > 0.0 && mid[1].offset() < SPACING_WIDE);

    anim.step(0.25);
    assert!(!anim.is_animating());
    for (i, t) in anim.transforms().iter().enumerate() {
        assert_eq!(*t, item_transform(i, 1, SPACING_WIDE));
    }
}

#[test]
fn rapid_retargets_overwrite_instead_of_queueing() {
    let mut anim = ItemAnimator::new(5, 0, SPACING_WIDE, HALF_SEC);
    anim.retarget(1, SPACING_WIDE);
    anim.step(0.1);
    anim.retarget(2, SPACING_WIDE);
    anim.step(0.1);
    anim.retarget(3, SPACING_WIDE);
    // One full duration after the last retarget everything has settled
    anim.step(0.5);
    assert!(!anim.is_animating());
    assert_eq!(anim.get(3).unwrap().current(), item_transform(3, 3, SPACING_WIDE));
}

#[test]
fn resize_keeps_survivors_and_adds_at_rest() {
    let mut anim = ItemAnimator::new(3, 0, SPACING_WIDE, HALF_SEC);
    anim.retarget(2, SPACING_WIDE);
    anim.step(0.1);
    let before = anim.get(1).unwrap().current();

    anim.resize(6, 2, SPACING_WIDE);
    assert_eq!(anim.len(), 6);
    assert_eq!(anim.get(1).unwrap().current(), before);
    let added = anim.get(5).unwrap();
    assert!(added.is_finished());
    assert_eq!(added.current(), item_transform(5, 2, SPACING_WIDE));

    anim.resize(2, 1, SPACING_WIDE);
    assert_eq!(anim.len(), 2);
    assert!(anim.get(2).is_none());
}
