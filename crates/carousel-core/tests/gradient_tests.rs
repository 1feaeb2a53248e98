// Host-side tests for the background gradient mapper.

use carousel_core::{background_css, BackgroundAnimator, GradientStops, Lerp};
use std::time::Duration;

#[test]
fn primary_hue_wraps_every_twelve_steps() {
    for i in 0..40 {
        let g = GradientStops::for_index(i);
        assert_eq!(g.primary, ((i * 30) % 360) as f32);
    }
    assert_eq!(GradientStops::for_index(12).primary, 0.0);
    assert_eq!(GradientStops::for_index(13).primary, 30.0);
}

#[test]
fn side_hues_are_unwrapped() {
    let g = GradientStops::for_index(0);
    assert_eq!(g.left, -60.0);
    assert_eq!(g.right, 60.0);

    let g = GradientStops::for_index(14);
    assert_eq!(g.left, 360.0);
    assert_eq!(g.centre, 420.0);
    assert_eq!(g.right, 480.0);
}

#[test]
fn css_matches_expected_format() {
    let css = background_css(1);
    assert_eq!(
        css,
        "linear-gradient(0deg, hsla(30, 100%, 85%, 0.5) 0%, hsla(30, 100%, 90%, 0.5) 50%, \
         hsla(30, 100%, 85%, 0.5) 100%), linear-gradient(90deg, hsl(-30, 100%, 85%) 0%, \
         hsl(30, 100%, 90%) 50%, hsl(90, 100%, 85%) 100%)"
    );
}

#[test]
fn stops_interpolate_componentwise() {
    let a = GradientStops::for_index(0);
    let b = GradientStops::for_index(2);
    let mid = GradientStops::lerp(a, b, 0.5);
    assert_eq!(mid, GradientStops::for_index(1));
}

#[test]
fn background_animator_settles_on_new_index() {
    let mut bg = BackgroundAnimator::new(0, Duration::from_millis(500));
    assert!(!bg.is_animating());
    bg.retarget(3);
    assert!(bg.is_animating());

    // Halfway: somewhere strictly between the two hues
    bg.step(0.25);
    let mid = bg.current();
    assert!(mid.primary > 0.0 && mid.primary < 90.0);

    bg.step(0.25);
    assert!(!bg.is_animating());
    assert_eq!(bg.css(), background_css(3));
}
