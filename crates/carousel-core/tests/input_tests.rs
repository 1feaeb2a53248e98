// Host-side tests for pure input classification.

use carousel_core::{
    command_for_key, parse_count, swipe_command, wheel_command, Carousel, CarouselError,
    NavCommand, SwipeMode, TouchTracker,
};
use glam::Vec2;

#[test]
fn arrow_keys_map_to_navigation() {
    assert_eq!(command_for_key("ArrowRight"), Some(NavCommand::Advance));
    assert_eq!(command_for_key("ArrowLeft"), Some(NavCommand::Retreat));
    assert_eq!(command_for_key("ArrowUp"), None);
    assert_eq!(command_for_key("a"), None);
}

#[test]
fn wheel_prefers_vertical_delta() {
    assert_eq!(wheel_command(0.0, 12.0), Some(NavCommand::Advance));
    assert_eq!(wheel_command(0.0, -1.0), Some(NavCommand::Retreat));
    // Vertical sign wins over a conflicting horizontal delta
    assert_eq!(wheel_command(-30.0, 2.0), Some(NavCommand::Advance));
    // Horizontal only when there is no vertical motion
    assert_eq!(wheel_command(5.0, 0.0), Some(NavCommand::Advance));
    assert_eq!(wheel_command(-5.0, 0.0), Some(NavCommand::Retreat));
    assert_eq!(wheel_command(0.0, 0.0), None);
}

#[test]
fn horizontal_swipe_left_advances() {
    let mut c = Carousel::new(5);
    c.jump_to(2);
    let cmd = swipe_command(Vec2::new(300.0, 100.0), Vec2::new(120.0, 110.0), SwipeMode::Horizontal);
    assert_eq!(cmd, Some(NavCommand::Advance));
    c.apply(cmd.unwrap());
    assert_eq!(c.index(), 3);
}

#[test]
fn horizontal_swipe_ignores_vertical_travel() {
    let start = Vec2::new(100.0, 100.0);
    assert_eq!(
        swipe_command(start, Vec2::new(140.0, 400.0), SwipeMode::Horizontal),
        Some(NavCommand::Retreat)
    );
    assert_eq!(swipe_command(start, Vec2::new(100.0, 400.0), SwipeMode::Horizontal), None);
}

#[test]
fn dominant_axis_swipe() {
    let start = Vec2::new(100.0, 100.0);
    // Mostly horizontal, to the right -> retreat
    assert_eq!(
        swipe_command(start, Vec2::new(200.0, 120.0), SwipeMode::DominantAxis),
        Some(NavCommand::Retreat)
    );
    // Mostly vertical, upwards -> advance
    assert_eq!(
        swipe_command(start, Vec2::new(110.0, 20.0), SwipeMode::DominantAxis),
        Some(NavCommand::Advance)
    );
    assert_eq!(swipe_command(start, start, SwipeMode::DominantAxis), None);
}

#[test]
fn touch_tracker_needs_a_start() {
    let mut t = TouchTracker::default();
    assert_eq!(t.end(Vec2::new(10.0, 0.0), SwipeMode::Horizontal), None);

    t.begin(Vec2::new(200.0, 0.0));
    // touchmove does not overwrite a recorded start
    t.moved(Vec2::new(150.0, 0.0));
    assert_eq!(
        t.end(Vec2::new(180.0, 0.0), SwipeMode::Horizontal),
        Some(NavCommand::Advance)
    );
    assert!(!t.is_active());

    // A missed touchstart is seeded from the first move
    t.moved(Vec2::new(50.0, 0.0));
    assert_eq!(
        t.end(Vec2::new(90.0, 0.0), SwipeMode::Horizontal),
        Some(NavCommand::Retreat)
    );
}

#[test]
fn parse_count_accepts_range() {
    assert_eq!(parse_count("1"), Ok(1));
    assert_eq!(parse_count(" 42 "), Ok(42));
    assert_eq!(parse_count("100"), Ok(100));
}

#[test]
fn parse_count_rejects_garbage() {
    assert_eq!(parse_count(""), Err(CarouselError::InvalidCount(String::new())));
    assert!(matches!(parse_count("abc"), Err(CarouselError::InvalidCount(_))));
    assert!(matches!(parse_count("3.5"), Err(CarouselError::InvalidCount(_))));
    assert_eq!(parse_count("0"), Err(CarouselError::CountOutOfRange(0)));
    assert_eq!(parse_count("-3"), Err(CarouselError::CountOutOfRange(-3)));
    assert_eq!(parse_count("101"), Err(CarouselError::CountOutOfRange(101)));
}

#[test]
fn swipe_mode_parses() {
    assert_eq!(SwipeMode::parse("Horizontal"), Some(SwipeMode::Horizontal));
    assert_eq!(SwipeMode::parse("dominant-axis"), Some(SwipeMode::DominantAxis));
    assert_eq!(SwipeMode::parse("diagonal"), None);
}
