// Host-side tests for the wheel debouncer.

use carousel_core::{wheel_command, Carousel, Debouncer, NavCommand, WHEEL_DEBOUNCE_MS};

#[test]
fn burst_yields_single_step_with_last_direction() {
    let mut d = Debouncer::new(WHEEL_DEBOUNCE_MS);
    let mut c = Carousel::new(10);
    c.jump_to(5);

    // Ten wheel events 10ms apart, the last one scrolling back
    let mut now = 0.0;
    for i in 0..10 {
        let dy = if i == 9 { -3.0 } else { 4.0 };
        if let Some(cmd) = wheel_command(0.0, dy) {
            d.trigger(now, cmd);
        }
        // Nothing fires while the burst is still going
        assert_eq!(d.poll(now), None);
        now += 10.0;
    }

    let mut fired = 0;
    while now < 500.0 {
        if let Some(cmd) = d.poll(now) {
            c.apply(cmd);
            fired += 1;
        }
        now += 16.0;
    }
    assert_eq!(fired, 1);
    assert_eq!(c.index(), 4);
}

#[test]
fn fires_exactly_at_deadline() {
    let mut d = Debouncer::new(50.0);
    d.trigger(100.0, NavCommand::Advance);
    assert_eq!(d.deadline(), Some(150.0));
    assert_eq!(d.poll(149.9), None);
    assert_eq!(d.poll(150.0), Some(NavCommand::Advance));
    assert!(!d.is_pending());
    assert_eq!(d.poll(200.0), None);
}

#[test]
fn retrigger_restarts_the_window() {
    let mut d = Debouncer::new(50.0);
    d.trigger(0.0, 1);
    d.trigger(40.0, 2);
    // Original deadline passed but the timer was reset
    assert_eq!(d.poll(60.0), None);
    assert_eq!(d.poll(90.0), Some(2));
}

#[test]
fn separated_events_fire_separately() {
    let mut d = Debouncer::new(50.0);
    d.trigger(0.0, "a");
    assert_eq!(d.poll(60.0), Some("a"));
    d.trigger(100.0, "b");
    assert_eq!(d.poll(160.0), Some("b"));
}

#[test]
fn cancel_drops_pending_value() {
    let mut d = Debouncer::new(50.0);
    d.trigger(0.0, ());
    d.cancel();
    assert_eq!(d.poll(1000.0), None);
}
