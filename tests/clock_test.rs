use std::{thread, time::Duration};

use lightbox::clock::FrameClock;

#[test]
fn elapsed_time_only_grows() {
    let mut clock = FrameClock::new(Duration::from_secs(5));
    let first = clock.tick();
    thread::sleep(Duration::from_millis(2));
    let second = clock.tick();
    assert!(first >= 0.0);
    assert!(second > first);
}

#[test]
fn fps_is_reported_once_per_interval() {
    let mut clock = FrameClock::new(Duration::from_millis(5));
    clock.tick();
    assert_eq!(clock.average_fps(), None);

    thread::sleep(Duration::from_millis(10));
    clock.tick();
    let fps = clock.average_fps().expect("interval has passed");
    assert!(fps > 0.0);
    // the report restarts the window
    assert_eq!(clock.average_fps(), None);
}
