// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle tests driven with synthetic instants.
//!
//! No test here sleeps: the engine takes explicit `now` values, so every
//! timing property is exercised deterministically.

use iced_toast::config::defaults;
use iced_toast::{Phase, ToastManager, ToastOptions};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

const EXIT_MS: u64 = defaults::EXIT_TRANSITION_MS;

#[test]
fn toast_is_removed_within_duration_plus_exit_transition() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    manager.create_at(base, "hello", ToastOptions::default().with_duration(ms(1000)));

    // Drive the engine at a coarse cadence; the toast must be gone no
    // later than duration + exit transition + one tick of tolerance.
    let mut now = base;
    let deadline = base + ms(1000 + EXIT_MS + 100);
    while now < deadline {
        now += ms(50);
        manager.tick(now);
    }
    assert!(manager.is_empty());
}

#[test]
fn time_to_expiry_grows_by_exactly_the_paused_intervals() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    let id = manager.create_at(base, "hold", ToastOptions::default().with_duration(ms(1000)));

    // Two hover cycles: 500ms and 250ms of paused time.
    manager.tick(base + ms(100));
    manager.hover_enter_at(id, base + ms(100));
    manager.hover_leave_at(id, base + ms(600));
    manager.hover_enter_at(id, base + ms(700));
    manager.hover_leave_at(id, base + ms(950));

    // Expiry shifts from 1000 to 1750.
    manager.tick(base + ms(1749));
    assert_eq!(manager.snapshots(base + ms(1749))[0].phase, Phase::Visible);
    manager.tick(base + ms(1750));
    assert_eq!(manager.snapshots(base + ms(1750))[0].phase, Phase::Exiting);
}

#[test]
fn double_dismiss_equals_single_dismiss() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    let id = manager.create_at(base, "once", ToastOptions::default());

    manager.dismiss_at(id, base + ms(100));
    manager.dismiss_at(id, base + ms(150));

    // The exit transition still completes at its original schedule.
    manager.tick(base + ms(100 + EXIT_MS - 1));
    assert_eq!(manager.len(), 1);
    manager.tick(base + ms(100 + EXIT_MS));
    assert!(manager.is_empty());
}

#[test]
fn dismiss_all_plays_every_exit_phase() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    for name in ["a", "b", "c"] {
        manager.create_at(base, name, ToastOptions::default());
    }

    manager.dismiss_all_at(base + ms(50));
    for snapshot in manager.snapshots(base + ms(50)) {
        assert_eq!(snapshot.phase, Phase::Exiting);
    }
    assert_eq!(manager.len(), 3, "entries are not force-removed instantly");

    manager.tick(base + ms(50 + EXIT_MS));
    assert!(manager.is_empty());
}

#[test]
fn snapshots_are_ordered_newest_first() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    manager.create_at(base, "a", ToastOptions::default());
    manager.create_at(base + ms(1), "b", ToastOptions::default());
    manager.create_at(base + ms(2), "c", ToastOptions::default());

    let order: Vec<String> = manager
        .snapshots(base + ms(3))
        .into_iter()
        .map(|snapshot| snapshot.message)
        .collect();
    assert_eq!(order, vec!["c", "b", "a"]);
}

#[test]
fn visible_slice_respects_ceiling_and_anchor() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    manager.set_max_toasts(2);
    manager.create_at(base, "a", ToastOptions::default());
    manager.create_at(base + ms(1), "b", ToastOptions::default());
    manager.create_at(base + ms(2), "c", ToastOptions::default());

    let top: Vec<String> = manager
        .visible_snapshots(base + ms(3))
        .into_iter()
        .map(|snapshot| snapshot.message)
        .collect();
    assert_eq!(top, vec!["c", "b"]);

    manager.set_position(iced_toast::Position::BottomRight);
    let bottom: Vec<String> = manager
        .visible_snapshots(base + ms(3))
        .into_iter()
        .map(|snapshot| snapshot.message)
        .collect();
    assert_eq!(bottom, vec!["b", "c"]);

    // The ceiling is presentation-only; all three entries still exist.
    assert_eq!(manager.len(), 3);
}

#[test]
fn zero_duration_toast_only_leaves_on_explicit_dismiss() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    let id = manager.create_at(base, "sticky", ToastOptions::default().with_duration_ms(0));

    let mut now = base;
    for _ in 0..100 {
        now += ms(1000);
        manager.tick(now);
    }
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.snapshots(now)[0].phase, Phase::Visible);

    manager.dismiss_at(id, now);
    manager.tick(now + ms(EXIT_MS));
    assert!(manager.is_empty());
}

#[test]
fn dismissing_the_middle_toast_preserves_relative_order() {
    let base = Instant::now();
    let mut manager = ToastManager::new();
    manager.create_at(base, "a", ToastOptions::default());
    let middle = manager.create_at(base + ms(1), "b", ToastOptions::default());
    manager.create_at(base + ms(2), "c", ToastOptions::default());

    manager.dismiss_at(middle, base + ms(10));
    manager.tick(base + ms(10 + EXIT_MS));

    let order: Vec<String> = manager
        .snapshots(base + ms(10 + EXIT_MS))
        .into_iter()
        .map(|snapshot| snapshot.message)
        .collect();
    assert_eq!(order, vec!["c", "a"]);
}

#[test]
fn subscriber_sees_initial_snapshot_then_mutations() {
    let log: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let mut manager = ToastManager::new();
    manager.subscribe(move |snapshot| {
        sink.borrow_mut()
            .push(snapshot.iter().map(|s| s.message.clone()).collect());
    });

    manager.create("first", ToastOptions::default());

    let calls = log.borrow();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].is_empty(), "initial snapshot is delivered");
    assert_eq!(calls[1], vec!["first"]);
}

#[test]
fn every_toast_passes_through_exiting_before_removal() {
    let base = Instant::now();
    let observed: Rc<RefCell<Vec<Vec<Phase>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&observed);
    let mut manager = ToastManager::new();
    manager.subscribe(move |snapshot| {
        sink.borrow_mut()
            .push(snapshot.iter().map(|s| s.phase).collect());
    });

    manager.create_at(base, "a", ToastOptions::default().with_duration(ms(100)));
    manager.tick(base + ms(100));
    // Between expiry and removal the store still holds the exiting entry.
    assert_eq!(manager.snapshots(base + ms(150))[0].phase, Phase::Exiting);
    manager.tick(base + ms(100 + EXIT_MS));

    let calls = observed.borrow();
    // Subscription, insertion, removal: phases never include Removed.
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|phases| !phases.contains(&Phase::Removed)));
    assert!(calls[2].is_empty());
}
