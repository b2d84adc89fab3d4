use super::*;

#[test]
fn first_call_runs_immediately() {
    let mut d = Debouncer::new(10.0);
    assert_eq!(d.call(0.0, 1), Some(1));
    assert!(!d.is_armed());
}

#[test]
fn calls_inside_window_are_deferred() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    assert_eq!(d.call(3.0, 2), None);
    assert!(d.is_armed());
    assert_eq!(d.flush_at(), Some(10.0));
}

#[test]
fn only_newest_deferred_call_survives() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    d.call(2.0, 2);
    d.call(4.0, 3);
    d.call(6.0, 4);
    assert_eq!(d.flush(10.0), Some(4));
    assert_eq!(d.flush(30.0), None);
}

#[test]
fn flush_before_window_elapses_keeps_pending() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    d.call(5.0, 2);
    assert_eq!(d.flush(9.9), None);
    assert!(d.is_armed());
    assert_eq!(d.flush(10.0), Some(2));
}

#[test]
fn flush_opens_a_new_window() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    d.call(5.0, 2);
    assert_eq!(d.flush(10.0), Some(2));
    // The trailing run counts as a run: the next call is cooled down again.
    assert_eq!(d.call(12.0, 3), None);
    assert_eq!(d.flush_at(), Some(20.0));
}

#[test]
fn call_after_window_runs_and_drops_stale_pending() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    d.call(5.0, 2);
    assert_eq!(d.call(15.0, 3), Some(3));
    assert!(!d.is_armed());
    assert_eq!(d.flush(100.0), None);
}

#[test]
fn clear_discards_pending() {
    let mut d = Debouncer::new(10.0);
    d.call(0.0, 1);
    d.call(5.0, 2);
    d.clear();
    assert!(!d.is_armed());
    assert_eq!(d.flush_at(), None);
    assert_eq!(d.flush(20.0), None);
}

#[test]
fn flush_without_pending_is_none() {
    let mut d: Debouncer<u8> = Debouncer::new(10.0);
    assert_eq!(d.flush(0.0), None);
    assert_eq!(d.flush_at(), None);
}

#[test]
fn burst_costs_one_leading_and_one_trailing_run() {
    let mut d = Debouncer::new(100.0);
    let mut runs = Vec::new();
    for t in 0..50 {
        if let Some(v) = d.call(f64::from(t), t) {
            runs.push(v);
        }
    }
    if let Some(at) = d.flush_at() {
        if let Some(v) = d.flush(at) {
            runs.push(v);
        }
    }
    assert_eq!(runs, vec![0, 49]);
}

#[test]
fn window_is_reported() {
    let d: Debouncer<()> = Debouncer::new(42.0);
    assert!((d.window_ms() - 42.0).abs() < f64::EPSILON);
}
