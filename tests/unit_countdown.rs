use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use college_en_ligne::modules::lessons::unlock::{
    ACCESS_LABEL, Countdown, UnlockState, format_clock, format_remaining, next_occurrence,
    remaining_seconds,
};

fn monday_at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    // 2024-09-02 is a Monday.
    NaiveDate::from_ymd_opt(2024, 9, 2)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn test_remaining_time_monotonicity() {
    // A lesson starting T seconds in the future observed at t0: the value
    // at t0 + k must equal T - k until the start, and clamp to zero after.
    let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    let t0 = monday_at(9, 30, 0);
    let total = remaining_seconds(start, t0);
    assert_eq!(total, 1800);

    for k in 0..=total {
        let observed = remaining_seconds(start, t0 + Duration::seconds(k));
        assert_eq!(observed, total - k);
    }

    for k in [total, total + 1, total + 3600] {
        let state = UnlockState::from_remaining(remaining_seconds(
            start,
            t0 + Duration::seconds(k),
        ));
        assert!(state.is_accessible());
        assert_eq!(state.remaining(), 0);
    }
}

#[test]
fn test_dual_display_formats() {
    // Server first paint and client ticks format the same value
    // differently, but zero-pad the same way.
    assert_eq!(format_remaining(3661), "01h 01m 01s");
    assert_eq!(format_clock(3661), "01 : 01 : 01");

    assert_eq!(format_remaining(45296), "12h 34m 56s");
    assert_eq!(format_clock(45296), "12 : 34 : 56");
}

#[test]
fn test_countdown_five_second_scenario() {
    // Lesson starts five seconds from now: locked at t+0, accessible from
    // t+5 on.
    let start = NaiveTime::from_hms_opt(9, 0, 5).unwrap();
    let now = monday_at(9, 0, 0);

    let mut countdown = Countdown::new(remaining_seconds(start, now));
    assert_eq!(countdown.display(), "00 : 00 : 05");
    assert!(countdown.is_running());

    for _ in 0..5 {
        countdown.tick();
    }

    assert_eq!(countdown.display(), ACCESS_LABEL);
    assert!(countdown.state().is_accessible());
}

#[test]
fn test_terminal_state_is_idempotent() {
    let mut countdown = Countdown::new(2);
    countdown.tick();
    countdown.tick();
    assert!(countdown.state().is_accessible());

    // Further ticks are no-ops: the state machine has stopped.
    let settled = countdown.clone();
    for _ in 0..100 {
        assert_eq!(countdown.tick(), UnlockState::Accessible);
    }
    assert_eq!(countdown, settled);
    assert_eq!(countdown.display(), ACCESS_LABEL);
}

#[test]
fn test_already_started_lesson_renders_accessible() {
    let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let now = monday_at(11, 0, 0);

    let remaining = remaining_seconds(start, now);
    assert!(remaining < 0);

    let state = UnlockState::from_remaining(remaining);
    assert!(state.is_accessible());
    assert_eq!(state.label(), ACCESS_LABEL);

    let countdown = Countdown::new(remaining);
    assert!(!countdown.is_running());
    assert_eq!(countdown.display(), ACCESS_LABEL);
}

#[test]
fn test_next_occurrence_never_in_the_past() {
    let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let now = monday_at(9, 0, 0);

    for day in [
        "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
    ] {
        let next = next_occurrence(day, start, now).unwrap();
        assert!(next > now, "{} resolved to a past instant", day);
        assert!(next - now <= Duration::days(7));
    }
}
