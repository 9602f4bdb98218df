//! Lesson unlock timing.
//!
//! A lesson link is locked until its timetable slot starts. The server
//! computes an initial remaining-time snapshot per lesson at render time;
//! the client advances it locally, one tick per second, until the link
//! becomes accessible. Both halves live here: the remaining-time
//! arithmetic and formatting, and the [`Countdown`] state machine.
//!
//! Remaining time is always whole seconds and is clamped at zero:
//! [`UnlockState::Accessible`] is a terminal state, and further ticks are
//! no-ops.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Weekday};

/// Link label once a lesson has unlocked.
pub const ACCESS_LABEL: &str = "Accéder";

/// French day names, indexed from Monday, as stored in `timetables.week_day`.
pub const WEEK_DAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// The French name of a weekday.
pub fn french_week_day(weekday: Weekday) -> &'static str {
    WEEK_DAYS[weekday.num_days_from_monday() as usize]
}

/// Index from Monday of a French day name; `None` for anything else.
pub fn week_day_index(name: &str) -> Option<u32> {
    WEEK_DAYS
        .iter()
        .position(|day| *day == name)
        .map(|i| i as u32)
}

/// Seconds until today's occurrence of `start_time`. Negative once the
/// slot has started.
pub fn remaining_seconds(start_time: NaiveTime, now: NaiveDateTime) -> i64 {
    let start = now.date().and_time(start_time);
    (start - now).num_seconds()
}

/// The next wall-clock occurrence of `(week_day, start_time)` strictly
/// after `now`. `None` when `week_day` is not a French day name.
pub fn next_occurrence(
    week_day: &str,
    start_time: NaiveTime,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let target = week_day_index(week_day)?;
    let today = now.weekday().num_days_from_monday();
    let days_ahead = (target + 7 - today) % 7;

    let mut candidate = (now.date() + Duration::days(days_ahead as i64)).and_time(start_time);
    if candidate <= now {
        candidate += Duration::days(7);
    }
    Some(candidate)
}

/// The render state of one lesson link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockState {
    /// Counting down; holds the remaining whole seconds (always > 0).
    Locked(i64),
    /// The slot has started; the link is enabled. Terminal.
    Accessible,
}

impl UnlockState {
    pub fn from_remaining(seconds: i64) -> Self {
        if seconds <= 0 {
            UnlockState::Accessible
        } else {
            UnlockState::Locked(seconds)
        }
    }

    pub fn is_accessible(&self) -> bool {
        matches!(self, UnlockState::Accessible)
    }

    pub fn remaining(&self) -> i64 {
        match self {
            UnlockState::Locked(seconds) => *seconds,
            UnlockState::Accessible => 0,
        }
    }

    /// The server-rendered label: the remaining time, or the access label
    /// once unlocked.
    pub fn label(&self) -> String {
        match self {
            UnlockState::Locked(seconds) => format_remaining(*seconds),
            UnlockState::Accessible => ACCESS_LABEL.to_string(),
        }
    }
}

/// Server display format: `"01h 01m 01s"`, every field zero-padded to two
/// digits.
pub fn format_remaining(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}h {:02}m {:02}s", hours, minutes, secs)
}

/// Client tick format: `"01 : 01 : 01"`. Deliberately different from the
/// first-paint format, but zero-padded the same way.
pub fn format_clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02} : {:02} : {:02}", hours, minutes, secs)
}

/// One lesson link's countdown: `Locked(n)`, one tick per second, until
/// `Accessible`. Reaching the terminal state stops the timer; further
/// ticks change nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    state: UnlockState,
}

impl Countdown {
    pub fn new(remaining_seconds: i64) -> Self {
        Self {
            state: UnlockState::from_remaining(remaining_seconds),
        }
    }

    pub fn state(&self) -> UnlockState {
        self.state
    }

    /// Whether the timer is still ticking.
    pub fn is_running(&self) -> bool {
        !self.state.is_accessible()
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> UnlockState {
        if let UnlockState::Locked(seconds) = self.state {
            self.state = UnlockState::from_remaining(seconds - 1);
        }
        self.state
    }

    /// The link text for the current state.
    pub fn display(&self) -> String {
        match self.state {
            UnlockState::Locked(seconds) => format_clock(seconds),
            UnlockState::Accessible => ACCESS_LABEL.to_string(),
        }
    }
}
