//! Reminder status derivation.
//!
//! Everything here is pure over an explicit `today` so it can be tested
//! without touching the clock. Handlers pass `Utc::now().date_naive()`;
//! nothing derived here is ever persisted.

use chrono::NaiveDate;
use serde::Serialize;

/// Offsets of 1..=SOON_DAYS days classify as "soon".
pub const SOON_DAYS: i64 = 3;
/// Dashboard counts events falling within this many days ahead.
pub const DASHBOARD_WINDOW_DAYS: i64 = 30;
/// The reminders list keeps items up to this many days past due.
pub const REMINDER_LOOKBACK_DAYS: i64 = 7;
/// The reminders list keeps items up to this many days ahead.
pub const REMINDER_LOOKAHEAD_DAYS: i64 = 90;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    Overdue,
    Today,
    Soon,
    Upcoming,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VaccinationStatus {
    Overdue,
    Today,
    Soon,
    Upcoming,
    /// No next-due date on record; nothing to chase.
    Recorded,
}

impl From<DueStatus> for VaccinationStatus {
    fn from(status: DueStatus) -> Self {
        match status {
            DueStatus::Overdue => Self::Overdue,
            DueStatus::Today => Self::Today,
            DueStatus::Soon => Self::Soon,
            DueStatus::Upcoming => Self::Upcoming,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MedicationStatus {
    Active,
    Completed,
}

/// Whole days from `today` until `target`; negative when past due.
pub fn day_offset(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

pub fn classify(offset: i64) -> DueStatus {
    if offset < 0 {
        DueStatus::Overdue
    } else if offset == 0 {
        DueStatus::Today
    } else if offset <= SOON_DAYS {
        DueStatus::Soon
    } else {
        DueStatus::Upcoming
    }
}

pub fn label(offset: i64) -> String {
    match classify(offset) {
        DueStatus::Overdue => format!("{} {} overdue", -offset, plural_days(-offset)),
        DueStatus::Today => "today".to_string(),
        DueStatus::Soon | DueStatus::Upcoming => {
            format!("in {} {}", offset, plural_days(offset))
        }
    }
}

fn plural_days(n: i64) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}

pub fn vaccination_status(next_due_on: Option<NaiveDate>, today: NaiveDate) -> VaccinationStatus {
    match next_due_on {
        Some(due) => classify(day_offset(due, today)).into(),
        None => VaccinationStatus::Recorded,
    }
}

/// Medication status is governed by the user-toggled flag alone,
/// independent of any end date having passed.
pub fn medication_status(active: bool) -> MedicationStatus {
    if active {
        MedicationStatus::Active
    } else {
        MedicationStatus::Completed
    }
}

/// The date that drives an event's reminder: the explicit reminder date
/// when set, the event date otherwise.
pub fn event_due_date(event_date: NaiveDate, reminder_date: Option<NaiveDate>) -> NaiveDate {
    reminder_date.unwrap_or(event_date)
}

/// Dashboard rule: an event is upcoming if it falls within the next
/// `DASHBOARD_WINDOW_DAYS` days, today included.
pub fn event_is_upcoming(event_date: NaiveDate, today: NaiveDate) -> bool {
    (0..=DASHBOARD_WINDOW_DAYS).contains(&day_offset(event_date, today))
}

/// Dashboard rule: a reminder is overdue only when an explicit reminder
/// date has passed while the event itself is still in the future.
pub fn event_is_overdue(
    event_date: NaiveDate,
    reminder_date: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    matches!(reminder_date, Some(r) if r < today && event_date > today)
}

/// List-view inclusion window relative to today.
pub fn in_reminder_window(offset: i64) -> bool {
    (-REMINDER_LOOKBACK_DAYS..=REMINDER_LOOKAHEAD_DAYS).contains(&offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn past_due_date_is_overdue() {
        let today = d("2026-01-15");
        let offset = day_offset(d("2026-01-10"), today);
        assert_eq!(offset, -5);
        assert_eq!(classify(offset), DueStatus::Overdue);
        assert_eq!(label(offset), "5 days overdue");
    }

    #[test]
    fn same_day_is_today() {
        let today = d("2026-01-15");
        let offset = day_offset(d("2026-01-15"), today);
        assert_eq!(offset, 0);
        assert_eq!(classify(offset), DueStatus::Today);
        assert_eq!(label(offset), "today");
    }

    #[test]
    fn within_three_days_is_soon() {
        let today = d("2026-01-15");
        let offset = day_offset(d("2026-01-17"), today);
        assert_eq!(offset, 2);
        assert_eq!(classify(offset), DueStatus::Soon);
        assert_eq!(label(offset), "in 2 days");
    }

    #[test]
    fn soon_boundary_is_inclusive() {
        assert_eq!(classify(3), DueStatus::Soon);
        assert_eq!(classify(4), DueStatus::Upcoming);
    }

    #[test]
    fn far_future_is_upcoming() {
        let today = d("2026-01-15");
        let offset = day_offset(d("2026-04-01"), today);
        assert_eq!(classify(offset), DueStatus::Upcoming);
    }

    #[test]
    fn single_day_labels_are_singular() {
        assert_eq!(label(-1), "1 day overdue");
        assert_eq!(label(1), "in 1 day");
    }

    #[test]
    fn vaccination_without_due_date_is_recorded() {
        let today = d("2026-01-15");
        assert_eq!(
            vaccination_status(None, today),
            VaccinationStatus::Recorded
        );
        assert_eq!(
            vaccination_status(Some(d("2026-01-10")), today),
            VaccinationStatus::Overdue
        );
    }

    #[test]
    fn medication_status_follows_the_flag_not_dates() {
        assert_eq!(medication_status(true), MedicationStatus::Active);
        assert_eq!(medication_status(false), MedicationStatus::Completed);
    }

    #[test]
    fn reminder_date_takes_precedence_over_event_date() {
        let event = d("2026-02-20");
        assert_eq!(event_due_date(event, None), event);
        assert_eq!(
            event_due_date(event, Some(d("2026-02-10"))),
            d("2026-02-10")
        );
    }

    #[test]
    fn event_upcoming_window_is_thirty_days() {
        let today = d("2026-01-15");
        assert!(event_is_upcoming(d("2026-01-15"), today));
        assert!(event_is_upcoming(d("2026-02-14"), today));
        assert!(!event_is_upcoming(d("2026-02-15"), today));
        assert!(!event_is_upcoming(d("2026-01-14"), today));
    }

    #[test]
    fn event_overdue_requires_explicit_past_reminder_and_future_event() {
        let today = d("2026-01-15");
        // Reminder passed, event still ahead: overdue.
        assert!(event_is_overdue(d("2026-02-01"), Some(d("2026-01-10")), today));
        // No reminder date: never overdue at the dashboard level.
        assert!(!event_is_overdue(d("2026-01-01"), None, today));
        // Event itself already past: not overdue.
        assert!(!event_is_overdue(d("2026-01-12"), Some(d("2026-01-10")), today));
    }

    #[test]
    fn reminder_window_spans_minus_seven_to_ninety() {
        assert!(in_reminder_window(-7));
        assert!(in_reminder_window(0));
        assert!(in_reminder_window(90));
        assert!(!in_reminder_window(-8));
        assert!(!in_reminder_window(91));
    }
}
