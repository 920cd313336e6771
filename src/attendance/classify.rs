//! Per-day attendance classification.
//!
//! `classify_day` derives the canonical status of one (user, date) cell
//! from the stored record, the injected settings, the holiday windows, and
//! the user's employment status. The precedence is fixed: locked employment
//! windows beat everything, then holidays, half-day leave, the dynamic
//! Present/Late recomputation, the stored status, and finally the
//! exempt-user default.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::AttendanceSettings;
use crate::models::{AttendanceRecord, HolidayWindow, LeaveDuration, LeavePeriod, RecordStatus, User};

use super::lateness::{DEFAULT_START_TIME, is_late};

/// How much of the day a leave entry covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveSpan {
    /// The whole working day.
    Full,
    /// Half the day, keyed by which half.
    Half(LeavePeriod),
}

/// The derived classification of one employee-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayClass {
    /// Date falls in a maternity or resignation window: no symbol, not
    /// editable, excluded from every count.
    Locked,
    /// Paid company holiday (no explicit record on the day).
    Holiday,
    /// At work, checked in within the grace window.
    Present,
    /// Checked in after the grace window.
    Late,
    /// Paid leave.
    OnLeave(LeaveSpan),
    /// Unpaid leave.
    UnpaidLeave(LeaveSpan),
    /// Recorded absence.
    Absent,
    /// Tracked user with no record: rendered as "no data".
    Missing,
    /// Nothing to show (exempt user on a weekend).
    Blank,
}

impl DayClass {
    /// Returns true if the day counts toward the monthly work-day total.
    pub fn counts_as_work_day(&self) -> bool {
        matches!(self, DayClass::Present | DayClass::Late)
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn leave_span(duration: LeaveDuration, period: Option<LeavePeriod>) -> LeaveSpan {
    match duration {
        LeaveDuration::Full => LeaveSpan::Full,
        // Half-day leave defaults to the morning half when the period was
        // never captured.
        LeaveDuration::Half => LeaveSpan::Half(period.unwrap_or(LeavePeriod::Morning)),
    }
}

/// Classifies one (user, date) cell.
///
/// The employment status is read from `user.employment`; settings and
/// holiday windows are explicit parameters, never globals. When a check-in
/// time is present on a non-leave record, the Present/Late label is always
/// re-derived against the *current* settings: changing a role's start time
/// retroactively changes the displayed status of historical records. The
/// stored label is only used verbatim when there is nothing to re-derive
/// from.
///
/// # Example
///
/// ```
/// use portal_engine::attendance::{classify_day, DayClass};
/// use portal_engine::config::AttendanceSettings;
/// use portal_engine::models::{EmploymentStatus, User};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let user = User {
///     id: "user_001".to_string(),
///     name: "Nguyễn Văn An".to_string(),
///     role: "sales".to_string(),
///     basic_salary: Decimal::ZERO,
///     employment: EmploymentStatus::Normal,
/// };
///
/// // Tracked user, weekday, no record: "no data".
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let class = classify_day(&user, monday, None, &AttendanceSettings::default(), &[]);
/// assert_eq!(class, DayClass::Missing);
/// ```
pub fn classify_day(
    user: &User,
    date: NaiveDate,
    record: Option<&AttendanceRecord>,
    settings: &AttendanceSettings,
    holidays: &[HolidayWindow],
) -> DayClass {
    // 1. Locked employment windows beat everything, records included.
    if user.employment.locks(date) {
        return DayClass::Locked;
    }

    // 2. Holiday windows apply only when no explicit record exists.
    if record.is_none() && holidays.iter().any(|w| w.covers(date)) {
        return DayClass::Holiday;
    }

    match record {
        Some(record) => {
            // 3. Half-day leave, keyed by period.
            match &record.status {
                RecordStatus::OnLeave(details) if details.duration == LeaveDuration::Half => {
                    return DayClass::OnLeave(leave_span(details.duration, details.period));
                }
                RecordStatus::UnpaidLeave(details) if details.duration == LeaveDuration::Half => {
                    return DayClass::UnpaidLeave(leave_span(details.duration, details.period));
                }
                _ => {}
            }

            // 4. A recorded check-in on a non-leave record re-derives
            // Present/Late against the current settings.
            if let Some(check_in) = &record.check_in {
                if !record.status.is_leave() {
                    let start = settings
                        .start_time_for(&user.role)
                        .unwrap_or(DEFAULT_START_TIME);
                    if let Some(late) = is_late(check_in, start) {
                        return if late { DayClass::Late } else { DayClass::Present };
                    }
                }
            }

            // 5. Fall back to the stored status verbatim.
            match &record.status {
                RecordStatus::Present => DayClass::Present,
                RecordStatus::Late => DayClass::Late,
                RecordStatus::OnLeave(details) => {
                    DayClass::OnLeave(leave_span(details.duration, details.period))
                }
                RecordStatus::UnpaidLeave(details) => {
                    DayClass::UnpaidLeave(leave_span(details.duration, details.period))
                }
                RecordStatus::Absent => DayClass::Absent,
            }
        }
        None => {
            // 6. Exempt users are auto-present on weekdays; everyone else
            // shows "no data".
            if settings.is_exempt(&user.id) {
                if is_weekday(date) {
                    DayClass::Present
                } else {
                    DayClass::Blank
                }
            } else {
                DayClass::Missing
            }
        }
    }
}
