//! Monthly aggregation: per-day classifications and the work-day count.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::AttendanceSettings;
use crate::models::{AttendanceRecord, HolidayWindow, User};

use super::classify::{DayClass, classify_day};

/// Returns every calendar day of a month, in order.
///
/// Months with fewer than 31 days simply yield fewer dates; an invalid
/// year/month combination yields none.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=31)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// Classifies every day of a month for one user.
///
/// Records are matched by date; at most one record per day is expected
/// (the store upserts by key), and the first match wins if that invariant
/// is ever violated upstream.
pub fn month_classifications(
    user: &User,
    year: i32,
    month: u32,
    records: &[AttendanceRecord],
    settings: &AttendanceSettings,
    holidays: &[HolidayWindow],
) -> Vec<(NaiveDate, DayClass)> {
    let by_date: HashMap<NaiveDate, &AttendanceRecord> = records
        .iter()
        .filter(|r| r.user_id == user.id)
        .map(|r| (r.date, r))
        .collect();

    month_days(year, month)
        .into_iter()
        .map(|date| {
            let record = by_date.get(&date).copied();
            (date, classify_day(user, date, record, settings, holidays))
        })
        .collect()
}

/// Counts the work days of a month for one user.
///
/// A day counts when its classification is Present or Late; everything
/// else (leave of either kind, absence, holidays, locked windows, missing
/// data, blanks) does not. This count feeds the time-salary numerator.
///
/// # Example
///
/// ```
/// use portal_engine::attendance::calculate_work_days;
/// use portal_engine::config::AttendanceSettings;
/// use portal_engine::models::{EmploymentStatus, User};
/// use rust_decimal::Decimal;
///
/// let user = User {
///     id: "user_001".to_string(),
///     name: "Trần Thị Bình".to_string(),
///     role: "sales".to_string(),
///     basic_salary: Decimal::ZERO,
///     employment: EmploymentStatus::Normal,
/// };
///
/// // No records at all: a tracked user has zero work days.
/// let days = calculate_work_days(&user, 2026, 3, &[], &AttendanceSettings::default(), &[]);
/// assert_eq!(days, 0);
/// ```
pub fn calculate_work_days(
    user: &User,
    year: i32,
    month: u32,
    records: &[AttendanceRecord],
    settings: &AttendanceSettings,
    holidays: &[HolidayWindow],
) -> u32 {
    month_classifications(user, year, month, records, settings, holidays)
        .iter()
        .filter(|(_, class)| class.counts_as_work_day())
        .count() as u32
}
