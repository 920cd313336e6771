//! Attendance record model and holiday windows.
//!
//! Attendance records are keyed by (user, date) with upsert semantics: at
//! most one record exists per user per day, and saving a record for an
//! occupied key replaces the old one. The status is a tagged union so that
//! leave details are only representable on the leave statuses.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Half of a working day, for half-day leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePeriod {
    /// Leave taken in the morning half.
    Morning,
    /// Leave taken in the afternoon half.
    Afternoon,
}

impl std::fmt::Display for LeavePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeavePeriod::Morning => write!(f, "Morning"),
            LeavePeriod::Afternoon => write!(f, "Afternoon"),
        }
    }
}

/// Duration of a leave entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDuration {
    /// Half a working day.
    Half,
    /// A full working day.
    Full,
}

/// Details attached to a leave entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveDetails {
    /// Free-text reason entered by the employee.
    #[serde(default)]
    pub reason: Option<String>,
    /// Name of an uploaded supporting document, if any.
    #[serde(default)]
    pub attachment: Option<String>,
    /// Whether the leave covers a half or a full day.
    pub duration: LeaveDuration,
    /// Which half of the day, for half-day leave.
    #[serde(default)]
    pub period: Option<LeavePeriod>,
}

/// The stored status of an attendance record.
///
/// Present/Late labels are advisory only: whenever a check-in time is
/// recorded the displayed status is re-derived against the current
/// configuration, never read from this field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordStatus {
    /// Checked in on time (stored label; re-derived when check-in exists).
    Present,
    /// Checked in after the grace window (stored label; re-derived when
    /// check-in exists).
    Late,
    /// Paid leave.
    OnLeave(LeaveDetails),
    /// Unpaid leave.
    UnpaidLeave(LeaveDetails),
    /// Recorded absence without leave.
    Absent,
}

impl RecordStatus {
    /// Returns true for the two explicit leave statuses.
    pub fn is_leave(&self) -> bool {
        matches!(
            self,
            RecordStatus::OnLeave(_) | RecordStatus::UnpaidLeave(_)
        )
    }
}

/// One attendance record for a (user, date) key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The user this record belongs to.
    pub user_id: String,
    /// The calendar day the record covers.
    pub date: NaiveDate,
    /// The stored status.
    pub status: RecordStatus,
    /// Check-in time as "HH:MM", when captured.
    #[serde(default)]
    pub check_in: Option<String>,
    /// Check-out time as "HH:MM", when captured.
    #[serde(default)]
    pub check_out: Option<String>,
}

/// A system notification, the raw material for holiday windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: String,
    /// Title shown in the portal header.
    pub title: String,
    /// First day the notification applies to.
    pub start_date: NaiveDate,
    /// Last day the notification applies to (inclusive).
    pub end_date: NaiveDate,
}

/// A date range treated as a paid holiday for every employee.
///
/// Derived from notifications whose title matches the holiday keyword
/// pattern. Any date inside the range counts as a holiday for employees
/// without an explicit attendance record on that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayWindow {
    /// Title of the originating notification.
    pub title: String,
    /// First holiday day (inclusive).
    pub start_date: NaiveDate,
    /// Last holiday day (inclusive).
    pub end_date: NaiveDate,
}

impl HolidayWindow {
    /// Returns true if the window covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Matches notification titles that announce a company holiday, in either
/// language the portal is used in.
static HOLIDAY_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)holiday|ngh[iỉ]\s*l[eễ]|t[eế]t").expect("valid holiday pattern"));

/// Extracts holiday windows from system notifications.
///
/// Only notifications whose title matches the holiday keyword pattern
/// contribute a window; everything else (announcements, reminders) is
/// ignored.
///
/// # Example
///
/// ```
/// use portal_engine::models::{holiday_windows, Notification};
/// use chrono::NaiveDate;
///
/// let notifications = vec![Notification {
///     id: "ntf_001".to_string(),
///     title: "Nghỉ lễ Quốc khánh".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 9, 2).unwrap(),
/// }];
///
/// let windows = holiday_windows(&notifications);
/// assert_eq!(windows.len(), 1);
/// assert!(windows[0].covers(NaiveDate::from_ymd_opt(2026, 9, 2).unwrap()));
/// ```
pub fn holiday_windows(notifications: &[Notification]) -> Vec<HolidayWindow> {
    notifications
        .iter()
        .filter(|n| HOLIDAY_TITLE.is_match(&n.title))
        .map(|n| HolidayWindow {
            title: n.title.clone(),
            start_date: n.start_date,
            end_date: n.end_date,
        })
        .collect()
}
