//! User model and employment status.
//!
//! This module defines the User struct and the EmploymentStatus union that
//! governs whether a calendar date is locked for attendance entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the employment lifecycle state of a user.
///
/// Maternity and resignation windows lock the affected dates: no attendance
/// entry is possible and the days are excluded from every count, regardless
/// of any record that may exist for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Regular active employment.
    Normal,
    /// Maternity leave between the two dates. An open end date locks every
    /// day from the start onwards.
    Maternity {
        /// First locked day (inclusive).
        start_date: NaiveDate,
        /// Last locked day (inclusive), if the return date is known.
        end_date: Option<NaiveDate>,
    },
    /// Resignation effective from the start date.
    Resignation {
        /// First day no longer employed (inclusive).
        start_date: NaiveDate,
    },
}

impl EmploymentStatus {
    /// Returns true if the given date is locked for attendance entry.
    ///
    /// # Example
    ///
    /// ```
    /// use portal_engine::models::EmploymentStatus;
    /// use chrono::NaiveDate;
    ///
    /// let status = EmploymentStatus::Resignation {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
    /// };
    /// assert!(status.locks(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()));
    /// assert!(!status.locks(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()));
    /// ```
    pub fn locks(&self, date: NaiveDate) -> bool {
        match self {
            EmploymentStatus::Normal => false,
            EmploymentStatus::Maternity {
                start_date,
                end_date,
            } => date >= *start_date && end_date.is_none_or(|end| date <= end),
            EmploymentStatus::Resignation { start_date } => date >= *start_date,
        }
    }
}

impl Default for EmploymentStatus {
    fn default() -> Self {
        EmploymentStatus::Normal
    }
}

/// Represents an employee of the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name, as entered by the admin (may carry diacritics).
    pub name: String,
    /// Role key used to look up the configured start time (e.g., "sales").
    pub role: String,
    /// Monthly basic salary in local currency.
    pub basic_salary: Decimal,
    /// Employment lifecycle state.
    #[serde(default)]
    pub employment: EmploymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normal_never_locks() {
        assert!(!EmploymentStatus::Normal.locks(date(2026, 1, 1)));
        assert!(!EmploymentStatus::Normal.locks(date(2030, 12, 31)));
    }

    #[test]
    fn test_resignation_locks_from_start_date() {
        let status = EmploymentStatus::Resignation {
            start_date: date(2026, 3, 15),
        };
        assert!(!status.locks(date(2026, 3, 14)));
        assert!(status.locks(date(2026, 3, 15)));
        assert!(status.locks(date(2027, 1, 1)));
    }

    #[test]
    fn test_maternity_locks_within_window() {
        let status = EmploymentStatus::Maternity {
            start_date: date(2026, 2, 1),
            end_date: Some(date(2026, 7, 31)),
        };
        assert!(!status.locks(date(2026, 1, 31)));
        assert!(status.locks(date(2026, 2, 1)));
        assert!(status.locks(date(2026, 5, 10)));
        assert!(status.locks(date(2026, 7, 31)));
        assert!(!status.locks(date(2026, 8, 1)));
    }

    #[test]
    fn test_maternity_open_ended_locks_onwards() {
        let status = EmploymentStatus::Maternity {
            start_date: date(2026, 2, 1),
            end_date: None,
        };
        assert!(!status.locks(date(2026, 1, 31)));
        assert!(status.locks(date(2026, 2, 1)));
        assert!(status.locks(date(2028, 1, 1)));
    }

    #[test]
    fn test_employment_status_serialization() {
        let status = EmploymentStatus::Resignation {
            start_date: date(2026, 3, 15),
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"type\":\"resignation\""));
        assert!(json.contains("\"start_date\":\"2026-03-15\""));

        let deserialized: EmploymentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, status);
    }

    #[test]
    fn test_user_deserialization_defaults_to_normal() {
        let json = r#"{
            "id": "user_001",
            "name": "Nguyễn Văn An",
            "role": "sales",
            "basic_salary": "5000000"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "user_001");
        assert_eq!(user.role, "sales");
        assert_eq!(user.employment, EmploymentStatus::Normal);
        assert_eq!(user.basic_salary, Decimal::new(5_000_000, 0));
    }

    #[test]
    fn test_user_round_trip() {
        let user = User {
            id: "user_002".to_string(),
            name: "Trần Thị Bích".to_string(),
            role: "accounting".to_string(),
            basic_salary: Decimal::new(7_500_000, 0),
            employment: EmploymentStatus::Maternity {
                start_date: date(2026, 4, 1),
                end_date: Some(date(2026, 9, 30)),
            },
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, user);
    }
}
