//! Request types for the portal engine API.
//!
//! This module defines the JSON request structures for the pagination,
//! attendance, and payroll endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Document, EmploymentStatus, Notification, User};
use crate::payroll::SalaryInputs;

/// Request body for the `/documents/paginate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginateRequest {
    /// The document to lay out.
    pub document: Document,
}

/// Request body for the `/attendance/sheet` endpoint.
///
/// Carries everything the classification needs: the user, the target
/// month, the month's records, and the notifications holiday windows are
/// derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRequest {
    /// The employee the sheet is for.
    pub user: UserRequest,
    /// Target year.
    pub year: i32,
    /// Target month (1-12).
    pub month: u32,
    /// Attendance records; records of other users are ignored.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    /// System notifications, filtered for holiday windows.
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Employee information in a sheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequest {
    /// Unique identifier for the user.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Role key used for the start-time lookup.
    pub role: String,
    /// Contractual monthly basic salary.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Employment status, for locked windows.
    #[serde(default)]
    pub employment: EmploymentStatus,
}

/// Request body for the `/payroll/statement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// Contractual monthly basic salary.
    pub basic_salary: Decimal,
    /// Work days counted for the month.
    pub work_days: u32,
    /// KPI payment for the month.
    #[serde(default)]
    pub kpi: Decimal,
    /// One-off bonus.
    #[serde(default)]
    pub bonus: Decimal,
    /// Parking allowance.
    #[serde(default)]
    pub parking_allowance: Decimal,
    /// Any other allowance.
    #[serde(default)]
    pub other_allowance: Decimal,
    /// Declared insurance base.
    #[serde(default)]
    pub insurance_base: Decimal,
    /// Amounts returned to the employee this month.
    #[serde(default)]
    pub returns: Decimal,
    /// Salary advance already paid out.
    #[serde(default)]
    pub advance: Decimal,
}

impl From<UserRequest> for User {
    fn from(req: UserRequest) -> Self {
        User {
            id: req.id,
            name: req.name,
            role: req.role,
            basic_salary: req.basic_salary,
            employment: req.employment,
        }
    }
}

impl From<StatementRequest> for SalaryInputs {
    fn from(req: StatementRequest) -> Self {
        SalaryInputs {
            basic_salary: req.basic_salary,
            work_days: req.work_days,
            kpi: req.kpi,
            bonus: req.bonus,
            parking_allowance: req.parking_allowance,
            other_allowance: req.other_allowance,
            insurance_base: req.insurance_base,
            returns: req.returns,
            advance: req.advance,
        }
    }
}
