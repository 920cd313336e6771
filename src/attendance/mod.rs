//! Attendance classification and aggregation engine.
//!
//! Given the attendance records, settings, holiday windows, and a target
//! user and day or month, this module derives a canonical per-day status
//! and the monthly work-day count that feeds the salary formula. It also
//! hosts the bulk spreadsheet import with its documented destructive
//! month-overwrite reconciliation.
//!
//! The engine performs no mutation and reads no global state: settings are
//! explicit parameters, so re-running a classification after a settings
//! change retroactively re-derives Present/Late labels from the stored
//! check-in times.

mod classify;
mod import;
mod lateness;
mod workdays;

pub use classify::{DayClass, LeaveSpan, classify_day};
pub use import::{parse_sheet, reconcile_import, upsert_record};
pub use lateness::{DEFAULT_START_TIME, GRACE_MINUTES, is_late, parse_hhmm};
pub use workdays::{calculate_work_days, month_classifications, month_days};
