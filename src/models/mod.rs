//! Data models for the portal engines.
//!
//! This module contains the domain types shared by the pagination and
//! attendance engines: users and their employment status, daily attendance
//! records, notifications and holiday windows, document sources, and the
//! content-block vocabulary consumed by the paginator.

mod attendance;
mod block;
mod document;
mod user;

pub use attendance::{
    AttendanceRecord, HolidayWindow, LeaveDetails, LeaveDuration, LeavePeriod, Notification,
    RecordStatus, holiday_windows,
};
pub use block::{BlockKind, BlockOrigin, ContentBlock, Page, PlacedBlock};
pub use document::{
    Article, Contract, Document, DocumentType, Quotation, QuotationItem, ReportSection,
    WeeklyReport,
};
pub use user::{EmploymentStatus, User};
