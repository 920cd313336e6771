//! Core engines for a logistics back-office portal.
//!
//! This crate provides the two rule-driven components behind the portal's
//! print and payroll screens: a pagination engine that reflows structured
//! business documents (contracts, quotations, weekly reports) across fixed
//! A4-sized pages, and an attendance engine that classifies each employee-day
//! and derives monthly work-day counts and salary statements.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod payroll;
pub mod store;
