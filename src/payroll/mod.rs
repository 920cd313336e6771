//! Salary statement derivation.
//!
//! Pure computation from explicit inputs to a monthly statement. The
//! monthly work-day count is produced by the attendance engine; everything
//! else (allowances, advances, the insurance base) comes from the payroll
//! inputs for the month.

mod salary;

pub use salary::{
    HEALTH_INSURANCE_RATE, SOCIAL_INSURANCE_RATE, STANDARD_MONTHLY_WORK_DAYS,
    UNEMPLOYMENT_INSURANCE_RATE, SalaryInputs, SalaryStatement, calculate_salary,
};
