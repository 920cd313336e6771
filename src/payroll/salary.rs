//! The monthly salary formula.
//!
//! `time_salary = basic_salary / 26 * work_days`, independent of how many
//! days the month actually has. Insurance lines are computed from the
//! declared insurance base at the statutory employee rates and shown for
//! information only. All amounts are `Decimal`, rounded to two places at
//! the statement boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Fixed divisor for the time-salary formula, whatever the calendar says.
pub const STANDARD_MONTHLY_WORK_DAYS: u32 = 26;

/// Employee share of social insurance (8%).
pub const SOCIAL_INSURANCE_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Employee share of health insurance (1.5%).
pub const HEALTH_INSURANCE_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 3);

/// Employee share of unemployment insurance (1%).
pub const UNEMPLOYMENT_INSURANCE_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Inputs to one monthly salary statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInputs {
    /// Contractual monthly basic salary.
    pub basic_salary: Decimal,
    /// Work days counted by the attendance engine for the month.
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
    /// Declared base the insurance lines are computed from.
    #[serde(default)]
    pub insurance_base: Decimal,
    /// Amounts returned to the employee this month.
    #[serde(default)]
    pub returns: Decimal,
    /// Salary advance already paid out.
    #[serde(default)]
    pub advance: Decimal,
}

/// A derived monthly salary statement, all amounts rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStatement {
    /// `basic_salary / 26 * work_days`.
    pub time_salary: Decimal,
    /// Time salary plus every allowance line.
    pub total_income: Decimal,
    /// Social insurance at the employee rate, display only.
    pub social_insurance: Decimal,
    /// Health insurance at the employee rate, display only.
    pub health_insurance: Decimal,
    /// Unemployment insurance at the employee rate, display only.
    pub unemployment_insurance: Decimal,
    /// Personal income tax. Currently always zero.
    pub personal_income_tax: Decimal,
    /// Total deductions. Currently always zero; the insurance lines above
    /// are informational and deliberately not subtracted.
    pub total_deductions: Decimal,
    /// `total_income + returns - advance`.
    pub net_salary: Decimal,
}

/// Derives a salary statement from the month's inputs.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the basic salary is
/// negative.
///
/// # Example
///
/// ```
/// use portal_engine::payroll::{calculate_salary, SalaryInputs};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = SalaryInputs {
///     basic_salary: Decimal::from_str("5000000").unwrap(),
///     work_days: 26,
///     kpi: Decimal::ZERO,
///     bonus: Decimal::ZERO,
///     parking_allowance: Decimal::ZERO,
///     other_allowance: Decimal::ZERO,
///     insurance_base: Decimal::ZERO,
///     returns: Decimal::ZERO,
///     advance: Decimal::ZERO,
/// };
///
/// let statement = calculate_salary(&inputs).unwrap();
/// assert_eq!(statement.time_salary, Decimal::from_str("5000000.00").unwrap());
/// ```
pub fn calculate_salary(inputs: &SalaryInputs) -> EngineResult<SalaryStatement> {
    if inputs.basic_salary < Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("negative basic salary: {}", inputs.basic_salary),
        });
    }

    let standard = Decimal::from(STANDARD_MONTHLY_WORK_DAYS);
    let work_days = Decimal::from(inputs.work_days);

    let time_salary = inputs.basic_salary / standard * work_days;
    let total_income = time_salary
        + inputs.kpi
        + inputs.bonus
        + inputs.parking_allowance
        + inputs.other_allowance;

    let social_insurance = inputs.insurance_base * SOCIAL_INSURANCE_RATE;
    let health_insurance = inputs.insurance_base * HEALTH_INSURANCE_RATE;
    let unemployment_insurance = inputs.insurance_base * UNEMPLOYMENT_INSURANCE_RATE;

    // TODO: apply the progressive PIT schedule once accounting confirms
    // which income lines are taxable; until then both tax and deductions
    // stay at zero and the insurance lines are display only.
    let personal_income_tax = Decimal::ZERO;
    let total_deductions = Decimal::ZERO;

    let net_salary = total_income + inputs.returns - inputs.advance;

    Ok(SalaryStatement {
        time_salary: time_salary.round_dp(2),
        total_income: total_income.round_dp(2),
        social_insurance: social_insurance.round_dp(2),
        health_insurance: health_insurance.round_dp(2),
        unemployment_insurance: unemployment_insurance.round_dp(2),
        personal_income_tax,
        total_deductions,
        net_salary: net_salary.round_dp(2),
    })
}
