//! PhilHealth premium calculation functionality.
//!
//! This module computes the employee share of the monthly PhilHealth premium
//! under the Universal Health Care Act contribution schedule: a flat rate
//! applied to the monthly salary clamped into the premium salary band.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_to_peso;
use crate::models::AuditStep;

/// The statute governing PhilHealth premiums.
pub const PHILHEALTH_STATUTE_REF: &str = "RA 11223";

/// Employee share of the premium rate (half of the 5% total premium).
pub const PHILHEALTH_PREMIUM_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Lower bound of the premium salary band.
pub const PHILHEALTH_SALARY_FLOOR: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// Upper bound of the premium salary band.
pub const PHILHEALTH_SALARY_CEILING: Decimal = Decimal::from_parts(100000, 0, 0, false, 0);

/// The result of calculating the PhilHealth premium, including the audit step.
#[derive(Debug, Clone)]
pub struct PhilHealthPremiumResult {
    /// The clamped salary the premium was computed from.
    pub premium_base: Decimal,
    /// The employee premium in whole pesos.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee PhilHealth premium for a monthly salary.
///
/// The salary is clamped into the 10,000 to 100,000 band and the employee
/// share of 2.5% is applied to the clamped value, rounded to the nearest
/// peso. Every salary pays at least the floor premium of 250 and at most
/// the ceiling premium of 2,500.
///
/// Negative salaries are treated as zero.
///
/// # Arguments
///
/// * `salary` - The monthly base salary
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `PhilHealthPremiumResult` with the premium and an audit step.
///
/// # Statutory Reference
///
/// RA 11223 (Universal Health Care Act), 5% premium rate shared equally
/// between employer and employee.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_philhealth_premium;
/// use rust_decimal::Decimal;
///
/// let result = calculate_philhealth_premium(Decimal::from(30000), 1);
/// assert_eq!(result.amount, Decimal::from(750));
/// ```
pub fn calculate_philhealth_premium(salary: Decimal, step_number: u32) -> PhilHealthPremiumResult {
    let monthly_salary = salary.max(Decimal::ZERO);
    let premium_base = monthly_salary.clamp(PHILHEALTH_SALARY_FLOOR, PHILHEALTH_SALARY_CEILING);
    let amount = round_to_peso(premium_base * PHILHEALTH_PREMIUM_RATE);

    let audit_step = AuditStep {
        step_number,
        rule_id: "philhealth_premium".to_string(),
        rule_name: "PhilHealth Premium".to_string(),
        statute_ref: PHILHEALTH_STATUTE_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "premium_base": premium_base.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "₱{} x {} = ₱{} (employee share, salary clamped to ₱{}-₱{})",
            premium_base.normalize(),
            PHILHEALTH_PREMIUM_RATE.normalize(),
            amount.normalize(),
            PHILHEALTH_SALARY_FLOOR.normalize(),
            PHILHEALTH_SALARY_CEILING.normalize()
        ),
    };

    PhilHealthPremiumResult {
        premium_base,
        amount,
        audit_step,
    }
}
