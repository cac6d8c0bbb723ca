//! SSS contribution calculation functionality.
//!
//! This module computes the employee share of the monthly Social Security
//! System contribution under the schedule introduced by RA 11199, including
//! the Mandatory Provident Fund (MPF) tier for salary credits above the
//! regular ceiling band.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_to_peso;
use crate::models::AuditStep;

/// The statute governing SSS contributions.
pub const SSS_STATUTE_REF: &str = "RA 11199";

/// Lower bound of the monthly salary credit. Salaries below this get the
/// flat minimum contribution instead of a computed one.
pub const SSS_SALARY_CREDIT_FLOOR: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Upper bound of the monthly salary credit.
pub const SSS_SALARY_CREDIT_CEILING: Decimal = Decimal::from_parts(35000, 0, 0, false, 0);

/// Flat contribution for salaries below the salary credit floor.
pub const SSS_MINIMUM_CONTRIBUTION: Decimal = Decimal::from_parts(250, 0, 0, false, 0);

/// Employee share of the regular contribution (5% of the salary credit).
pub const SSS_REGULAR_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Salary credit above which the MPF tier applies.
pub const SSS_MPF_THRESHOLD: Decimal = Decimal::from_parts(20000, 0, 0, false, 0);

/// Employee share of the MPF contribution (2.5% of the credit over the
/// threshold).
pub const SSS_MPF_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Salary credit above which the flat maximum contribution applies,
/// overriding the regular-plus-MPF sum. The comparison is strict: a credit
/// of exactly 34750 is still computed from the rates.
pub const SSS_FLAT_CAP_THRESHOLD: Decimal = Decimal::from_parts(34750, 0, 0, false, 0);

/// Flat contribution above the flat cap threshold.
pub const SSS_MAXIMUM_CONTRIBUTION: Decimal = Decimal::from_parts(1750, 0, 0, false, 0);

/// The result of calculating the SSS contribution, including the audit step.
#[derive(Debug, Clone)]
pub struct SssContributionResult {
    /// The monthly salary credit the contribution was computed from.
    pub salary_credit: Decimal,
    /// The regular contribution portion (zero when the flat minimum applies).
    pub regular: Decimal,
    /// The MPF contribution portion (zero when the flat minimum applies).
    pub mpf: Decimal,
    /// The employee contribution in whole pesos.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee SSS contribution for a monthly salary.
///
/// Salaries below the credit floor pay the flat minimum. Otherwise the
/// salary is clamped into the credit band, the regular 5% share and the
/// 2.5% MPF share (on the credit above 20,000) are rounded separately, and
/// their sum is the contribution. Credits strictly above 34,750 pay the
/// flat maximum of 1,750 instead of the computed sum.
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
/// Returns an `SssContributionResult` with the contribution breakdown and
/// an audit step.
///
/// # Statutory Reference
///
/// RA 11199 (Social Security Act of 2018) and the contribution schedule in
/// effect from January 2025.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_sss_contribution;
/// use rust_decimal::Decimal;
///
/// let result = calculate_sss_contribution(Decimal::from(30000), 1);
/// assert_eq!(result.regular, Decimal::from(1500));
/// assert_eq!(result.mpf, Decimal::from(250));
/// assert_eq!(result.amount, Decimal::from(1750));
/// ```
pub fn calculate_sss_contribution(salary: Decimal, step_number: u32) -> SssContributionResult {
    let monthly_salary = salary.max(Decimal::ZERO);

    if monthly_salary < SSS_SALARY_CREDIT_FLOOR {
        let audit_step = AuditStep {
            step_number,
            rule_id: "sss_contribution".to_string(),
            rule_name: "SSS Contribution".to_string(),
            statute_ref: SSS_STATUTE_REF.to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary.normalize().to_string()
            }),
            output: serde_json::json!({
                "salary_credit": SSS_SALARY_CREDIT_FLOOR.normalize().to_string(),
                "regular": "0",
                "mpf": "0",
                "amount": SSS_MINIMUM_CONTRIBUTION.normalize().to_string(),
                "flat_minimum_applied": true,
                "flat_cap_applied": false
            }),
            reasoning: format!(
                "Monthly salary ₱{} is below ₱{} - flat minimum contribution ₱{} applies",
                monthly_salary.normalize(),
                SSS_SALARY_CREDIT_FLOOR.normalize(),
                SSS_MINIMUM_CONTRIBUTION.normalize()
            ),
        };

        return SssContributionResult {
            salary_credit: SSS_SALARY_CREDIT_FLOOR,
            regular: Decimal::ZERO,
            mpf: Decimal::ZERO,
            amount: SSS_MINIMUM_CONTRIBUTION,
            audit_step,
        };
    }

    let salary_credit = monthly_salary.clamp(SSS_SALARY_CREDIT_FLOOR, SSS_SALARY_CREDIT_CEILING);
    let regular = round_to_peso(salary_credit * SSS_REGULAR_RATE);
    let mpf = if salary_credit > SSS_MPF_THRESHOLD {
        round_to_peso(
            (salary_credit.min(SSS_SALARY_CREDIT_CEILING) - SSS_MPF_THRESHOLD) * SSS_MPF_RATE,
        )
    } else {
        Decimal::ZERO
    };

    if salary_credit > SSS_FLAT_CAP_THRESHOLD {
        let audit_step = AuditStep {
            step_number,
            rule_id: "sss_contribution".to_string(),
            rule_name: "SSS Contribution".to_string(),
            statute_ref: SSS_STATUTE_REF.to_string(),
            input: serde_json::json!({
                "monthly_salary": monthly_salary.normalize().to_string()
            }),
            output: serde_json::json!({
                "salary_credit": salary_credit.normalize().to_string(),
                "regular": regular.normalize().to_string(),
                "mpf": mpf.normalize().to_string(),
                "amount": SSS_MAXIMUM_CONTRIBUTION.normalize().to_string(),
                "flat_minimum_applied": false,
                "flat_cap_applied": true
            }),
            reasoning: format!(
                "Salary credit ₱{} exceeds ₱{} - contribution capped at ₱{}",
                salary_credit.normalize(),
                SSS_FLAT_CAP_THRESHOLD.normalize(),
                SSS_MAXIMUM_CONTRIBUTION.normalize()
            ),
        };

        return SssContributionResult {
            salary_credit,
            regular,
            mpf,
            amount: SSS_MAXIMUM_CONTRIBUTION,
            audit_step,
        };
    }

    let amount = regular + mpf;
    let reasoning = if mpf > Decimal::ZERO {
        format!(
            "Regular: ₱{} x {} = ₱{}; MPF: (₱{} - ₱{}) x {} = ₱{}; total ₱{}",
            salary_credit.normalize(),
            SSS_REGULAR_RATE.normalize(),
            regular.normalize(),
            salary_credit.normalize(),
            SSS_MPF_THRESHOLD.normalize(),
            SSS_MPF_RATE.normalize(),
            mpf.normalize(),
            amount.normalize()
        )
    } else {
        format!(
            "₱{} x {} = ₱{} (salary credit at or below ₱{}, no MPF)",
            salary_credit.normalize(),
            SSS_REGULAR_RATE.normalize(),
            regular.normalize(),
            SSS_MPF_THRESHOLD.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "sss_contribution".to_string(),
        rule_name: "SSS Contribution".to_string(),
        statute_ref: SSS_STATUTE_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "salary_credit": salary_credit.normalize().to_string(),
            "regular": regular.normalize().to_string(),
            "mpf": mpf.normalize().to_string(),
            "amount": amount.normalize().to_string(),
            "flat_minimum_applied": false,
            "flat_cap_applied": false
        }),
        reasoning,
    };

    SssContributionResult {
        salary_credit,
        regular,
        mpf,
        amount,
        audit_step,
    }
}
