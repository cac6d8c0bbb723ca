//! Net salary calculation functionality.
//!
//! Net salary is total earnings minus total deductions. The difference is
//! reported as-is: when deductions exceed earnings the net is negative and
//! the caller decides how to surface it.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The statutory basis for the net pay calculation.
pub const NET_SALARY_STATUTE_REF: &str = "Labor Code Art. 103";

/// The result of calculating net salary, including the audit step.
#[derive(Debug, Clone)]
pub struct NetSalaryResult {
    /// Total earnings minus total deductions. May be negative.
    pub net_salary: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates net salary from total earnings and total deductions.
///
/// # Arguments
///
/// * `total_earnings` - The total earnings for the month
/// * `total_deductions` - The total deductions for the month
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `NetSalaryResult` with the net salary and an audit step.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_net_salary(Decimal::from(32000), Decimal::from(5275), 7);
/// assert_eq!(result.net_salary, Decimal::from(26725));
/// ```
pub fn calculate_net_salary(
    total_earnings: Decimal,
    total_deductions: Decimal,
    step_number: u32,
) -> NetSalaryResult {
    let net_salary = total_earnings - total_deductions;

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        statute_ref: NET_SALARY_STATUTE_REF.to_string(),
        input: serde_json::json!({
            "total_earnings": total_earnings.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_salary": net_salary.normalize().to_string()
        }),
        reasoning: format!(
            "₱{} - ₱{} = ₱{}",
            total_earnings.normalize(),
            total_deductions.normalize(),
            net_salary.normalize()
        ),
    };

    NetSalaryResult {
        net_salary,
        audit_step,
    }
}
