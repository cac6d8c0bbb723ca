//! Total earnings calculation functionality.
//!
//! This module sums the monthly base salary and the earnings-side pay heads
//! into the gross earnings figure the rest of the payslip is computed from.
//! No rounding happens here; pay head amounts keep their centavos.

use rust_decimal::Decimal;

use crate::models::{AuditStep, PayHead};

/// The statutory basis for the wage aggregation.
pub const EARNINGS_STATUTE_REF: &str = "Labor Code Art. 97(f)";

/// The result of calculating total earnings, including the audit step.
#[derive(Debug, Clone)]
pub struct TotalEarningsResult {
    /// The base salary included in the total, never negative.
    pub base_salary: Decimal,
    /// The summed amounts of the earnings pay heads.
    pub pay_head_earnings: Decimal,
    /// Base salary plus earnings pay heads.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates total earnings from the base salary and the earnings pay heads.
///
/// Deductions-side pay heads are ignored. Negative base salaries are
/// treated as zero; pay head amounts are non-negative by the time they
/// reach the calculation (the request boundary rejects negatives).
///
/// # Arguments
///
/// * `base_salary` - The monthly base salary
/// * `pay_heads` - All pay heads for the month, both kinds
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `TotalEarningsResult` with the earnings breakdown and an
/// audit step.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_total_earnings;
/// use payroll_engine::models::{PayHead, PayHeadKind};
/// use rust_decimal::Decimal;
///
/// let pay_heads = vec![PayHead {
///     name: "Rice Allowance".to_string(),
///     amount: Decimal::from(2000),
///     kind: PayHeadKind::Earnings,
/// }];
/// let result = calculate_total_earnings(Decimal::from(30000), &pay_heads, 1);
/// assert_eq!(result.total, Decimal::from(32000));
/// ```
pub fn calculate_total_earnings(
    base_salary: Decimal,
    pay_heads: &[PayHead],
    step_number: u32,
) -> TotalEarningsResult {
    let base_salary = base_salary.max(Decimal::ZERO);
    let pay_head_earnings: Decimal = pay_heads
        .iter()
        .filter(|head| head.is_earnings())
        .map(|head| head.amount)
        .sum();
    let total = base_salary + pay_head_earnings;

    let earnings_heads: Vec<serde_json::Value> = pay_heads
        .iter()
        .filter(|head| head.is_earnings())
        .map(|head| {
            serde_json::json!({
                "name": head.name,
                "amount": head.amount.normalize().to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_earnings".to_string(),
        rule_name: "Total Earnings".to_string(),
        statute_ref: EARNINGS_STATUTE_REF.to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "earnings_heads": earnings_heads
        }),
        output: serde_json::json!({
            "pay_head_earnings": pay_head_earnings.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "Base salary ₱{} + earnings pay heads ₱{} = ₱{}",
            base_salary.normalize(),
            pay_head_earnings.normalize(),
            total.normalize()
        ),
    };

    TotalEarningsResult {
        base_salary,
        pay_head_earnings,
        total,
        audit_step,
    }
}
