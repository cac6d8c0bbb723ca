//! Pag-IBIG contribution calculation functionality.
//!
//! This module computes the employee share of the monthly Pag-IBIG (HDMF)
//! contribution: a two-tier rate on the monthly salary capped at the fund
//! salary ceiling. Unlike SSS and PhilHealth there is no salary floor, so
//! a zero salary contributes nothing.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_to_peso;
use crate::models::AuditStep;

/// The statute governing Pag-IBIG contributions.
pub const PAGIBIG_STATUTE_REF: &str = "RA 9679";

/// The fund salary ceiling. Salaries above this contribute on the ceiling.
pub const PAGIBIG_FUND_SALARY_CEILING: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Contribution base at or below which the lower rate applies.
pub const PAGIBIG_LOWER_RATE_THRESHOLD: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// Employee rate for contribution bases at or below the threshold (1%).
pub const PAGIBIG_LOWER_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Employee rate for contribution bases above the threshold (2%).
pub const PAGIBIG_UPPER_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// The result of calculating the Pag-IBIG contribution, including the
/// audit step.
#[derive(Debug, Clone)]
pub struct PagIbigContributionResult {
    /// The capped salary the contribution was computed from.
    pub contribution_base: Decimal,
    /// The rate selected for the contribution base.
    pub rate: Decimal,
    /// The employee contribution in whole pesos.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee Pag-IBIG contribution for a monthly salary.
///
/// The salary is capped at the 5,000 fund salary ceiling, then a 1% rate
/// applies for bases at or below 1,500 and a 2% rate above it, rounded to
/// the nearest peso. At the ceiling the contribution is 100.
///
/// Negative salaries are treated as zero, which contributes nothing.
///
/// # Arguments
///
/// * `salary` - The monthly base salary
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `PagIbigContributionResult` with the contribution and an
/// audit step.
///
/// # Statutory Reference
///
/// RA 9679 (Home Development Mutual Fund Law of 2009).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_pagibig_contribution;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pagibig_contribution(Decimal::from(30000), 1);
/// assert_eq!(result.amount, Decimal::from(100));
/// ```
pub fn calculate_pagibig_contribution(
    salary: Decimal,
    step_number: u32,
) -> PagIbigContributionResult {
    let monthly_salary = salary.max(Decimal::ZERO);
    let contribution_base = monthly_salary.min(PAGIBIG_FUND_SALARY_CEILING);
    let rate = if contribution_base <= PAGIBIG_LOWER_RATE_THRESHOLD {
        PAGIBIG_LOWER_RATE
    } else {
        PAGIBIG_UPPER_RATE
    };
    let amount = round_to_peso(contribution_base * rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "pagibig_contribution".to_string(),
        rule_name: "Pag-IBIG Contribution".to_string(),
        statute_ref: PAGIBIG_STATUTE_REF.to_string(),
        input: serde_json::json!({
            "monthly_salary": monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "contribution_base": contribution_base.normalize().to_string(),
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "₱{} x {} = ₱{} (employee share, salary capped at ₱{})",
            contribution_base.normalize(),
            rate.normalize(),
            amount.normalize(),
            PAGIBIG_FUND_SALARY_CEILING.normalize()
        ),
    };

    PagIbigContributionResult {
        contribution_base,
        rate,
        amount,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PAG-001: zero salary contributes nothing
    #[test]
    fn test_zero_salary_contributes_nothing() {
        let result = calculate_pagibig_contribution(Decimal::ZERO, 1);
        assert_eq!(result.contribution_base, Decimal::ZERO);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    /// PAG-002: negative salary is treated as zero
    #[test]
    fn test_negative_salary_contributes_nothing() {
        let result = calculate_pagibig_contribution(dec("-1000"), 1);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    /// PAG-003: small salary uses the lower rate
    #[test]
    fn test_small_salary_uses_lower_rate() {
        let result = calculate_pagibig_contribution(dec("100"), 1);
        assert_eq!(result.rate, dec("0.01"));
        assert_eq!(result.amount, dec("1"));
    }

    /// PAG-004: half-peso contribution at the lower rate rounds up
    #[test]
    fn test_lower_rate_half_rounds_up() {
        // 1450 x 0.01 = 14.5, which banker's rounding would take to 14.
        let result = calculate_pagibig_contribution(dec("1450"), 1);
        assert_eq!(result.amount, dec("15"));
    }

    /// PAG-005: the lower rate still applies at exactly the threshold
    #[test]
    fn test_lower_rate_at_exact_threshold() {
        let result = calculate_pagibig_contribution(dec("1500"), 1);
        assert_eq!(result.rate, dec("0.01"));
        assert_eq!(result.amount, dec("15"));
    }

    /// PAG-006: one peso over the threshold doubles the rate
    #[test]
    fn test_upper_rate_just_over_threshold() {
        // 1501 x 0.02 = 30.02 -> 30, double the 15 paid at 1500
        let result = calculate_pagibig_contribution(dec("1501"), 1);
        assert_eq!(result.rate, dec("0.02"));
        assert_eq!(result.amount, dec("30"));
    }

    /// PAG-007: half-peso contribution at the upper rate rounds up
    #[test]
    fn test_upper_rate_half_rounds_up() {
        // 1525 x 0.02 = 30.5 -> 31
        let result = calculate_pagibig_contribution(dec("1525"), 1);
        assert_eq!(result.amount, dec("31"));
    }

    /// PAG-008: mid-band salary at the upper rate
    #[test]
    fn test_mid_band_salary() {
        let result = calculate_pagibig_contribution(dec("2000"), 1);
        assert_eq!(result.rate, dec("0.02"));
        assert_eq!(result.amount, dec("40"));
    }

    /// PAG-009: salary just below the ceiling
    #[test]
    fn test_salary_just_below_ceiling() {
        // 4999 x 0.02 = 99.98 -> 100
        let result = calculate_pagibig_contribution(dec("4999"), 1);
        assert_eq!(result.contribution_base, dec("4999"));
        assert_eq!(result.amount, dec("100"));
    }

    /// PAG-010: salary at the ceiling pays the maximum contribution
    #[test]
    fn test_salary_at_ceiling_pays_maximum() {
        let result = calculate_pagibig_contribution(dec("5000"), 1);
        assert_eq!(result.contribution_base, dec("5000"));
        assert_eq!(result.amount, dec("100"));
    }

    /// PAG-011: salary above the ceiling caps at the ceiling
    #[test]
    fn test_salary_above_ceiling_caps() {
        let result = calculate_pagibig_contribution(dec("10000"), 1);
        assert_eq!(result.contribution_base, dec("5000"));
        assert_eq!(result.amount, dec("100"));

        let result = calculate_pagibig_contribution(dec("30000"), 1);
        assert_eq!(result.amount, dec("100"));
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = calculate_pagibig_contribution(dec("30000"), 4);
        assert_eq!(result.audit_step.step_number, 4);
    }

    #[test]
    fn test_audit_step_identifies_rule_and_statute() {
        let result = calculate_pagibig_contribution(dec("2000"), 1);
        assert_eq!(result.audit_step.rule_id, "pagibig_contribution");
        assert_eq!(result.audit_step.statute_ref, "RA 9679");
        assert_eq!(
            result.audit_step.output["contribution_base"].as_str().unwrap(),
            "2000"
        );
        assert_eq!(result.audit_step.output["rate"].as_str().unwrap(), "0.02");
        assert!(result.audit_step.reasoning.contains("₱2000 x 0.02"));
    }
}
