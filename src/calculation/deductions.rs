//! Total deductions calculation functionality.
//!
//! This module runs the four statutory calculations in their fixed order
//! (SSS, PhilHealth, Pag-IBIG, withholding tax), adds the deductions-side
//! pay heads, and produces the total deducted from earnings. Each statutory
//! calculation contributes its own audit step, followed by a summary step
//! for the total.

use rust_decimal::Decimal;

use crate::calculation::pagibig::calculate_pagibig_contribution;
use crate::calculation::philhealth::calculate_philhealth_premium;
use crate::calculation::sss::calculate_sss_contribution;
use crate::calculation::withholding_tax::calculate_withholding_tax;
use crate::models::{AuditStep, PayHead};

/// The statutory basis for the deduction aggregation.
pub const DEDUCTIONS_STATUTE_REF: &str = "Labor Code Art. 113";

/// The result of calculating total deductions, including all audit steps.
#[derive(Debug, Clone)]
pub struct TotalDeductionsResult {
    /// The SSS contribution in whole pesos.
    pub sss: Decimal,
    /// The PhilHealth premium in whole pesos.
    pub philhealth: Decimal,
    /// The Pag-IBIG contribution in whole pesos.
    pub pagibig: Decimal,
    /// The withholding tax in whole pesos.
    pub withholding_tax: Decimal,
    /// The summed amounts of the deductions pay heads.
    pub pay_head_deductions: Decimal,
    /// All statutory amounts plus deductions pay heads.
    pub total: Decimal,
    /// The audit steps for the four statutory calculations and the total,
    /// in calculation order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates total deductions for a monthly salary.
///
/// The statutory contributions are computed on the base salary; withholding
/// tax is computed on the taxable income (total earnings). Earnings-side
/// pay heads are ignored. Five audit steps are produced, numbered from
/// `step_number`.
///
/// # Arguments
///
/// * `base_salary` - The monthly base salary the contributions are based on
/// * `pay_heads` - All pay heads for the month, both kinds
/// * `taxable_income` - The income withholding tax is computed on
/// * `step_number` - The step number of the first audit step
///
/// # Returns
///
/// Returns a `TotalDeductionsResult` with the deduction breakdown and the
/// audit steps.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_total_deductions;
/// use rust_decimal::Decimal;
///
/// let result = calculate_total_deductions(
///     Decimal::from(30000),
///     &[],
///     Decimal::from(30000),
///     2,
/// );
/// assert_eq!(result.sss, Decimal::from(1750));
/// assert_eq!(result.philhealth, Decimal::from(750));
/// assert_eq!(result.pagibig, Decimal::from(100));
/// assert_eq!(result.withholding_tax, Decimal::from(1375));
/// assert_eq!(result.total, Decimal::from(3975));
/// ```
pub fn calculate_total_deductions(
    base_salary: Decimal,
    pay_heads: &[PayHead],
    taxable_income: Decimal,
    step_number: u32,
) -> TotalDeductionsResult {
    let sss_result = calculate_sss_contribution(base_salary, step_number);
    let philhealth_result = calculate_philhealth_premium(base_salary, step_number + 1);
    let pagibig_result = calculate_pagibig_contribution(base_salary, step_number + 2);
    let tax_result = calculate_withholding_tax(taxable_income, step_number + 3);

    let pay_head_deductions: Decimal = pay_heads
        .iter()
        .filter(|head| head.is_deductions())
        .map(|head| head.amount)
        .sum();

    let statutory_total =
        sss_result.amount + philhealth_result.amount + pagibig_result.amount + tax_result.amount;
    let total = statutory_total + pay_head_deductions;

    let deductions_heads: Vec<serde_json::Value> = pay_heads
        .iter()
        .filter(|head| head.is_deductions())
        .map(|head| {
            serde_json::json!({
                "name": head.name,
                "amount": head.amount.normalize().to_string()
            })
        })
        .collect();

    let total_step = AuditStep {
        step_number: step_number + 4,
        rule_id: "total_deductions".to_string(),
        rule_name: "Total Deductions".to_string(),
        statute_ref: DEDUCTIONS_STATUTE_REF.to_string(),
        input: serde_json::json!({
            "sss": sss_result.amount.normalize().to_string(),
            "philhealth": philhealth_result.amount.normalize().to_string(),
            "pagibig": pagibig_result.amount.normalize().to_string(),
            "withholding_tax": tax_result.amount.normalize().to_string(),
            "deductions_heads": deductions_heads
        }),
        output: serde_json::json!({
            "pay_head_deductions": pay_head_deductions.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "SSS ₱{} + PhilHealth ₱{} + Pag-IBIG ₱{} + withholding tax ₱{} + deductions pay heads ₱{} = ₱{}",
            sss_result.amount.normalize(),
            philhealth_result.amount.normalize(),
            pagibig_result.amount.normalize(),
            tax_result.amount.normalize(),
            pay_head_deductions.normalize(),
            total.normalize()
        ),
    };

    let audit_steps = vec![
        sss_result.audit_step,
        philhealth_result.audit_step,
        pagibig_result.audit_step,
        tax_result.audit_step,
        total_step,
    ];

    TotalDeductionsResult {
        sss: sss_result.amount,
        philhealth: philhealth_result.amount,
        pagibig: pagibig_result.amount,
        withholding_tax: tax_result.amount,
        pay_head_deductions,
        total,
        audit_steps,
    }
}
