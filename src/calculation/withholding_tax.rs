//! Monthly withholding tax calculation functionality.
//!
//! This module computes withholding tax on monthly taxable income using the
//! TRAIN Law revised withholding table effective January 2023: a progressive
//! schedule of six brackets, each charging a base tax plus a marginal rate
//! on the income above the bracket floor.

use rust_decimal::Decimal;

use crate::calculation::rounding::round_to_peso;
use crate::models::AuditStep;

/// The statute governing withholding tax on compensation.
pub const WITHHOLDING_TAX_STATUTE_REF: &str = "RA 10963";

/// A single bracket of the monthly withholding table.
#[derive(Debug, Clone, Copy)]
pub struct TaxBracket {
    /// Upper bound of the bracket, inclusive. `None` for the top bracket.
    pub ceiling: Option<Decimal>,
    /// Lower bound of the bracket. The marginal rate applies to income
    /// above this.
    pub floor: Decimal,
    /// Tax charged at the bracket floor.
    pub base_tax: Decimal,
    /// Marginal rate on income above the bracket floor.
    pub rate: Decimal,
}

/// The monthly withholding table effective January 1, 2023.
///
/// Brackets are ordered by ceiling; selection takes the first bracket whose
/// ceiling the income does not exceed.
pub const MONTHLY_TAX_BRACKETS: [TaxBracket; 6] = [
    TaxBracket {
        ceiling: Some(Decimal::from_parts(20833, 0, 0, false, 0)),
        floor: Decimal::ZERO,
        base_tax: Decimal::ZERO,
        rate: Decimal::ZERO,
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(33333, 0, 0, false, 0)),
        floor: Decimal::from_parts(20833, 0, 0, false, 0),
        base_tax: Decimal::ZERO,
        rate: Decimal::from_parts(15, 0, 0, false, 2),
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(66667, 0, 0, false, 0)),
        floor: Decimal::from_parts(33333, 0, 0, false, 0),
        base_tax: Decimal::from_parts(1875, 0, 0, false, 0),
        rate: Decimal::from_parts(20, 0, 0, false, 2),
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(166667, 0, 0, false, 0)),
        floor: Decimal::from_parts(66667, 0, 0, false, 0),
        base_tax: Decimal::from_parts(1354180, 0, 0, false, 2),
        rate: Decimal::from_parts(25, 0, 0, false, 2),
    },
    TaxBracket {
        ceiling: Some(Decimal::from_parts(666667, 0, 0, false, 0)),
        floor: Decimal::from_parts(166667, 0, 0, false, 0),
        base_tax: Decimal::from_parts(9084180, 0, 0, false, 2),
        rate: Decimal::from_parts(30, 0, 0, false, 2),
    },
    TaxBracket {
        ceiling: None,
        floor: Decimal::from_parts(666667, 0, 0, false, 0),
        base_tax: Decimal::from_parts(40884180, 0, 0, false, 2),
        rate: Decimal::from_parts(35, 0, 0, false, 2),
    },
];

/// The result of calculating withholding tax, including the audit step.
#[derive(Debug, Clone)]
pub struct WithholdingTaxResult {
    /// The taxable income the tax was computed from.
    pub taxable_income: Decimal,
    /// Floor of the bracket the income fell into.
    pub bracket_floor: Decimal,
    /// Base tax of the bracket the income fell into.
    pub base_tax: Decimal,
    /// Marginal rate of the bracket the income fell into.
    pub rate: Decimal,
    /// The withholding tax in whole pesos.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly withholding tax on taxable income.
///
/// The income is matched to the first bracket whose ceiling it does not
/// exceed, then the tax is the bracket's base tax plus its marginal rate
/// applied to the income above the bracket floor, rounded to the nearest
/// peso. Income at or below 20,833 is exempt.
///
/// Negative income is treated as zero.
///
/// # Arguments
///
/// * `taxable_income` - The monthly taxable income
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `WithholdingTaxResult` with the tax, the bracket parameters
/// used, and an audit step.
///
/// # Statutory Reference
///
/// RA 10963 (TRAIN Law), BIR revised withholding table effective
/// January 1, 2023.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_withholding_tax;
/// use rust_decimal::Decimal;
///
/// let result = calculate_withholding_tax(Decimal::from(32000), 1);
/// assert_eq!(result.amount, Decimal::from(1675));
/// ```
pub fn calculate_withholding_tax(taxable_income: Decimal, step_number: u32) -> WithholdingTaxResult {
    let taxable_income = taxable_income.max(Decimal::ZERO);
    let bracket = MONTHLY_TAX_BRACKETS
        .iter()
        .find(|bracket| match bracket.ceiling {
            Some(ceiling) => taxable_income <= ceiling,
            None => true,
        })
        .unwrap_or(&MONTHLY_TAX_BRACKETS[MONTHLY_TAX_BRACKETS.len() - 1]);

    let amount = round_to_peso(bracket.base_tax + (taxable_income - bracket.floor) * bracket.rate);

    let reasoning = if bracket.rate.is_zero() {
        format!(
            "Taxable income ₱{} does not exceed ₱{} - no tax withheld",
            taxable_income.normalize(),
            Decimal::from_parts(20833, 0, 0, false, 0).normalize()
        )
    } else {
        format!(
            "₱{} + (₱{} - ₱{}) x {} = ₱{}",
            bracket.base_tax.normalize(),
            taxable_income.normalize(),
            bracket.floor.normalize(),
            bracket.rate.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding_tax".to_string(),
        rule_name: "Withholding Tax".to_string(),
        statute_ref: WITHHOLDING_TAX_STATUTE_REF.to_string(),
        input: serde_json::json!({
            "taxable_income": taxable_income.normalize().to_string()
        }),
        output: serde_json::json!({
            "bracket_floor": bracket.floor.normalize().to_string(),
            "base_tax": bracket.base_tax.normalize().to_string(),
            "rate": bracket.rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    WithholdingTaxResult {
        taxable_income,
        bracket_floor: bracket.floor,
        base_tax: bracket.base_tax,
        rate: bracket.rate,
        amount,
        audit_step,
    }
}
