//! Payslip result models for the Payroll Computation Engine.
//!
//! This module contains the [`PayslipResult`] type and its associated
//! structures that capture all outputs from a payroll calculation, including
//! itemized earnings and deduction lines, statutory contribution figures,
//! totals, and audit traces.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies what a payslip line represents.
///
/// Statutory deductions get their own kinds so a consumer can pick them out
/// of the deduction list without string-matching on labels.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LineKind;
///
/// let kind = LineKind::BasicPay;
/// assert_eq!(format!("{:?}", kind), "BasicPay");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// The monthly base salary.
    BasicPay,
    /// A caller-supplied earnings pay head.
    Earning,
    /// The SSS employee contribution.
    Sss,
    /// The PhilHealth employee premium.
    Philhealth,
    /// The Pag-IBIG employee contribution.
    Pagibig,
    /// The monthly withholding tax.
    WithholdingTax,
    /// A caller-supplied deduction pay head.
    Deduction,
}

/// A single line item on a payslip.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{LineKind, PayslipLine};
/// use rust_decimal::Decimal;
///
/// let line = PayslipLine {
///     label: "Basic Salary".to_string(),
///     kind: LineKind::BasicPay,
///     amount: Decimal::from(30000),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// The display label for this line (e.g. "SSS Contribution").
    pub label: String,
    /// What the line represents.
    pub kind: LineKind,
    /// The line amount in pesos.
    pub amount: Decimal,
}

/// The three statutory contribution amounts for a payroll run.
///
/// Withholding tax is reported separately on the payslip because it is
/// computed from taxable income rather than from the base salary alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryContributions {
    /// SSS employee contribution (RA 11199).
    pub sss: Decimal,
    /// PhilHealth employee premium (RA 11223).
    pub philhealth: Decimal,
    /// Pag-IBIG employee contribution (RA 9679).
    pub pagibig: Decimal,
}

/// Aggregated totals for a payroll calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayslipTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayslipTotals {
///     total_earnings: Decimal::from(32000),
///     total_deductions: Decimal::from(5275),
///     net_salary: Decimal::from(26725),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipTotals {
    /// Base salary plus all earnings pay heads.
    pub total_earnings: Decimal,
    /// Statutory contributions plus withholding tax plus deduction pay heads.
    pub total_deductions: Decimal,
    /// Total earnings minus total deductions. May be negative.
    pub net_salary: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute or regulation governing this rule.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate input conditions that don't prevent calculation
/// but may require attention upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency and compliance.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll calculation.
///
/// This struct captures all outputs from the payroll computation engine,
/// including itemized earning and deduction lines, the statutory
/// contribution figures, totals, and a complete audit trace for
/// transparency and compliance.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{
///     AuditTrace, PayslipResult, PayslipTotals, StatutoryContributions,
/// };
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayslipResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     pay_month: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     earnings: vec![],
///     deductions: vec![],
///     contributions: StatutoryContributions {
///         sss: Decimal::ZERO,
///         philhealth: Decimal::ZERO,
///         pagibig: Decimal::ZERO,
///     },
///     withholding_tax: Decimal::ZERO,
///     totals: PayslipTotals {
///         total_earnings: Decimal::ZERO,
///         total_deductions: Decimal::ZERO,
///         net_salary: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The payroll month (first day of the month).
    pub pay_month: NaiveDate,
    /// Itemized earning lines (basic pay plus earnings pay heads).
    pub earnings: Vec<PayslipLine>,
    /// Itemized deduction lines (statutory amounts plus deduction pay heads).
    pub deductions: Vec<PayslipLine>,
    /// The three statutory contribution amounts.
    pub contributions: StatutoryContributions,
    /// The monthly withholding tax.
    pub withholding_tax: Decimal,
    /// Aggregated totals for the calculation.
    pub totals: PayslipTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
