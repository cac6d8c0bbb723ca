//! Payslip assembly functionality.
//!
//! This module runs the full monthly calculation sequence for one employee
//! and assembles the result: total earnings first, then the deduction
//! sequence with withholding tax on total earnings, then net salary. The
//! itemized lines, statutory figures, totals, and the complete audit trace
//! are packaged into a [`PayslipResult`].

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::deductions::calculate_total_deductions;
use crate::calculation::earnings::calculate_total_earnings;
use crate::calculation::net_salary::calculate_net_salary;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Employee, LineKind, PayHead, PayslipLine, PayslipResult,
    PayslipTotals, StatutoryContributions,
};

/// Calculates the complete monthly payslip for an employee.
///
/// The calculation never fails: a missing or negative base salary is
/// treated as zero and reported as a warning, and a net salary below zero
/// is reported as-is with a high-severity warning. Callers wanting to
/// reject bad input do so before calling, via the model `validate`
/// methods.
///
/// Audit steps are numbered 1 through 7: total earnings, the four
/// statutory calculations, total deductions, net salary.
///
/// # Arguments
///
/// * `employee` - The employee the payslip is for
/// * `pay_heads` - The pay heads to apply for the month, both kinds
/// * `pay_month` - The payroll month the payslip covers
///
/// # Returns
///
/// Returns a `PayslipResult` with itemized lines, statutory figures,
/// totals, and the audit trace.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payslip;
/// use payroll_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     base_salary: Some(Decimal::from(30000)),
/// };
/// let pay_month = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
///
/// let payslip = calculate_payslip(&employee, &[], pay_month);
/// assert_eq!(payslip.totals.total_deductions, Decimal::from(3975));
/// assert_eq!(payslip.totals.net_salary, Decimal::from(26025));
/// ```
pub fn calculate_payslip(
    employee: &Employee,
    pay_heads: &[PayHead],
    pay_month: NaiveDate,
) -> PayslipResult {
    let start_time = Instant::now();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    match employee.base_salary {
        None => warnings.push(AuditWarning {
            code: "MISSING_BASE_SALARY".to_string(),
            message: format!(
                "Employee {} has no base salary; treated as zero",
                employee.id
            ),
            severity: "medium".to_string(),
        }),
        Some(salary) if salary < Decimal::ZERO => warnings.push(AuditWarning {
            code: "NEGATIVE_BASE_SALARY".to_string(),
            message: format!(
                "Employee {} base salary ₱{} is negative; treated as zero",
                employee.id,
                salary.normalize()
            ),
            severity: "medium".to_string(),
        }),
        Some(_) => {}
    }

    let base_salary = employee.monthly_salary();

    let earnings_result = calculate_total_earnings(base_salary, pay_heads, 1);
    let deductions_result =
        calculate_total_deductions(base_salary, pay_heads, earnings_result.total, 2);
    let net_result = calculate_net_salary(earnings_result.total, deductions_result.total, 7);

    if net_result.net_salary < Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "NEGATIVE_NET_SALARY".to_string(),
            message: format!(
                "Deductions ₱{} exceed earnings ₱{}",
                deductions_result.total.normalize(),
                earnings_result.total.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    let mut earnings_lines = vec![PayslipLine {
        label: "Basic Salary".to_string(),
        kind: LineKind::BasicPay,
        amount: base_salary,
    }];
    earnings_lines.extend(
        pay_heads
            .iter()
            .filter(|head| head.is_earnings())
            .map(|head| PayslipLine {
                label: head.name.clone(),
                kind: LineKind::Earning,
                amount: head.amount,
            }),
    );

    let mut deduction_lines = vec![
        PayslipLine {
            label: "SSS Contribution".to_string(),
            kind: LineKind::Sss,
            amount: deductions_result.sss,
        },
        PayslipLine {
            label: "PhilHealth Contribution".to_string(),
            kind: LineKind::Philhealth,
            amount: deductions_result.philhealth,
        },
        PayslipLine {
            label: "Pag-IBIG Contribution".to_string(),
            kind: LineKind::Pagibig,
            amount: deductions_result.pagibig,
        },
        PayslipLine {
            label: "Withholding Tax".to_string(),
            kind: LineKind::WithholdingTax,
            amount: deductions_result.withholding_tax,
        },
    ];
    deduction_lines.extend(
        pay_heads
            .iter()
            .filter(|head| head.is_deductions())
            .map(|head| PayslipLine {
                label: head.name.clone(),
                kind: LineKind::Deduction,
                amount: head.amount,
            }),
    );

    let mut audit_steps: Vec<AuditStep> = Vec::with_capacity(7);
    audit_steps.push(earnings_result.audit_step);
    audit_steps.extend(deductions_result.audit_steps);
    audit_steps.push(net_result.audit_step);

    let duration_us = start_time.elapsed().as_micros() as u64;

    PayslipResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        pay_month,
        earnings: earnings_lines,
        deductions: deduction_lines,
        contributions: StatutoryContributions {
            sss: deductions_result.sss,
            philhealth: deductions_result.philhealth,
            pagibig: deductions_result.pagibig,
        },
        withholding_tax: deductions_result.withholding_tax,
        totals: PayslipTotals {
            total_earnings: earnings_result.total,
            total_deductions: deductions_result.total,
            net_salary: net_result.net_salary,
        },
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    }
}
