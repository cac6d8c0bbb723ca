//! Calculation logic for the Payroll Computation Engine.
//!
//! This module contains all the calculation functions for producing a
//! monthly payslip: peso rounding, SSS contribution calculation, PhilHealth
//! premium calculation, Pag-IBIG contribution calculation, withholding tax
//! from the monthly bracket table, total earnings and total deductions
//! aggregation, net salary, and the payslip assembly that runs the full
//! sequence.

mod deductions;
mod earnings;
mod net_salary;
mod pagibig;
mod payslip;
mod philhealth;
mod rounding;
mod sss;
mod withholding_tax;

pub use deductions::{DEDUCTIONS_STATUTE_REF, TotalDeductionsResult, calculate_total_deductions};
pub use earnings::{EARNINGS_STATUTE_REF, TotalEarningsResult, calculate_total_earnings};
pub use net_salary::{NET_SALARY_STATUTE_REF, NetSalaryResult, calculate_net_salary};
pub use pagibig::{
    PAGIBIG_FUND_SALARY_CEILING, PAGIBIG_LOWER_RATE, PAGIBIG_LOWER_RATE_THRESHOLD,
    PAGIBIG_STATUTE_REF, PAGIBIG_UPPER_RATE, PagIbigContributionResult,
    calculate_pagibig_contribution,
};
pub use payslip::calculate_payslip;
pub use philhealth::{
    PHILHEALTH_PREMIUM_RATE, PHILHEALTH_SALARY_CEILING, PHILHEALTH_SALARY_FLOOR,
    PHILHEALTH_STATUTE_REF, PhilHealthPremiumResult, calculate_philhealth_premium,
};
pub use rounding::round_to_peso;
pub use sss::{
    SSS_FLAT_CAP_THRESHOLD, SSS_MAXIMUM_CONTRIBUTION, SSS_MINIMUM_CONTRIBUTION, SSS_MPF_RATE,
    SSS_MPF_THRESHOLD, SSS_REGULAR_RATE, SSS_SALARY_CREDIT_CEILING, SSS_SALARY_CREDIT_FLOOR,
    SSS_STATUTE_REF, SssContributionResult, calculate_sss_contribution,
};
pub use withholding_tax::{
    MONTHLY_TAX_BRACKETS, TaxBracket, WITHHOLDING_TAX_STATUTE_REF, WithholdingTaxResult,
    calculate_withholding_tax,
};
