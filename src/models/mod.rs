//! Core data models for the Payroll Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod pay_head;
mod payslip;

pub use employee::Employee;
pub use pay_head::{PayHead, PayHeadKind};
pub use payslip::{
    AuditStep, AuditTrace, AuditWarning, LineKind, PayslipLine, PayslipResult, PayslipTotals,
    StatutoryContributions,
};
