//! Payroll Computation Engine for Philippine Monthly Payroll
//!
//! This crate provides functionality for computing Philippine monthly payroll:
//! statutory employee contributions (SSS, PhilHealth, Pag-IBIG), withholding tax
//! under the TRAIN monthly schedule, and payslip assembly with a full audit trace.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
