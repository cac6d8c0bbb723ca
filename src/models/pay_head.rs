//! Pay head models for the Payroll Computation Engine.
//!
//! This module contains the [`PayHead`] and [`PayHeadKind`] types describing
//! the named earnings and deductions a caller attaches to a payroll run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of a pay head: whether it adds to or subtracts from pay.
///
/// The kind is a closed enum, so entries with any other tag are rejected at
/// deserialization rather than silently ignored by the aggregation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayHeadKind;
///
/// let kind = PayHeadKind::Earnings;
/// assert_eq!(format!("{:?}", kind), "Earnings");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayHeadKind {
    /// The amount adds to total earnings (e.g. an allowance or bonus).
    Earnings,
    /// The amount adds to total deductions (e.g. a loan repayment).
    Deductions,
}

/// A single named earning or deduction attached to a payroll run.
///
/// Pay heads are supplied by the caller alongside the base salary. Amounts
/// are expected to be non-negative; [`PayHead::validate`] enforces this at
/// the input boundary while the calculation functions themselves stay total.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayHead, PayHeadKind};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pay_head = PayHead {
///     name: "Travel Allowance".to_string(),
///     amount: Decimal::from_str("2000").unwrap(),
///     kind: PayHeadKind::Earnings,
/// };
/// assert!(pay_head.is_earnings());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayHead {
    /// The display name of the pay head (e.g. "Travel Allowance").
    pub name: String,
    /// The monthly amount. Absent on the wire means zero.
    #[serde(default)]
    pub amount: Decimal,
    /// Whether this entry counts toward earnings or deductions.
    pub kind: PayHeadKind,
}

impl PayHead {
    /// Returns true if this pay head counts toward total earnings.
    pub fn is_earnings(&self) -> bool {
        self.kind == PayHeadKind::Earnings
    }

    /// Returns true if this pay head counts toward total deductions.
    pub fn is_deductions(&self) -> bool {
        self.kind == PayHeadKind::Deductions
    }

    /// Validates the pay head against the engine's input contract.
    ///
    /// The display name must not be empty and the amount must not be
    /// negative. Callers are expected to run this before submitting a
    /// calculation; the calculation functions do not re-check.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the entry is valid, otherwise an
    /// [`EngineError::InvalidPayHead`] describing the problem.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{PayHead, PayHeadKind};
    /// use rust_decimal::Decimal;
    ///
    /// let pay_head = PayHead {
    ///     name: "Salary Loan".to_string(),
    ///     amount: Decimal::from(-50),
    ///     kind: PayHeadKind::Deductions,
    /// };
    /// assert!(pay_head.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidPayHead {
                name: self.name.clone(),
                message: "name must not be empty".to_string(),
            });
        }
        if self.amount < Decimal::ZERO {
            return Err(EngineError::InvalidPayHead {
                name: self.name.clone(),
                message: "amount must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
