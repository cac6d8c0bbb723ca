//! Employee model for the Payroll Computation Engine.
//!
//! This module defines the slice of an employee record the engine reads:
//! an identifier and the monthly base salary. Everything else about an
//! employee lives with the upstream system that supplies the record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents an employee submitted for payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The monthly base salary. `None` models a record whose salary has
    /// not been set; it is treated as zero when calculating.
    pub base_salary: Option<Decimal>,
}

impl Employee {
    /// Returns the normalized monthly salary used by every calculation.
    ///
    /// An absent salary is treated as zero, and a negative stored salary
    /// is clamped to zero. This is the single place where the raw record
    /// is normalized; the calculation functions receive the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     base_salary: None,
    /// };
    /// assert_eq!(employee.monthly_salary(), Decimal::ZERO);
    ///
    /// let employee = Employee {
    ///     id: "emp_002".to_string(),
    ///     base_salary: Some(Decimal::from(30000)),
    /// };
    /// assert_eq!(employee.monthly_salary(), Decimal::from(30000));
    /// ```
    pub fn monthly_salary(&self) -> Decimal {
        self.base_salary.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
    }

    /// Validates the employee record against the engine's input contract.
    ///
    /// Only the identifier is checked; an absent or negative salary is a
    /// normalizable condition, not an error (it surfaces as an audit
    /// warning on the payslip instead).
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
