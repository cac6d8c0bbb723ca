//! Request types for the Payroll Computation Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PayHead, PayHeadKind};

/// Request body for the `/calculate` endpoint.
///
/// Contains all information needed to produce one employee's payslip for
/// a payroll month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The payroll month, given as its first day (e.g. "2026-01-01").
    pub pay_month: NaiveDate,
    /// The pay heads to apply for the month.
    #[serde(default)]
    pub pay_heads: Vec<PayHeadRequest>,
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The monthly base salary in pesos. May be omitted, in which case the
    /// calculation proceeds on zero and reports a warning.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
}

/// Pay head information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayHeadRequest {
    /// The display name of the pay head (e.g. "Rice Allowance").
    pub name: String,
    /// The monthly amount in pesos.
    #[serde(default)]
    pub amount: Decimal,
    /// Which side of the payslip the amount lands on.
    pub kind: PayHeadKind,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            base_salary: req.base_salary,
        }
    }
}

impl From<PayHeadRequest> for PayHead {
    fn from(req: PayHeadRequest) -> Self {
        PayHead {
            name: req.name,
            amount: req.amount,
            kind: req.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "base_salary": "30000"
            },
            "pay_month": "2026-01-01",
            "pay_heads": [
                {
                    "name": "Rice Allowance",
                    "amount": "2000",
                    "kind": "earnings"
                },
                {
                    "name": "SSS Loan",
                    "amount": "1000",
                    "kind": "deductions"
                }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.id, "emp_001");
        assert_eq!(
            request.employee.base_salary,
            Some(Decimal::from_str("30000").unwrap())
        );
        assert_eq!(
            request.pay_month,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(request.pay_heads.len(), 2);
        assert_eq!(request.pay_heads[0].kind, PayHeadKind::Earnings);
        assert_eq!(request.pay_heads[1].kind, PayHeadKind::Deductions);
    }

    #[test]
    fn test_deserialize_without_pay_heads() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "base_salary": "30000"
            },
            "pay_month": "2026-01-01"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert!(request.pay_heads.is_empty());
    }

    #[test]
    fn test_deserialize_without_base_salary() {
        let json = r#"{
            "employee": {
                "id": "emp_001"
            },
            "pay_month": "2026-01-01",
            "pay_heads": []
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.base_salary, None);
    }

    #[test]
    fn test_deserialize_unknown_pay_head_kind_fails() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "base_salary": "30000"
            },
            "pay_month": "2026-01-01",
            "pay_heads": [
                {
                    "name": "Signing Bonus",
                    "amount": "5000",
                    "kind": "bonus"
                }
            ]
        }"#;

        let result: Result<CalculationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_employee_conversion() {
        let req = EmployeeRequest {
            id: "emp_001".to_string(),
            base_salary: Some(Decimal::from_str("30000").unwrap()),
        };

        let employee: Employee = req.into();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(
            employee.base_salary,
            Some(Decimal::from_str("30000").unwrap())
        );
    }

    #[test]
    fn test_pay_head_conversion() {
        let req = PayHeadRequest {
            name: "Rice Allowance".to_string(),
            amount: Decimal::from_str("2000").unwrap(),
            kind: PayHeadKind::Earnings,
        };

        let pay_head: PayHead = req.into();
        assert_eq!(pay_head.name, "Rice Allowance");
        assert!(pay_head.is_earnings());
    }
}
