//! Client-side validation for plan purchases. The platform only sells plan
//! slots in steps of 100; duplicate-plan and balance checks stay backend-side.

use thiserror::Error;

use crate::api::models::PurchaseRequest;

const INVESTMENT_STEP: f64 = 100.0;

#[derive(Debug, Error, PartialEq)]
pub enum PurchaseError {
    #[error("Please enter a valid amount.")]
    InvalidAmount,
    #[error("Investment amount must be at least 100")]
    BelowMinimum,
    #[error("Amount must be a multiple of 100 (e.g., 100, 200, 300...)")]
    NotMultipleOfStep,
}

pub fn build_purchase(plan_id: &str, raw_amount: &str) -> Result<PurchaseRequest, PurchaseError> {
    let amount: f64 = raw_amount
        .trim()
        .parse()
        .map_err(|_| PurchaseError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PurchaseError::InvalidAmount);
    }
    if amount < INVESTMENT_STEP {
        return Err(PurchaseError::BelowMinimum);
    }
    if amount % INVESTMENT_STEP != 0.0 {
        return Err(PurchaseError::NotMultipleOfStep);
    }

    Ok(PurchaseRequest {
        product_id: plan_id.to_string(),
        investment_amount: amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hundred_fifty_is_rejected() {
        assert_eq!(
            build_purchase("p1", "150"),
            Err(PurchaseError::NotMultipleOfStep)
        );
    }

    #[test]
    fn two_hundred_is_accepted() {
        let request = build_purchase("p1", "200").unwrap();
        assert_eq!(request.product_id, "p1");
        assert_eq!(request.investment_amount, 200.0);
    }

    #[test]
    fn below_minimum_is_rejected() {
        assert_eq!(build_purchase("p1", "50"), Err(PurchaseError::BelowMinimum));
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert_eq!(
            build_purchase("p1", "lots"),
            Err(PurchaseError::InvalidAmount)
        );
        assert_eq!(build_purchase("p1", "-200"), Err(PurchaseError::InvalidAmount));
    }
}
