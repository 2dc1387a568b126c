//! Client-side validation for wallet-to-wallet transfers. Anything caught
//! here blocks the request entirely; balance rules the backend alone can
//! judge come back through the API error path.

use thiserror::Error;

use crate::api::models::TransferRequest;
use crate::models::wallet::WalletKind;

#[derive(Debug, Error, PartialEq)]
pub enum TransferError {
    #[error("Please enter a valid amount.")]
    InvalidAmount,
    #[error("Insufficient balance in selected wallet.")]
    InsufficientBalance,
}

/// Validate and build a transfer into the topup wallet.
pub fn build_transfer(
    raw_amount: &str,
    source: WalletKind,
    source_balance: f64,
) -> Result<TransferRequest, TransferError> {
    let amount: f64 = raw_amount
        .trim()
        .parse()
        .map_err(|_| TransferError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TransferError::InvalidAmount);
    }
    if amount > source_balance {
        return Err(TransferError::InsufficientBalance);
    }

    Ok(TransferRequest {
        from_wallet: source.api_name().to_string(),
        to_wallet: WalletKind::Topup.api_name().to_string(),
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_amount_is_rejected() {
        assert_eq!(
            build_transfer("ten", WalletKind::Deposit, 100.0),
            Err(TransferError::InvalidAmount)
        );
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        assert_eq!(
            build_transfer("0", WalletKind::Deposit, 100.0),
            Err(TransferError::InvalidAmount)
        );
        assert_eq!(
            build_transfer("-5", WalletKind::Deposit, 100.0),
            Err(TransferError::InvalidAmount)
        );
    }

    #[test]
    fn amount_above_balance_is_rejected() {
        assert_eq!(
            build_transfer("150", WalletKind::Incoming, 100.0),
            Err(TransferError::InsufficientBalance)
        );
    }

    #[test]
    fn valid_transfer_targets_topup_wallet() {
        let request = build_transfer("75.25", WalletKind::Deposit, 100.0).unwrap();
        assert_eq!(request.from_wallet, "depositWallet");
        assert_eq!(request.to_wallet, "topupWallet");
        assert_eq!(request.amount, 75.25);
    }
}
