//! Transaction history records as the backend reports them.
//!
//! Every field is optional: the listing endpoint populates rows from several
//! collections and older rows are missing fields. Accessors make the default
//! for each missing field explicit (empty string, 0, epoch) so downstream
//! sorting and filtering never has to guess.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Transaction type as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Topup,
    Withdrawal,
    Transfer,
    Other,
}

impl TransactionKind {
    /// Parse the backend's free-form type string (case-insensitive).
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "topup" => TransactionKind::Topup,
            "withdrawal" => TransactionKind::Withdrawal,
            "transfer" => TransactionKind::Transfer,
            _ => TransactionKind::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Topup => "Topup",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Transfer => "Transfer",
            TransactionKind::Other => "Other",
        }
    }
}

/// Transaction settlement status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
    Other,
}

impl TransactionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "completed" => TransactionStatus::Completed,
            "pending" => TransactionStatus::Pending,
            "failed" => TransactionStatus::Failed,
            _ => TransactionStatus::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Other => "other",
        }
    }
}

/// The user a transaction belongs to, embedded in the listing row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordUser {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One row of the transaction (ROI) history listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "userId")]
    pub user: Option<RecordUser>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "fromWallet")]
    pub from_wallet: Option<String>,
    #[serde(rename = "toWallet")]
    pub to_wallet: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl TransactionRecord {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn user_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .unwrap_or("")
    }

    pub fn user_id(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.id.as_deref())
            .unwrap_or("")
    }

    pub fn kind_raw(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    pub fn kind(&self) -> TransactionKind {
        TransactionKind::parse(self.kind_raw())
    }

    /// Missing amounts count as zero.
    pub fn amount(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// The amount the way the search box sees it: integral values without a
    /// decimal point, everything else in plain decimal notation.
    pub fn amount_text(&self) -> String {
        let amount = self.amount();
        if amount.fract() == 0.0 && amount.abs() < 1e15 {
            format!("{}", amount as i64)
        } else {
            format!("{}", amount)
        }
    }

    pub fn from_wallet(&self) -> &str {
        self.from_wallet.as_deref().unwrap_or("")
    }

    pub fn to_wallet(&self) -> &str {
        self.to_wallet.as_deref().unwrap_or("")
    }

    pub fn status_raw(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> TransactionStatus {
        TransactionStatus::parse(self.status_raw())
    }

    /// Creation time, or the epoch when missing or unparsable.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.timestamp_opt(0, 0).unwrap())
    }
}
