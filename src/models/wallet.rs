//! User profile and wallet balances.

use serde::{Deserialize, Serialize};

/// The three balance buckets the backend tracks per user. Transfers move
/// funds into the topup wallet, which is the only bucket plans draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletKind {
    Deposit,
    Incoming,
    Topup,
}

impl WalletKind {
    /// Wallet identifier the transfer endpoint expects.
    pub fn api_name(&self) -> &'static str {
        match self {
            WalletKind::Deposit => "depositWallet",
            WalletKind::Incoming => "incomingWallet",
            WalletKind::Topup => "topupWallet",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "deposit" | "depositwallet" => Some(WalletKind::Deposit),
            "incoming" | "incomingwallet" => Some(WalletKind::Incoming),
            "topup" | "topupwallet" => Some(WalletKind::Topup),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WalletKind::Deposit => "Deposit",
            WalletKind::Incoming => "Incoming",
            WalletKind::Topup => "Topup",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletBalances {
    #[serde(rename = "depositWallet")]
    pub deposit_wallet: Option<f64>,
    #[serde(rename = "incomingWallet")]
    pub incoming_wallet: Option<f64>,
    #[serde(rename = "topupWallet")]
    pub topup_wallet: Option<f64>,
}

impl WalletBalances {
    /// Missing buckets read as zero.
    pub fn balance(&self, kind: WalletKind) -> f64 {
        let raw = match kind {
            WalletKind::Deposit => self.deposit_wallet,
            WalletKind::Incoming => self.incoming_wallet,
            WalletKind::Topup => self.topup_wallet,
        };
        raw.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferralLink {
    #[serde(rename = "referCode")]
    pub refer_code: Option<String>,
}

/// The profile payload behind `get-user-info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "referralLink")]
    pub referral_link: Option<ReferralLink>,
    pub wallet: Option<WalletBalances>,
}

impl UserInfo {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn refer_code(&self) -> &str {
        self.referral_link
            .as_ref()
            .and_then(|r| r.refer_code.as_deref())
            .unwrap_or("")
    }

    pub fn balance(&self, kind: WalletKind) -> f64 {
        self.wallet
            .as_ref()
            .map(|w| w.balance(kind))
            .unwrap_or(0.0)
    }
}
