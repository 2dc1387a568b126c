//! Aggregate dashboard statistics.

use serde::{Deserialize, Serialize};

/// Platform-wide totals shown on the admin dashboard. The backend sends
/// every figure at the top level of the payload, all of them optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminStats {
    #[serde(rename = "totalUsers")]
    pub total_users: Option<i64>,
    #[serde(rename = "activeUsers")]
    pub active_users: Option<i64>,
    #[serde(rename = "inactiveUsers")]
    pub inactive_users: Option<i64>,
    #[serde(rename = "totalInvestment")]
    pub total_investment: Option<f64>,
    #[serde(rename = "totalEarning")]
    pub total_earning: Option<f64>,
    #[serde(rename = "totalIncome")]
    pub total_income: Option<f64>,
    #[serde(rename = "totalWithdrawal")]
    pub total_withdrawal: Option<f64>,
    #[serde(rename = "totalBrokerage")]
    pub total_brokerage: Option<f64>,
    #[serde(rename = "totalPlans")]
    pub total_plans: Option<i64>,
}

impl AdminStats {
    pub fn total_users(&self) -> i64 {
        self.total_users.unwrap_or(0)
    }

    pub fn active_users(&self) -> i64 {
        self.active_users.unwrap_or(0)
    }

    pub fn inactive_users(&self) -> i64 {
        self.inactive_users.unwrap_or(0)
    }

    pub fn total_investment(&self) -> f64 {
        self.total_investment.unwrap_or(0.0)
    }

    pub fn total_earning(&self) -> f64 {
        self.total_earning.unwrap_or(0.0)
    }

    pub fn total_income(&self) -> f64 {
        self.total_income.unwrap_or(0.0)
    }

    pub fn total_withdrawal(&self) -> f64 {
        self.total_withdrawal.unwrap_or(0.0)
    }

    pub fn total_brokerage(&self) -> f64 {
        self.total_brokerage.unwrap_or(0.0)
    }

    pub fn total_plans(&self) -> i64 {
        self.total_plans.unwrap_or(0)
    }
}
