//! Investment plan listing entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plan {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "dailyRoi")]
    pub daily_roi: Option<f64>,
    #[serde(rename = "durationDays")]
    pub duration_days: Option<i64>,
    #[serde(rename = "minInvestment")]
    pub min_investment: Option<f64>,
}

impl Plan {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn daily_roi(&self) -> f64 {
        self.daily_roi.unwrap_or(0.0)
    }

    pub fn duration_days(&self) -> i64 {
        self.duration_days.unwrap_or(0)
    }

    pub fn min_investment(&self) -> f64 {
        self.min_investment.unwrap_or(0.0)
    }
}
