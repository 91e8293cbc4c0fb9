//! Quota report models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot returned by `GET /quotas`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotaReport {
    /// Quota usage keyed by provider name
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderQuota>,
}

impl QuotaReport {
    pub fn provider(&self, name: &str) -> Option<&ProviderQuota> {
        self.providers.get(name)
    }
}

/// Quota windows of one provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderQuota {
    /// Daily window
    pub daily: QuotaWindow,
    /// Other windows or fields the server reports
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Usage counters for one quota window
///
/// `remaining` goes negative once a provider is over quota; a `null`
/// limit means the window is unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaWindow {
    #[serde(default)]
    pub used: i64,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub remaining: Option<i64>,
}

impl QuotaWindow {
    /// Fraction of the limit already used, `None` when unlimited or zero
    pub fn usage_ratio(&self) -> Option<f64> {
        match self.limit {
            Some(limit) if limit > 0 => Some(self.used as f64 / limit as f64),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.remaining, Some(remaining) if remaining <= 0)
    }
}
