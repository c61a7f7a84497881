use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped observation of social-sentiment and mention data,
/// as emitted by the upstream scanner. Immutable once deserialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub sentiment: Option<SentimentGauge>,
    /// Ordered (symbol, mention count) pairs; symbols may carry a leading
    /// `$` marker that is stripped during aggregation.
    #[serde(default)]
    pub top_tickers: Vec<(String, i64)>,
    #[serde(default)]
    pub macro_keywords: HashMap<String, i64>,
    #[serde(default)]
    pub commodity_keywords: HashMap<String, i64>,
    #[serde(default)]
    pub high_engagement: Vec<EngagedPost>,
}

/// Bullish/bearish percentages reported by one scan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentGauge {
    #[serde(default)]
    pub bullish: f64,
    #[serde(default)]
    pub bearish: f64,
}

/// A high-engagement post captured by a scan. Older scanner versions used
/// `username`/`engagement`/`content` for the same fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagedPost {
    #[serde(default, alias = "username")]
    pub author: String,
    #[serde(default, alias = "engagement")]
    pub likes: i64,
    #[serde(default, alias = "content")]
    pub text: String,
    #[serde(default)]
    pub url: Option<String>,
}
