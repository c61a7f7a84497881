use serde::{Deserialize, Serialize};

use crate::models::EngagedPost;

/// Discrete market-mood label derived from the bull/bear ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Regime {
    #[serde(rename = "EUPHORIA")]
    Euphoria,
    #[serde(rename = "BULLISH")]
    Bullish,
    #[serde(rename = "LEANING BULL")]
    LeaningBull,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(rename = "LEANING BEAR")]
    LeaningBear,
    #[serde(rename = "BEARISH")]
    Bearish,
}

impl Regime {
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Euphoria => "EUPHORIA",
            Regime::Bullish => "BULLISH",
            Regime::LeaningBull => "LEANING BULL",
            Regime::Neutral => "NEUTRAL",
            Regime::LeaningBear => "LEANING BEAR",
            Regime::Bearish => "BEARISH",
        }
    }

    /// Fixed display color for the tier, carried with the classification.
    pub fn color(&self) -> &'static str {
        match self {
            Regime::Euphoria => "#00e676",
            Regime::Bullish => "#4ade80",
            Regime::LeaningBull => "#a3e635",
            Regime::Neutral => "#facc15",
            Regime::LeaningBear => "#fb923c",
            Regime::Bearish => "#ef4444",
        }
    }
}

/// Regime label plus its display color, as rendered in the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegimeBadge {
    pub label: String,
    pub color: String,
}

impl From<Regime> for RegimeBadge {
    fn from(regime: Regime) -> Self {
        RegimeBadge {
            label: regime.label().to_string(),
            color: regime.color().to_string(),
        }
    }
}

/// Anxiety label derived from gold mention density.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FearLevel {
    Extreme,
    High,
    Elevated,
    Normal,
}

/// Coarse direction of the bullish mean across the window halves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Rising,
    Declining,
    Stable,
    Unknown,
}

/// Mean bullish/bearish percentages and their ratio over the window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentSummary {
    pub bullish: String,
    pub bearish: String,
    pub ratio: String,
    pub trend: Trend,
}

/// One entry of a mention leaderboard (tickers or commodities).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentionCount {
    pub name: String,
    pub mentions: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    New,
}

/// A ticker whose mention rate shifted sharply between the recent window
/// and the prior history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MomentumEntry {
    pub ticker: String,
    pub recent_rate: String,
    pub prior_rate: String,
    pub change: i64,
    pub direction: Direction,
}

/// The assembled market-mood report. Recomputed per request, never
/// persisted; identical inputs produce an identical report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodReport {
    pub window_hours: i64,
    pub regime: RegimeBadge,
    pub fear: FearLevel,
    pub sentiment: SentimentSummary,
    pub tickers: Vec<MentionCount>,
    pub commodities: Vec<MentionCount>,
    pub momentum: Vec<MomentumEntry>,
    pub top_posts: Vec<EngagedPost>,
    pub narrative: String,
    pub scans_in_window: usize,
    pub scans_total: usize,
}
