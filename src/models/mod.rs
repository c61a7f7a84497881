mod report;
mod snapshot;

pub use report::{
    Direction, FearLevel, MentionCount, MomentumEntry, MoodReport, Regime, RegimeBadge,
    SentimentSummary, Trend,
};
pub use snapshot::{EngagedPost, SentimentGauge, Snapshot};
