use crate::models::{SentimentSummary, Snapshot, Trend};

/// Summarize bullish/bearish sentiment over a time-sorted snapshot window.
///
/// The ratio string feeds regime classification, so its precedence order
/// matters: a positive bear mean always wins over the infinity case.
pub fn summarize_sentiment(snapshots: &[Snapshot]) -> SentimentSummary {
    if snapshots.is_empty() {
        return SentimentSummary {
            bullish: "0.0".to_string(),
            bearish: "0.0".to_string(),
            ratio: "0".to_string(),
            trend: Trend::Unknown,
        };
    }

    let bull = mean_bullish(snapshots);
    let bear = snapshots
        .iter()
        .map(|s| s.sentiment.map(|g| g.bearish).unwrap_or(0.0))
        .sum::<f64>()
        / snapshots.len() as f64;

    let ratio = if bear > 0.0 {
        format!("{:.2}", bull / bear)
    } else if bull > 0.0 {
        "∞".to_string()
    } else {
        "0".to_string()
    };

    SentimentSummary {
        bullish: format!("{:.1}", bull),
        bearish: format!("{:.1}", bear),
        ratio,
        trend: sentiment_trend(snapshots),
    }
}

/// Compare bullish means of the two window halves. With n <= 1 the first
/// half is empty and averages to zero via the denominator floor of 1.
fn sentiment_trend(snapshots: &[Snapshot]) -> Trend {
    let mid = snapshots.len() / 2;
    let (first, second) = snapshots.split_at(mid);
    let first_avg = mean_bullish(first);
    let second_avg = mean_bullish(second);

    if second_avg > first_avg * 1.1 {
        Trend::Rising
    } else if second_avg < first_avg * 0.9 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn mean_bullish(snapshots: &[Snapshot]) -> f64 {
    let sum: f64 = snapshots
        .iter()
        .map(|s| s.sentiment.map(|g| g.bullish).unwrap_or(0.0))
        .sum();
    sum / snapshots.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentGauge;
    use chrono::{Duration, Utc};
    use std::collections::HashMap;

    fn snap(offset_hours: i64, bullish: f64, bearish: f64) -> Snapshot {
        Snapshot {
            timestamp: Utc::now() - Duration::hours(24) + Duration::hours(offset_hours),
            sentiment: Some(SentimentGauge { bullish, bearish }),
            top_tickers: Vec::new(),
            macro_keywords: HashMap::new(),
            commodity_keywords: HashMap::new(),
            high_engagement: Vec::new(),
        }
    }

    #[test]
    fn empty_window_is_unknown() {
        let summary = summarize_sentiment(&[]);
        assert_eq!(summary.bullish, "0.0");
        assert_eq!(summary.bearish, "0.0");
        assert_eq!(summary.ratio, "0");
        assert_eq!(summary.trend, Trend::Unknown);
    }

    #[test]
    fn means_and_ratio_to_fixed_precision() {
        let snapshots = vec![snap(0, 80.0, 10.0), snap(1, 80.0, 10.0)];
        let summary = summarize_sentiment(&snapshots);
        assert_eq!(summary.bullish, "80.0");
        assert_eq!(summary.bearish, "10.0");
        assert_eq!(summary.ratio, "8.00");
    }

    #[test]
    fn zero_bear_with_bull_renders_infinity() {
        let snapshots = vec![snap(0, 55.0, 0.0), snap(1, 45.0, 0.0)];
        let summary = summarize_sentiment(&snapshots);
        assert_eq!(summary.ratio, "∞");
    }

    #[test]
    fn all_zero_renders_zero_ratio() {
        let snapshots = vec![snap(0, 0.0, 0.0)];
        let summary = summarize_sentiment(&snapshots);
        assert_eq!(summary.ratio, "0");
    }

    #[test]
    fn missing_gauge_counts_as_zero() {
        let mut no_gauge = snap(0, 0.0, 0.0);
        no_gauge.sentiment = None;
        let snapshots = vec![no_gauge, snap(1, 60.0, 20.0)];
        let summary = summarize_sentiment(&snapshots);
        assert_eq!(summary.bullish, "30.0");
        assert_eq!(summary.bearish, "10.0");
    }

    #[test]
    fn trend_rising_when_second_half_exceeds_by_ten_percent() {
        let snapshots = vec![snap(0, 40.0, 10.0), snap(1, 40.0, 10.0), snap(2, 60.0, 10.0), snap(3, 60.0, 10.0)];
        assert_eq!(summarize_sentiment(&snapshots).trend, Trend::Rising);
    }

    #[test]
    fn trend_declining_when_second_half_falls() {
        let snapshots = vec![snap(0, 60.0, 10.0), snap(1, 60.0, 10.0), snap(2, 40.0, 10.0), snap(3, 40.0, 10.0)];
        assert_eq!(summarize_sentiment(&snapshots).trend, Trend::Declining);
    }

    #[test]
    fn trend_stable_within_band() {
        let snapshots = vec![snap(0, 50.0, 10.0), snap(1, 50.0, 10.0), snap(2, 52.0, 10.0), snap(3, 52.0, 10.0)];
        assert_eq!(summarize_sentiment(&snapshots).trend, Trend::Stable);
    }

    #[test]
    fn single_snapshot_with_bullish_reads_rising() {
        // First half empty, mean zero, so any positive bullish value rises.
        let snapshots = vec![snap(0, 30.0, 10.0)];
        assert_eq!(summarize_sentiment(&snapshots).trend, Trend::Rising);
    }
}
