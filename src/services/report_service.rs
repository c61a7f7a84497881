use crate::models::{MoodReport, Snapshot};
use crate::services::engagement_service::{self, DEFAULT_POST_LIMIT};
use crate::services::mention_service::{self, DEFAULT_TICKER_LIMIT};
use crate::services::{momentum_service, narrative_service, regime_service, sentiment_service, windowing};

/// Assemble the full market-mood report over the given history.
///
/// Pure orchestration of the analytical components: identical inputs
/// produce an identical report, so it is safe to invoke concurrently.
pub fn build_report(window_hours: i64, snapshots: &[Snapshot]) -> MoodReport {
    let mut history: Vec<Snapshot> = snapshots.to_vec();
    history.sort_by_key(|s| s.timestamp);

    let recent = windowing::recent_window(&history, window_hours);

    let sentiment = sentiment_service::summarize_sentiment(&recent);
    let regime = regime_service::classify_regime(&sentiment.ratio);
    let tickers = mention_service::top_tickers(&recent, DEFAULT_TICKER_LIMIT);
    let commodities = mention_service::top_commodities(&recent);
    let fear = regime_service::classify_fear(&commodities, recent.len());
    let momentum = momentum_service::detect_momentum(&history, &recent);
    let top_posts = engagement_service::top_posts(&recent, DEFAULT_POST_LIMIT);

    let narrative = if history.is_empty() {
        narrative_service::no_data_narrative()
    } else {
        narrative_service::compose_narrative(regime, fear, &momentum)
    };

    MoodReport {
        window_hours,
        regime: regime.into(),
        fear,
        sentiment,
        tickers,
        commodities,
        momentum,
        top_posts,
        narrative,
        scans_in_window: recent.len(),
        scans_total: history.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentGauge;
    use chrono::{Duration, Utc};
    use std::collections::HashMap;

    fn snap(age_minutes: i64, bullish: f64, bearish: f64, tickers: &[(&str, i64)]) -> Snapshot {
        Snapshot {
            timestamp: Utc::now() - Duration::minutes(age_minutes),
            sentiment: Some(SentimentGauge { bullish, bearish }),
            top_tickers: tickers.iter().map(|(s, c)| (s.to_string(), *c)).collect(),
            macro_keywords: HashMap::new(),
            commodity_keywords: HashMap::new(),
            high_engagement: Vec::new(),
        }
    }

    #[test]
    fn empty_history_yields_no_data_report() {
        let report = build_report(24, &[]);
        assert_eq!(report.scans_total, 0);
        assert_eq!(report.scans_in_window, 0);
        assert_eq!(report.sentiment.ratio, "0");
        assert_eq!(report.narrative, "No scan data is available yet.");
        assert!(report.tickers.is_empty());
        assert!(report.momentum.is_empty());
    }

    #[test]
    fn euphoric_window_classifies_and_counts() {
        let history = vec![
            snap(30, 80.0, 10.0, &[("$BTC", 10)]),
            snap(20, 80.0, 10.0, &[("BTC", 5)]),
            snap(60 * 48, 50.0, 50.0, &[("ETH", 3)]), // outside the window
        ];
        let report = build_report(24, &history);
        assert_eq!(report.scans_in_window, 2);
        assert_eq!(report.scans_total, 3);
        assert_eq!(report.regime.label, "EUPHORIA");
        assert_eq!(report.sentiment.ratio, "8.00");
        assert_eq!(report.tickers[0].name, "BTC");
        assert_eq!(report.tickers[0].mentions, 15);
    }

    #[test]
    fn unsorted_input_is_handled() {
        let history = vec![
            snap(10, 60.0, 20.0, &[]),
            snap(90, 40.0, 20.0, &[]),
            snap(50, 50.0, 20.0, &[]),
        ];
        let report = build_report(24, &history);
        assert_eq!(report.scans_in_window, 3);
        // Sorted oldest-first: 40, 50, 60 bullish -> rising second half.
        assert_eq!(report.sentiment.bullish, "50.0");
    }
}
