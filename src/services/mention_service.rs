use std::collections::HashMap;

use crate::models::{MentionCount, Snapshot};

pub const DEFAULT_TICKER_LIMIT: usize = 15;

/// Macro keywords folded into commodity totals; everything else under
/// `macroKeywords` is ignored.
const COMMODITY_ALLOWLIST: [&str; 6] = ["gold", "silver", "copper", "oil", "corn", "coffee"];

/// Strip the leading cashtag marker so `$BTC` and `BTC` aggregate together.
pub fn normalize_symbol(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_prefix('$').unwrap_or(trimmed).to_string()
}

/// Per-symbol mention totals across the window, descending by count.
/// Ties keep first-seen order (the sort is stable).
pub fn top_tickers(snapshots: &[Snapshot], limit: usize) -> Vec<MentionCount> {
    let mut ranker = MentionRanker::new();
    for snapshot in snapshots {
        for (symbol, count) in &snapshot.top_tickers {
            let key = normalize_symbol(symbol);
            if !key.is_empty() {
                ranker.add(key, *count);
            }
        }
    }
    let mut ranked = ranker.ranked();
    ranked.truncate(limit);
    ranked
}

/// Commodity mention totals: allow-listed macro keywords plus everything
/// under `commodityKeywords`, descending by count, unlimited.
pub fn top_commodities(snapshots: &[Snapshot]) -> Vec<MentionCount> {
    let mut ranker = MentionRanker::new();
    for snapshot in snapshots {
        for (keyword, count) in &snapshot.macro_keywords {
            if COMMODITY_ALLOWLIST.contains(&keyword.as_str()) {
                ranker.add(keyword.clone(), *count);
            }
        }
        for (keyword, count) in &snapshot.commodity_keywords {
            ranker.add(keyword.clone(), *count);
        }
    }
    ranker.ranked()
}

/// Count accumulator that remembers first-seen order so equal counts rank
/// deterministically.
struct MentionRanker {
    totals: HashMap<String, i64>,
    order: Vec<String>,
}

impl MentionRanker {
    fn new() -> Self {
        Self {
            totals: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn add(&mut self, name: String, count: i64) {
        if !self.totals.contains_key(&name) {
            self.order.push(name.clone());
        }
        *self.totals.entry(name).or_insert(0) += count;
    }

    fn ranked(self) -> Vec<MentionCount> {
        let MentionRanker { totals, order } = self;
        let mut ranked: Vec<MentionCount> = order
            .into_iter()
            .map(|name| {
                let mentions = totals[&name];
                MentionCount { name, mentions }
            })
            .collect();
        ranked.sort_by(|a, b| b.mentions.cmp(&a.mentions));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;

    fn snap_with_tickers(tickers: &[(&str, i64)]) -> Snapshot {
        Snapshot {
            timestamp: Utc::now(),
            sentiment: None,
            top_tickers: tickers
                .iter()
                .map(|(s, c)| (s.to_string(), *c))
                .collect(),
            macro_keywords: HashMap::new(),
            commodity_keywords: HashMap::new(),
            high_engagement: Vec::new(),
        }
    }

    fn snap_with_keywords(macro_kw: &[(&str, i64)], commodity_kw: &[(&str, i64)]) -> Snapshot {
        let mut snapshot = snap_with_tickers(&[]);
        snapshot.macro_keywords = macro_kw.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        snapshot.commodity_keywords = commodity_kw
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        snapshot
    }

    #[test]
    fn marker_stripped_symbols_merge() {
        let snapshots = vec![
            snap_with_tickers(&[("$BTC", 10)]),
            snap_with_tickers(&[("BTC", 5)]),
        ];
        let ranked = top_tickers(&snapshots, DEFAULT_TICKER_LIMIT);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "BTC");
        assert_eq!(ranked[0].mentions, 15);
    }

    #[test]
    fn ranked_descending_with_limit() {
        let snapshots = vec![snap_with_tickers(&[("AAPL", 3), ("TSLA", 9), ("NVDA", 6)])];
        let ranked = top_tickers(&snapshots, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "TSLA");
        assert_eq!(ranked[1].name, "NVDA");
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let snapshots = vec![snap_with_tickers(&[("GME", 4), ("AMC", 4)])];
        let ranked = top_tickers(&snapshots, DEFAULT_TICKER_LIMIT);
        assert_eq!(ranked[0].name, "GME");
        assert_eq!(ranked[1].name, "AMC");
    }

    #[test]
    fn macro_keywords_filtered_by_allowlist() {
        let snapshots = vec![snap_with_keywords(
            &[("gold", 3), ("fed", 9), ("inflation", 7)],
            &[("oil", 2)],
        )];
        let ranked = top_commodities(&snapshots);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["gold", "oil"]);
    }

    #[test]
    fn commodity_keywords_fold_unconditionally() {
        let snapshots = vec![
            snap_with_keywords(&[("gold", 2)], &[("gold", 3), ("uranium", 4)]),
        ];
        let ranked = top_commodities(&snapshots);
        assert!(ranked.contains(&MentionCount { name: "gold".into(), mentions: 5 }));
        assert!(ranked.contains(&MentionCount { name: "uranium".into(), mentions: 4 }));
    }
}
