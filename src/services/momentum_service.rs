use std::collections::HashMap;

use crate::models::{Direction, MomentumEntry, Snapshot};
use crate::services::mention_service::normalize_symbol;

/// Minimum total history before rate comparison is statistically meaningful.
const MIN_HISTORY: usize = 40;
/// Minimum recent-window size for the same reason.
const MIN_RECENT: usize = 10;
/// Combined mention floor below which a rate change is treated as noise.
const NOISE_FLOOR: i64 = 5;
/// Percent change magnitude required to flag a ticker, strictly exceeded.
const CHANGE_THRESHOLD: i64 = 30;
/// Recent mentions required to flag a ticker with no prior baseline.
const NEW_TICKER_MIN: i64 = 3;
/// Synthetic change value for newly trending tickers.
const NEW_TICKER_CHANGE: i64 = 999;
const MAX_ENTRIES: usize = 12;

/// Flag tickers whose mention rate shifted sharply between the recent
/// window and the prior history.
///
/// Both inputs must be time-sorted ascending; `recent` is the windowed
/// subset of `history`. Rates are mentions per snapshot, which normalizes
/// for unequal bucket sizes. The prior-bucket denominator floors at 1 to
/// avoid division by zero, which slightly inflates prior rates for very
/// short histories (known approximation).
pub fn detect_momentum(history: &[Snapshot], recent: &[Snapshot]) -> Vec<MomentumEntry> {
    if history.len() < MIN_HISTORY || recent.len() < MIN_RECENT {
        return Vec::new();
    }

    let recent_start = recent[0].timestamp;

    let mut recent_scans = 0usize;
    let mut prior_scans = 0usize;
    let mut counts: HashMap<String, (i64, i64)> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for snapshot in history {
        let is_recent = snapshot.timestamp >= recent_start;
        if is_recent {
            recent_scans += 1;
        } else {
            prior_scans += 1;
        }
        for (symbol, count) in &snapshot.top_tickers {
            let key = normalize_symbol(symbol);
            if key.is_empty() {
                continue;
            }
            if !counts.contains_key(&key) {
                order.push(key.clone());
            }
            let bucket = counts.entry(key).or_insert((0, 0));
            if is_recent {
                bucket.0 += count;
            } else {
                bucket.1 += count;
            }
        }
    }

    let mut flagged = Vec::new();
    for ticker in order {
        let (recent_count, prior_count) = counts[&ticker];
        let recent_rate = recent_count as f64 / recent_scans as f64;
        let prior_rate = prior_count as f64 / prior_scans.max(1) as f64;

        if prior_rate > 0.0 {
            if recent_count + prior_count < NOISE_FLOOR {
                continue;
            }
            let change = ((recent_rate - prior_rate) / prior_rate * 100.0).round() as i64;
            if change.abs() > CHANGE_THRESHOLD {
                flagged.push(MomentumEntry {
                    ticker,
                    recent_rate: format!("{:.2}", recent_rate),
                    prior_rate: format!("{:.2}", prior_rate),
                    change,
                    direction: if change > 0 { Direction::Up } else { Direction::Down },
                });
            }
        } else if recent_count >= NEW_TICKER_MIN {
            flagged.push(MomentumEntry {
                ticker,
                recent_rate: format!("{:.2}", recent_rate),
                prior_rate: format!("{:.2}", prior_rate),
                change: NEW_TICKER_CHANGE,
                direction: Direction::New,
            });
        }
    }

    flagged.sort_by(|a, b| b.change.abs().cmp(&a.change.abs()));
    flagged.truncate(MAX_ENTRIES);
    flagged
}
