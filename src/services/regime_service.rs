use crate::models::{FearLevel, MentionCount, Regime};

/// Ordered regime bands, inclusive lower bounds, checked top-down.
const REGIME_BANDS: [(f64, Regime); 5] = [
    (5.0, Regime::Euphoria),
    (3.0, Regime::Bullish),
    (1.5, Regime::LeaningBull),
    (0.67, Regime::Neutral),
    (0.33, Regime::LeaningBear),
];

/// Ordered fear bands over gold mentions per scan.
const FEAR_BANDS: [(f64, FearLevel); 3] = [
    (5.0, FearLevel::Extreme),
    (3.0, FearLevel::High),
    (1.5, FearLevel::Elevated),
];

/// Classify the bull/bear ratio string produced by the sentiment
/// aggregator. The "∞" ratio does not parse as a number and is treated
/// explicitly as unbounded bullishness, landing in the top band.
pub fn classify_regime(ratio: &str) -> Regime {
    let value = match ratio.parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => f64::INFINITY,
    };

    for (bound, regime) in REGIME_BANDS {
        if value >= bound {
            return regime;
        }
    }
    Regime::Bearish
}

/// Classify anxiety from gold mention density over the windowed scans.
pub fn classify_fear(commodities: &[MentionCount], scan_count: usize) -> FearLevel {
    let gold = commodities
        .iter()
        .find(|c| c.name == "gold")
        .map(|c| c.mentions)
        .unwrap_or(0);

    let per_scan = if scan_count == 0 {
        0.0
    } else {
        gold as f64 / scan_count as f64
    };

    for (bound, level) in FEAR_BANDS {
        if per_scan >= bound {
            return level;
        }
    }
    FearLevel::Normal
}
