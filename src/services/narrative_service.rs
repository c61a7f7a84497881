use crate::models::{Direction, FearLevel, MomentumEntry, Regime};

const TICKER_LIST_LIMIT: usize = 3;

/// Fixed narrative for the empty-history report.
pub fn no_data_narrative() -> String {
    "No scan data is available yet.".to_string()
}

/// Compose the report summary from fixed templates. Sentence selection is
/// fully deterministic; sections with no qualifying content are omitted.
pub fn compose_narrative(
    regime: Regime,
    fear: FearLevel,
    momentum: &[MomentumEntry],
) -> String {
    let mut sentences = vec![regime_opener(regime).to_string()];

    if let Some(sentence) = fear_sentence(fear) {
        sentences.push(sentence.to_string());
    }

    let gaining: Vec<&str> = momentum
        .iter()
        .filter(|m| matches!(m.direction, Direction::Up | Direction::New))
        .take(TICKER_LIST_LIMIT)
        .map(|m| m.ticker.as_str())
        .collect();
    if !gaining.is_empty() {
        sentences.push(format!("Attention is building on {}.", gaining.join(", ")));
    }

    let fading: Vec<&str> = momentum
        .iter()
        .filter(|m| m.direction == Direction::Down)
        .take(TICKER_LIST_LIMIT)
        .map(|m| m.ticker.as_str())
        .collect();
    if !fading.is_empty() {
        sentences.push(format!("The narrative is fading for {}.", fading.join(", ")));
    }

    sentences.join(" ")
}

fn regime_opener(regime: Regime) -> &'static str {
    match regime {
        Regime::Euphoria => {
            "Sentiment is running euphoric, with bulls drowning out bears almost entirely."
        }
        Regime::Bullish => "The mood is firmly bullish and risk appetite is high.",
        Regime::LeaningBull => "Sentiment leans bullish, though conviction is moderate.",
        Regime::Neutral => "Sentiment is split with neither bulls nor bears in control.",
        Regime::LeaningBear => {
            "Sentiment leans bearish as caution creeps into the conversation."
        }
        Regime::Bearish => "Bears dominate the conversation and optimism is scarce.",
    }
}

fn fear_sentence(fear: FearLevel) -> Option<&'static str> {
    match fear {
        FearLevel::Extreme => {
            Some("Commodity chatter is flashing extreme fear, led by a spike in gold mentions.")
        }
        FearLevel::High => Some("Gold chatter is elevated, pointing to heightened anxiety."),
        FearLevel::Elevated | FearLevel::Normal => None,
    }
}
