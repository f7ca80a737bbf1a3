//! Weighted score aggregation
//!
//! The step order is part of the contract: weighted average, then the
//! strong-content bonus, then the floor raise, then the reputation
//! bonus under the final 100 cap. Reordering changes real scores.

use crate::types::Signal;

/// Fixed weight per signal id. Signals missing from the input count
/// as zero-scored rather than being skipped.
const SIGNAL_WEIGHTS: &[(&str, f64)] = &[
    ("readability", 1.5),
    ("heading-structure", 1.4),
    ("meta-tags", 1.2),
    ("semantic-html", 1.0),
    ("robots-txt", 0.9),
    ("accessibility", 0.9),
    ("sitemap", 0.8),
    ("llms-txt", 0.3),
];

/// The signals whose combined strength earns the content bonus.
const CONTENT_SIGNAL_IDS: &[&str] = &["readability", "heading-structure", "meta-tags"];

pub fn overall_score(signals: &[Signal], reputation_bonus: u8) -> u8 {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for (id, weight) in SIGNAL_WEIGHTS {
        weighted_sum += f64::from(score_of(signals, id)) * weight;
        weight_total += weight;
    }
    let mut base = (weighted_sum / weight_total).round() as i64;

    let strong_content = CONTENT_SIGNAL_IDS
        .iter()
        .filter(|id| score_of(signals, id) >= 60)
        .count();
    if strong_content >= 3 {
        base += 15;
    } else if strong_content >= 2 {
        base += 10;
    }

    // A page with at least one strong signal never reads as hopeless.
    if base < 35 && signals.iter().any(|signal| signal.score >= 80) {
        base = 35;
    }

    (base + i64::from(reputation_bonus)).min(100) as u8
}

fn score_of(signals: &[Signal], id: &str) -> u8 {
    signals
        .iter()
        .find(|signal| signal.id == id)
        .map(|signal| signal.score)
        .unwrap_or(0)
}
