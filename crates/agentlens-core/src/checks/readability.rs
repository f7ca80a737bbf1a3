//! Flesch Reading Ease scoring over extracted plain text
//!
//! Syllables are approximated as vowel-letter clusters with a floor of
//! one per word; the raw Flesch value is then mapped onto a normalized
//! score band.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Signal, Thresholds};

const ID: &str = "readability";
const LABEL: &str = "Readability";
const THRESHOLDS: Thresholds = Thresholds::new(80, 50);

pub fn check(text: &str) -> Signal {
    let raw = flesch_reading_ease(text);
    let display = raw.clamp(0.0, 100.0).round() as i32;

    // Band the raw value: the normalized score carries the status.
    let (score, band) = if raw >= 70.0 {
        (100, "easy to read")
    } else if raw >= 50.0 {
        (80, "fairly readable")
    } else if raw >= 30.0 {
        (50, "difficult to read")
    } else {
        (20, "very difficult to read")
    };

    let details = format!("Flesch Reading Ease {display} ({band})");
    let recommendation = if score >= 80 {
        "Keep sentences short and vocabulary simple"
    } else {
        "Shorten sentences and prefer plain words to improve comprehension"
    };

    Signal::new(ID, LABEL, score, THRESHOLDS, details, recommendation)
}

/// Raw Flesch Reading Ease value; 0.0 when there are no sentences or
/// no words.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let sentences = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences == 0 || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|word| syllable_count(word)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Vowel-cluster syllable estimate, floored at one per word.
fn syllable_count(word: &str) -> usize {
    static VOWEL_CLUSTERS: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)[aeiouy]+").expect("invalid vowel regex"));

    VOWEL_CLUSTERS.find_iter(word).count().max(1)
}
