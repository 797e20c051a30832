//! Simple keyword-based sentiment polarity scoring.
//!
//! Replaces a full NLP sentiment model with a word-list score. Only the
//! crisis escalation path consumes this, so coarse is fine.

const POSITIVE: &[&str] = &[
    "good", "great", "happy", "glad", "love", "joy", "wonderful", "thanks", "thank", "grateful",
    "hope", "hopeful", "better", "calm", "peaceful", "proud", "excited", "awesome",
];

const NEGATIVE: &[&str] = &[
    "sad", "awful", "terrible", "horrible", "miserable", "hate", "hopeless", "worthless",
    "useless", "pain", "hurt", "alone", "empty", "unbearable", "never", "nothing", "burden",
    "tired", "exhausted", "die", "dead",
];

/// Score text for emotional valence.
///
/// Returns a value in `[-1.0, 1.0]` (negative to positive). Neutral or
/// empty text scores 0.0.
pub fn polarity(text: &str) -> f32 {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let pos = words.iter().filter(|w| POSITIVE.contains(w)).count() as f32;
    let neg = words.iter().filter(|w| NEGATIVE.contains(w)).count() as f32;

    (pos - neg) / (pos + neg + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_text() {
        let v = polarity("the meeting starts at noon");
        assert!((v - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_positive_text() {
        let v = polarity("I feel happy and grateful, thank you");
        assert!(v > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let v = polarity("everything is terrible and hopeless");
        assert!(v < 0.0);
    }

    #[test]
    fn test_extreme_negative_crosses_crisis_threshold() {
        let v = polarity("hopeless worthless useless empty unbearable pain never nothing");
        assert!(v < -0.8, "expected < -0.8, got {v}");
    }

    #[test]
    fn test_whole_words_only() {
        // "die" must not fire inside "diet"
        let v = polarity("I started a new diet");
        assert!((v - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_text() {
        assert!((polarity("") - 0.0).abs() < 0.01);
    }
}
