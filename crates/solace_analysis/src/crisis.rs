//! Crisis screening: self-harm/suicide phrasing, sentiment escalation and
//! immediate-danger patterns.
//!
//! This check runs before and independent of emotion classification. When it
//! fires, the pipeline short-circuits with a crisis response and helpline
//! information regardless of any other branch.

use regex::Regex;
use solace_core::sentiment;
use std::sync::LazyLock;

/// Phrases that always flag a crisis when present as a substring.
const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "want to die",
    "don't want to live",
    "do not want to live",
    "life is not worth living",
    "better off dead",
    "no reason to live",
    "cut myself",
    "self-harm",
    "harm myself",
    "hurt myself",
    "plan to die",
    "ending it all",
    "no way out",
    "can't go on",
    "cannot go on",
    "too much pain",
    "overdose",
    "nobody would miss me",
];

/// Sentiment polarity below this is treated as an escalation on its own.
const SENTIMENT_CRISIS_THRESHOLD: f32 = -0.8;

/// Intent-plus-immediacy phrasing. Each pattern requires both a self-harm
/// verb and an immediacy marker; bare urgency words never fire on their own.
static DANGER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"going to (kill|hurt|harm) myself",
        r"(kill|hurt|harm) myself (right now|tonight|today|this instant|immediately)",
        r"about to (end|take) my (own )?life",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid danger pattern"))
    .collect()
});

/// Screen normalized text for crisis language.
///
/// True if any crisis phrase appears (case-insensitive substring), the
/// sentiment polarity is very negative, or an immediate-danger pattern
/// matches.
pub fn detect(text: &str) -> bool {
    let lower = text.to_lowercase();

    for phrase in CRISIS_PHRASES {
        if lower.contains(phrase) {
            tracing::warn!(phrase, "crisis phrase detected");
            return true;
        }
    }

    let polarity = sentiment::polarity(&lower);
    if polarity < SENTIMENT_CRISIS_THRESHOLD {
        tracing::warn!(polarity, "crisis-level negative sentiment");
        return true;
    }

    for pattern in DANGER_PATTERNS.iter() {
        if pattern.is_match(&lower) {
            tracing::warn!(pattern = pattern.as_str(), "immediate-danger pattern matched");
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_phrases() {
        assert!(detect("I want to end my life"));
        assert!(detect("sometimes i think about suicide"));
        assert!(detect("i want to die, nobody would miss me"));
        assert!(detect("I might hurt myself"));
    }

    #[test]
    fn test_crisis_overrides_emotion_keywords() {
        // Emotion words co-occurring must not mask the crisis phrase.
        assert!(detect("i am so happy to finally end my life"));
    }

    #[test]
    fn test_sentiment_escalation() {
        assert!(detect(
            "hopeless worthless useless empty unbearable pain never nothing"
        ));
    }

    #[test]
    fn test_danger_patterns_need_intent_and_immediacy() {
        assert!(detect("i am going to hurt myself"));
        assert!(detect("i will kill myself tonight"));
        // Immediacy alone is not a crisis.
        assert!(!detect("i need this done right now"));
        assert!(!detect("call me back immediately"));
    }

    #[test]
    fn test_ordinary_distress_is_not_crisis() {
        assert!(!detect("i am really anxious about my upcoming exam"));
        assert!(!detect("i feel sad today"));
        assert!(!detect(""));
    }
}
