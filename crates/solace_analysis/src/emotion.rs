//! Keyword-lexicon emotion scoring.
//!
//! The lexicon is an explicit ordered slice, not a map: on a non-zero score
//! tie the first-declared emotion wins, and that order is part of the
//! contract (see the tie-break test).

use crate::contains_whole;
use solace_core::EmotionLabel;

/// Ordered (label, keywords) lexicon. A whole-word hit scores 2, a bare
/// substring hit scores 1; the substring tier exists to catch inflected
/// forms not listed explicitly ("overwhelming", "fearful").
pub const LEXICON: &[(EmotionLabel, &[&str])] = &[
    (
        EmotionLabel::Sadness,
        &[
            "sad",
            "depressed",
            "unhappy",
            "miserable",
            "hopeless",
            "blue",
            "down",
            "gloomy",
            "heartbroken",
            "melancholy",
            "despair",
            "disappointed",
            "discouraged",
            "defeated",
        ],
    ),
    (
        EmotionLabel::Anxiety,
        &[
            "anxious",
            "worried",
            "worry",
            "nervous",
            "fear",
            "panic",
            "stress",
            "tense",
            "restless",
            "uneasy",
            "dread",
            "apprehensive",
            "paranoid",
            "flustered",
            "on edge",
        ],
    ),
    (
        EmotionLabel::Anger,
        &[
            "angry",
            "mad",
            "furious",
            "rage",
            "hate",
            "annoyed",
            "irritated",
            "frustrated",
            "resentful",
            "bitter",
            "outraged",
            "hostile",
            "enraged",
            "seething",
            "offended",
        ],
    ),
    (
        EmotionLabel::Joy,
        &[
            "happy",
            "joyful",
            "excited",
            "delighted",
            "cheerful",
            "glad",
            "elated",
            "thrilled",
            "ecstatic",
            "pleased",
            "satisfied",
            "optimistic",
            "peaceful",
        ],
    ),
    (
        EmotionLabel::Fear,
        &[
            "scared",
            "terrified",
            "afraid",
            "petrified",
            "alarmed",
            "spooked",
            "startled",
            "horrified",
            "fearful",
            "threatened",
            "intimidated",
            "insecure",
        ],
    ),
    (
        EmotionLabel::Loneliness,
        &[
            "lonely",
            "alone",
            "isolated",
            "abandoned",
            "rejected",
            "disconnected",
            "left out",
            "unwanted",
            "unloved",
            "forgotten",
            "solitary",
        ],
    ),
    (
        EmotionLabel::Grief,
        &[
            "grief",
            "grieving",
            "mourning",
            "loss",
            "bereavement",
            "devastated",
            "heartache",
            "yearning",
            "shattered",
        ],
    ),
    (
        EmotionLabel::Stress,
        &[
            "stressed",
            "pressured",
            "burdened",
            "strained",
            "frazzled",
            "burnout",
            "burned out",
            "overloaded",
            "swamped",
        ],
    ),
    (
        EmotionLabel::SelfDoubt,
        &[
            "worthless",
            "inadequate",
            "failure",
            "incompetent",
            "doubt",
            "useless",
            "inferior",
            "unworthy",
            "undeserving",
            "not good enough",
        ],
    ),
    (
        EmotionLabel::Overwhelm,
        &[
            "overwhelm",
            "overwhelmed",
            "too much",
            "can't cope",
            "cannot cope",
            "drowning",
            "crushed",
            "can't handle",
            "cannot handle",
            "at my limit",
            "exhausted",
            "drained",
            "breaking point",
        ],
    ),
];

/// Score text against the lexicon and return the best label.
///
/// All-zero scores yield `Neutral`. Non-zero ties resolve to the
/// first-declared emotion among the tied maxima.
pub fn classify(text: &str) -> EmotionLabel {
    let lower = text.to_lowercase();
    let mut best: Option<(EmotionLabel, u32)> = None;

    for (label, keywords) in LEXICON {
        let mut score = 0u32;
        for keyword in *keywords {
            if contains_whole(&lower, keyword) {
                score += 2;
            } else if lower.contains(keyword) {
                score += 1;
            }
        }
        // Strictly-greater keeps the earliest declared label on ties.
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((*label, score));
        }
    }

    best.map_or(EmotionLabel::Neutral, |(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_emotion_keywords() {
        assert_eq!(classify("i feel so sad and unhappy"), EmotionLabel::Sadness);
        assert_eq!(
            classify("i am really anxious about my upcoming exam"),
            EmotionLabel::Anxiety
        );
        assert_eq!(classify("i am furious, full of rage"), EmotionLabel::Anger);
        assert_eq!(classify("feeling happy and glad today"), EmotionLabel::Joy);
        assert_eq!(classify("i am terrified and scared"), EmotionLabel::Fear);
        assert_eq!(classify("i feel lonely and isolated"), EmotionLabel::Loneliness);
        assert_eq!(classify("grieving a painful loss"), EmotionLabel::Grief);
        assert_eq!(classify("i am so stressed and swamped"), EmotionLabel::Stress);
        assert_eq!(classify("i feel useless, a failure"), EmotionLabel::SelfDoubt);
        assert_eq!(
            classify("everything is too much, i am drowning"),
            EmotionLabel::Overwhelm
        );
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(classify("the weather report said rain"), EmotionLabel::Neutral);
        assert_eq!(classify(""), EmotionLabel::Neutral);
    }

    #[test]
    fn test_whole_word_outscores_substring() {
        // "stressed" whole-word hits stress (2) while anxiety only gets the
        // embedded "stress" substring (1); stress must win.
        assert_eq!(classify("work left me stressed"), EmotionLabel::Stress);
    }

    #[test]
    fn test_substring_catches_inflections() {
        // "overwhelming" is not listed, the bare "overwhelm" substring is.
        assert_eq!(classify("this is overwhelming"), EmotionLabel::Overwhelm);
    }

    #[test]
    fn test_nonzero_tie_takes_first_declared() {
        // One whole-word hit each for sadness and anger; sadness is
        // declared first, so it must win deterministically.
        assert_eq!(classify("i am sad and mad"), EmotionLabel::Sadness);
        // Same check for a later pair: anger before fear.
        assert_eq!(classify("mad and scared"), EmotionLabel::Anger);
    }

    #[test]
    fn test_higher_score_beats_declaration_order() {
        // Two anger hits beat one sadness hit despite declaration order.
        assert_eq!(classify("sad but mostly angry, full of rage"), EmotionLabel::Anger);
    }
}
