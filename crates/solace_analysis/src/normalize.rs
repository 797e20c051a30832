//! Informal-shorthand expansion applied before any other analysis.
//!
//! The table is an ordered sequence: multi-word entries ("no cap") are
//! declared before their single-word suffixes ("cap") so one pass over the
//! table is enough.

use regex::Regex;
use std::sync::LazyLock;

/// Shorthand → canonical form, in application order. Expansions never
/// contain a table key as a whole word, which is what makes `normalize`
/// idempotent.
const SHORTCUTS: &[(&str, &str)] = &[
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("rn", "right now"),
    ("im", "i am"),
    ("ive", "i have"),
    ("dont", "do not"),
    ("cant", "cannot"),
    ("wont", "will not"),
    ("idk", "i do not know"),
    ("pls", "please"),
    ("bc", "because"),
    ("cuz", "because"),
    ("af", "very"),
    ("lol", "laughing out loud"),
    ("brb", "be right back"),
    ("tbh", "to be honest"),
    ("lmk", "let me know"),
    ("rofl", "rolling on floor laughing"),
    ("ngl", "not going to lie"),
    ("gtg", "got to go"),
    ("ttyl", "talk to you later"),
    ("fomo", "fear of missing out"),
    ("imo", "in my opinion"),
    ("smh", "shaking my head"),
    ("finna", "going to"),
    ("lowkey", "kind of"),
    ("highkey", "really"),
    ("deadass", "seriously"),
    ("no cap", "no lie"),
    ("cap", "lie"),
    ("goat", "greatest of all time"),
    ("bet", "alright"),
    ("yass", "yes"),
];

static SHORTCUT_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    SHORTCUTS
        .iter()
        .map(|(shortcut, full)| {
            let pattern = format!(r"\b{}\b", regex::escape(shortcut));
            // Table entries are fixed ASCII; compilation cannot fail.
            (Regex::new(&pattern).expect("invalid shortcut pattern"), *full)
        })
        .collect()
});

/// Expand informal shorthand into canonical full forms.
///
/// Lower-cases and trims, then rewrites each table entry on whole-word
/// boundaries. Unmapped words and punctuation pass through untouched.
/// Pure and idempotent; never fails.
pub fn normalize(text: &str) -> String {
    let mut out = text.trim().to_lowercase();
    for (pattern, full) in SHORTCUT_PATTERNS.iter() {
        if pattern.is_match(&out) {
            out = pattern.replace_all(&out, *full).into_owned();
        }
    }
    out
}
