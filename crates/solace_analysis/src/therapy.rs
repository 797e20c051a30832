//! Therapeutic-need detection.
//!
//! A small set of regex families mapping conversational patterns to the
//! phrasing style the response should take. Declared-order precedence when
//! several families match.

use regex::RegexSet;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TherapeuticNeed {
    /// "nobody understands", "no one listens" — wants to be heard.
    Validation,
    /// Absolutist language ("always", "never", "everyone") — reframing helps.
    Perspective,
    /// "how do i deal", "can't handle" — asking for concrete tools.
    Coping,
    /// "nothing good", "life sucks" — a gratitude nudge can open space.
    Gratitude,
}

static VALIDATION: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"nobody understands",
        r"no one gets it",
        r"i feel so alone in this",
        r"no one listens",
        r"not being heard",
    ])
    .expect("invalid validation patterns")
});

static PERSPECTIVE: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"\balways\b",
        r"\bnever\b",
        r"\beveryone\b",
        r"\bno one\b",
        r"nothing works",
        r"everything is",
    ])
    .expect("invalid perspective patterns")
});

static COPING: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(do not|don't) know what to do",
        r"(cannot|can't) handle",
        r"how do i deal",
        r"how to cope",
        r"need help with",
    ])
    .expect("invalid coping patterns")
});

static GRATITUDE: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"nothing good",
        r"everything is bad",
        r"life sucks",
        r"nothing positive",
        r"everything('s| is) terrible",
    ])
    .expect("invalid gratitude patterns")
});

/// Return the first therapeutic need whose pattern family matches, in
/// declared order: validation, perspective, coping, gratitude.
pub fn detect(text: &str) -> Option<TherapeuticNeed> {
    let lower = text.to_lowercase();
    let families: [(&RegexSet, TherapeuticNeed); 4] = [
        (&VALIDATION, TherapeuticNeed::Validation),
        (&PERSPECTIVE, TherapeuticNeed::Perspective),
        (&COPING, TherapeuticNeed::Coping),
        (&GRATITUDE, TherapeuticNeed::Gratitude),
    ];
    families
        .iter()
        .find(|(set, _)| set.is_match(&lower))
        .map(|(_, need)| *need)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(
            detect("nobody understands what i am going through"),
            Some(TherapeuticNeed::Validation)
        );
    }

    #[test]
    fn test_perspective() {
        assert_eq!(
            detect("things never work out for me"),
            Some(TherapeuticNeed::Perspective)
        );
    }

    #[test]
    fn test_coping() {
        assert_eq!(detect("how do i deal with this"), Some(TherapeuticNeed::Coping));
        assert_eq!(detect("i can't handle my workload"), Some(TherapeuticNeed::Coping));
    }

    #[test]
    fn test_gratitude() {
        assert_eq!(detect("honestly life sucks"), Some(TherapeuticNeed::Gratitude));
    }

    #[test]
    fn test_none_when_no_pattern() {
        assert_eq!(detect("i went for a walk earlier"), None);
    }

    #[test]
    fn test_declared_order_precedence() {
        // "no one listens" (validation) and "\bno one\b" (perspective) both
        // match; validation is declared first.
        assert_eq!(
            detect("no one listens, nothing works"),
            Some(TherapeuticNeed::Validation)
        );
    }
}
