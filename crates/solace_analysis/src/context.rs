//! Contextual signal extraction: time of day, activity and health focus.
//!
//! Purely additive: signals only ever prepend clarifying sentences to a
//! response, they never override emotion or crisis outcomes.

use crate::contains_whole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Work,
    Study,
    Social,
    Exercise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthFocus {
    Sleep,
    Diet,
    Physical,
    Mental,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextSignals {
    pub time_of_day: Option<TimeOfDay>,
    pub activity: Option<Activity>,
    pub health_focus: Option<HealthFocus>,
}

const TIME_TABLE: &[(TimeOfDay, &[&str])] = &[
    (TimeOfDay::Morning, &["good morning", "morning", "wake up", "start of day"]),
    (TimeOfDay::Afternoon, &["good afternoon", "afternoon", "lunch", "midday"]),
    (TimeOfDay::Evening, &["good evening", "evening", "dinner"]),
    (TimeOfDay::Night, &["good night", "night", "bedtime"]),
];

const ACTIVITY_TABLE: &[(Activity, &[&str])] = &[
    (Activity::Work, &["work", "job", "office", "career", "business"]),
    (Activity::Study, &["study", "school", "college", "university", "exam"]),
    (Activity::Social, &["friend", "party", "social", "meet", "hang out"]),
    (Activity::Exercise, &["exercise", "workout", "gym", "sport", "run"]),
];

const HEALTH_TABLE: &[(HealthFocus, &[&str])] = &[
    (HealthFocus::Sleep, &["sleep", "tired", "insomnia", "rest", "bed"]),
    (HealthFocus::Diet, &["food", "eat", "diet", "hungry", "meal"]),
    (HealthFocus::Physical, &["pain", "ache", "sick", "ill", "health"]),
    (HealthFocus::Mental, &["mind", "thought", "brain", "mental", "psychology"]),
];

fn first_match<T: Copy>(text: &str, table: &[(T, &[&str])]) -> Option<T> {
    for (category, keywords) in table {
        if keywords.iter().any(|k| contains_whole(text, k)) {
            return Some(*category);
        }
    }
    None
}

/// Extract context signals from normalized text. Each field takes the first
/// matching category in declared table order, or stays unset.
pub fn analyze(text: &str) -> ContextSignals {
    let lower = text.to_lowercase();
    ContextSignals {
        time_of_day: first_match(&lower, TIME_TABLE),
        activity: first_match(&lower, ACTIVITY_TABLE),
        health_focus: first_match(&lower, HEALTH_TABLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_signals() {
        assert_eq!(analyze(""), ContextSignals::default());
    }

    #[test]
    fn test_activity_detection() {
        let ctx = analyze("i am anxious about my upcoming exam");
        assert_eq!(ctx.activity, Some(Activity::Study));
        assert_eq!(ctx.time_of_day, None);
    }

    #[test]
    fn test_multiple_signals() {
        let ctx = analyze("work kept me up all night and i cannot sleep");
        assert_eq!(ctx.activity, Some(Activity::Work));
        assert_eq!(ctx.time_of_day, Some(TimeOfDay::Night));
        assert_eq!(ctx.health_focus, Some(HealthFocus::Sleep));
    }

    #[test]
    fn test_declared_order_precedence() {
        // "work" (Work) and "gym" (Exercise) both present; Work is declared
        // first and wins.
        let ctx = analyze("skipped the gym because of work");
        assert_eq!(ctx.activity, Some(Activity::Work));
    }

    #[test]
    fn test_whole_word_matching() {
        // "running" must not hit "run", "network" must not hit "work"
        let ctx = analyze("my network is running slowly");
        assert_eq!(ctx.activity, None);
    }
}
