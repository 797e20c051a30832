pub mod context;
pub mod crisis;
pub mod emotion;
pub mod normalize;
pub mod therapy;

/// Whole-word (word-boundary) containment check, shared by the keyword
/// scanners. `phrase` may span multiple words; a hit requires
/// non-alphanumeric (or string edge) on both sides.
pub(crate) fn contains_whole(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = text[start..].find(phrase) {
        let begin = start + pos;
        let end = begin + phrase.len();
        let before_ok = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = end;
    }
    false
}
