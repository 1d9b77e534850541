//! Text-change span computation.
//!
//! Embedding code observes text mutations through a host-style quadruple
//! `(text, start, length_before, length_after)`. The field derives it by
//! diffing the old and new value: the longest common prefix and suffix are
//! unchanged, and the span in between is what was replaced. All positions
//! and lengths count Unicode scalar values, not bytes.

/// The changed region of a text mutation.
///
/// `start` is the character index of the first changed position,
/// `length_before` the number of characters removed there, and
/// `length_after` the number of characters inserted.
///
/// # Examples
///
/// ```
/// use field_core::ChangeSpan;
///
/// assert_eq!(
///     ChangeSpan::between("", "a"),
///     Some(ChangeSpan { start: 0, length_before: 0, length_after: 1 })
/// );
/// assert_eq!(
///     ChangeSpan::between("abc", ""),
///     Some(ChangeSpan { start: 0, length_before: 3, length_after: 0 })
/// );
/// assert_eq!(ChangeSpan::between("same", "same"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeSpan {
    pub start: usize,
    pub length_before: usize,
    pub length_after: usize,
}

impl ChangeSpan {
    /// Compute the changed span between two values, or `None` if equal.
    pub fn between(old: &str, new: &str) -> Option<Self> {
        if old == new {
            return None;
        }

        let old_len = old.chars().count();
        let new_len = new.chars().count();

        let prefix = old
            .chars()
            .zip(new.chars())
            .take_while(|(a, b)| a == b)
            .count();

        // The suffix must not overlap the prefix ("aa" -> "aaa" keeps the
        // shared "aa" as prefix, not suffix).
        let max_suffix = (old_len - prefix).min(new_len - prefix);
        let suffix = old
            .chars()
            .rev()
            .zip(new.chars().rev())
            .take_while(|(a, b)| a == b)
            .count()
            .min(max_suffix);

        Some(Self {
            start: prefix,
            length_before: old_len - prefix - suffix,
            length_after: new_len - prefix - suffix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, before: usize, after: usize) -> ChangeSpan {
        ChangeSpan {
            start,
            length_before: before,
            length_after: after,
        }
    }

    #[test]
    fn typing_into_empty() {
        assert_eq!(ChangeSpan::between("", "a"), Some(span(0, 0, 1)));
    }

    #[test]
    fn clearing_everything() {
        assert_eq!(ChangeSpan::between("abc", ""), Some(span(0, 3, 0)));
    }

    #[test]
    fn appending() {
        assert_eq!(ChangeSpan::between("ab", "abc"), Some(span(2, 0, 1)));
    }

    #[test]
    fn deleting_in_the_middle() {
        assert_eq!(ChangeSpan::between("abc", "ac"), Some(span(1, 1, 0)));
    }

    #[test]
    fn replacing_in_the_middle() {
        assert_eq!(ChangeSpan::between("abcd", "aXYd"), Some(span(1, 2, 2)));
    }

    #[test]
    fn equal_values_yield_none() {
        assert_eq!(ChangeSpan::between("", ""), None);
        assert_eq!(ChangeSpan::between("x", "x"), None);
    }

    #[test]
    fn repeated_characters_prefer_the_prefix() {
        assert_eq!(ChangeSpan::between("aa", "aaa"), Some(span(2, 0, 1)));
        assert_eq!(ChangeSpan::between("aaa", "aa"), Some(span(2, 1, 0)));
    }

    #[test]
    fn counts_scalar_values_not_bytes() {
        // '€' is 3 bytes but one scalar value.
        assert_eq!(ChangeSpan::between("a€", "a€b"), Some(span(2, 0, 1)));
        assert_eq!(ChangeSpan::between("€€", "€"), Some(span(1, 1, 0)));
    }
}
