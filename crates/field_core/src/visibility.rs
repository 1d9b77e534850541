//! Icon visibility state.
//!
//! Whether the clear icon currently occupies the trailing slot. The
//! `Visible` state also gates pointer hit-testing entirely: a hidden icon is
//! never hit-testable, no matter where a pointer-up lands.

/// Visibility state of the clear icon.
///
/// Initial state is [`Hidden`](IconVisibility::Hidden). The field keeps this
/// equal to "focused AND text non-empty" after every focus or text event;
/// text changes while unfocused are not recomputed (visibility was already
/// forced to `Hidden` on focus loss and stays there).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconVisibility {
    #[default]
    Hidden,
    Visible,
}

impl IconVisibility {
    /// Visibility derived for a focused field with the given text emptiness.
    pub(crate) fn for_focused(text_is_empty: bool) -> Self {
        if text_is_empty {
            Self::Hidden
        } else {
            Self::Visible
        }
    }

    /// Returns `true` in the [`Visible`](IconVisibility::Visible) state.
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_hidden() {
        assert_eq!(IconVisibility::default(), IconVisibility::Hidden);
        assert!(!IconVisibility::default().is_visible());
    }

    #[test]
    fn focused_visibility_follows_text_emptiness() {
        assert_eq!(IconVisibility::for_focused(true), IconVisibility::Hidden);
        assert_eq!(IconVisibility::for_focused(false), IconVisibility::Visible);
    }
}
