//! Observer contracts exposed to embedding code.
//!
//! Each observer occupies a single slot on the field; registering a new one
//! overwrites the previous. The field stores them as boxed trait objects,
//! and closures with the matching signature implement the traits directly,
//! so `Box::new(|...| ...)` works without a named type.

use crate::field::ClearableField;

/// Observes every text mutation of the field.
///
/// Fired unconditionally on each change, focused or not, with the full new
/// text and the changed span (character positions, see
/// [`ChangeSpan`](crate::ChangeSpan)).
pub trait TextChangeObserver {
    fn handle_text_changed(
        &mut self,
        text: &str,
        start: usize,
        length_before: usize,
        length_after: usize,
    );
}

impl<F> TextChangeObserver for F
where
    F: FnMut(&str, usize, usize, usize),
{
    fn handle_text_changed(
        &mut self,
        text: &str,
        start: usize,
        length_before: usize,
        length_after: usize,
    ) {
        self(text, start, length_before, length_after)
    }
}

/// Observes user-initiated clears.
///
/// Fired exactly once per clear tap, after the text has already been emptied
/// (so `field.text()` is `""` and the icon is hidden again by the time this
/// runs).
pub trait ClearObserver {
    fn on_clear(&mut self, field: &ClearableField);
}

impl<F> ClearObserver for F
where
    F: FnMut(&ClearableField),
{
    fn on_clear(&mut self, field: &ClearableField) {
        self(field)
    }
}

/// Pass-through target for raw focus events.
///
/// The field itself is always the true focus listener with its host; an
/// external observer registered here is forwarded every event first, before
/// the field updates its own state. The `field` reference therefore still
/// shows the pre-update focus state.
pub trait FocusObserver {
    fn on_focus_change(&mut self, field: &ClearableField, has_focus: bool);
}

impl<F> FocusObserver for F
where
    F: FnMut(&ClearableField, bool),
{
    fn on_focus_change(&mut self, field: &ClearableField, has_focus: bool) {
        self(field, has_focus)
    }
}
