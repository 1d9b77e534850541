//! The clearable field itself.
//!
//! All behavior is synchronous: the integration layer calls
//! [`ClearableField::handle_focus_change`], [`ClearableField::set_text`] and
//! [`ClearableField::handle_pointer_up`] in direct response to its
//! framework's signals, and reads [`ClearableField::icon_visible`] back when
//! drawing. Missing observers are silent no-ops; no operation fails.

use std::fmt;

use crate::config::FieldConfig;
use crate::diff::ChangeSpan;
use crate::geometry::{FieldGeometry, icon_hit_rect};
use crate::observer::{ClearObserver, FocusObserver, TextChangeObserver};
use crate::visibility::IconVisibility;

/// Interaction state of a clearable text-entry field.
///
/// # Example
///
/// ```
/// use field_core::{ClearableField, FieldGeometry};
///
/// let mut field = ClearableField::default();
/// field.handle_focus_change(true);
/// field.set_text("hello");
/// assert!(field.icon_visible());
///
/// // A pointer-up inside the icon band clears the text.
/// let geometry = FieldGeometry::new(200.0, 40.0);
/// let cleared = field.handle_pointer_up(180.0, 20.0, geometry);
/// assert!(cleared);
/// assert_eq!(field.text(), "");
/// assert!(!field.icon_visible());
/// ```
#[derive(Default)]
pub struct ClearableField {
    text: String,
    focused: bool,
    visibility: IconVisibility,
    config: FieldConfig,

    text_observer: Option<Box<dyn TextChangeObserver>>,
    clear_observer: Option<Box<dyn ClearObserver>>,
    focus_observer: Option<Box<dyn FocusObserver>>,
}

impl ClearableField {
    /// Build a field with the given construction-time configuration.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Build a field with configuration and initial text.
    ///
    /// The initial text does not fire the text observer; the icon starts
    /// hidden either way because the field starts unfocused.
    pub fn with_text(config: FieldConfig, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(config)
        }
    }

    // =========================================================================
    // Read-only state
    // =========================================================================

    /// The field's current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Host-reported focus state as last recorded.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current icon visibility state.
    pub fn visibility(&self) -> IconVisibility {
        self.visibility
    }

    /// `true` while the clear icon occupies the trailing slot.
    pub fn icon_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// The construction-time configuration.
    pub fn config(&self) -> FieldConfig {
        self.config
    }

    // =========================================================================
    // Observer registration
    // =========================================================================

    /// Register the text-change observer.
    ///
    /// `Some` overwrites any previous observer. `None` is ignored: the
    /// previous observer is retained, not cleared.
    pub fn set_text_change_observer(&mut self, observer: Option<Box<dyn TextChangeObserver>>) {
        if let Some(observer) = observer {
            self.text_observer = Some(observer);
        }
    }

    /// Register the clear observer.
    ///
    /// Stored unconditionally: `None` removes any previous observer.
    pub fn set_clear_observer(&mut self, observer: Option<Box<dyn ClearObserver>>) {
        self.clear_observer = observer;
    }

    /// Register the pass-through focus observer.
    ///
    /// The field always stays the true focus listener with its host; the
    /// observer set here is forwarded every raw event first, in original
    /// order, before the field updates its own state. Stored
    /// unconditionally: `None` removes any previous observer.
    pub fn set_focus_observer(&mut self, observer: Option<Box<dyn FocusObserver>>) {
        self.focus_observer = observer;
    }

    // =========================================================================
    // Event entry points
    // =========================================================================

    /// Host focus change.
    ///
    /// Forwards the raw event to the focus observer, then records the new
    /// focus state and recomputes visibility from it: gaining focus shows
    /// the icon iff the text is non-empty, losing focus hides it
    /// unconditionally.
    pub fn handle_focus_change(&mut self, has_focus: bool) {
        if let Some(mut observer) = self.focus_observer.take() {
            observer.on_focus_change(self, has_focus);
            self.focus_observer = Some(observer);
        }

        self.focused = has_focus;
        self.visibility = if has_focus {
            IconVisibility::for_focused(self.text.is_empty())
        } else {
            IconVisibility::Hidden
        };
    }

    /// Replace the field's contents.
    ///
    /// Equal values are a no-op. Otherwise the changed span is computed,
    /// visibility is recomputed while focused (untouched while unfocused),
    /// and the text observer is notified unconditionally.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let Some(span) = ChangeSpan::between(&self.text, &text) else {
            return;
        };

        self.text = text;
        self.text_changed(span);
    }

    /// Host pointer-up at field-local coordinates `(x, y)`.
    ///
    /// Only evaluated while the icon is visible; a hidden icon is never
    /// hit-testable. On a strict-interior hit the text is emptied through
    /// the normal text-changed path and the clear observer is invoked with
    /// the field (text already empty, icon already hidden).
    ///
    /// Returns whether a clear occurred. The return value is informational:
    /// the event is never consumed, and the caller must pass it through to
    /// normal input handling regardless.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32, geometry: FieldGeometry) -> bool {
        if !self.visibility.is_visible() {
            return false;
        }

        let rect = icon_hit_rect(geometry, self.config);
        if !rect.contains(x, y) {
            return false;
        }

        self.set_text(String::new());

        if let Some(mut observer) = self.clear_observer.take() {
            observer.on_clear(self);
            self.clear_observer = Some(observer);
        }

        true
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn text_changed(&mut self, span: ChangeSpan) {
        if self.focused {
            self.visibility = IconVisibility::for_focused(self.text.is_empty());
        }

        if let Some(mut observer) = self.text_observer.take() {
            observer.handle_text_changed(
                &self.text,
                span.start,
                span.length_before,
                span.length_after,
            );
            self.text_observer = Some(observer);
        }
    }
}

impl fmt::Debug for ClearableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClearableField")
            .field("text", &self.text)
            .field("focused", &self.focused)
            .field("visibility", &self.visibility)
            .field("config", &self.config)
            .field("text_observer", &self.text_observer.is_some())
            .field("clear_observer", &self.clear_observer.is_some())
            .field("focus_observer", &self.focus_observer.is_some())
            .finish()
    }
}
