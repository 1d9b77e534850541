//! The egui widget wrapping a [`ClearableField`].

use egui::{Align, Context, Frame, Margin, Rect, Response, Stroke, TextEdit, Ui, vec2};
use field_core::{ClearableField, FieldConfig, FieldGeometry, icon_hit_rect};
use tracing::{debug, warn};

use crate::icon::IconDrawable;

const ROW_HEIGHT: f32 = 28.0;

/// A single-line text edit with a clear icon in its trailing slot.
///
/// The widget owns a [`ClearableField`] (the interaction state) plus the
/// icon drawable. Each frame it renders a framed `TextEdit::singleline`,
/// forwards egui's focus/text/pointer signals into the core in event order,
/// and paints the icon while the core reports it visible.
///
/// Pointer events are never consumed: the clear tap is observed from the
/// frame's input and egui's own text-edit interaction still runs for it.
pub struct ClearableEdit {
    field: ClearableField,
    icon: IconDrawable,
    hint: String,
}

impl Default for ClearableEdit {
    fn default() -> Self {
        Self::with_config(FieldConfig::default())
    }
}

impl ClearableEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the widget with explicit construction-time configuration.
    ///
    /// No icon resource configured: the built-in glyph is used.
    pub fn with_config(config: FieldConfig) -> Self {
        Self {
            field: ClearableField::new(config),
            icon: IconDrawable::Builtin,
            hint: String::new(),
        }
    }

    /// Placeholder text shown while the field is empty.
    pub fn hint_text(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// The underlying interaction state.
    pub fn field(&self) -> &ClearableField {
        &self.field
    }

    /// Mutable access, e.g. for registering observers or setting text.
    pub fn field_mut(&mut self) -> &mut ClearableField {
        &mut self.field
    }

    /// Replace the owned icon drawable.
    ///
    /// `None` is ignored (the current icon is retained), mirroring the
    /// resource setter's ignore-null policy.
    pub fn set_icon(&mut self, icon: Option<IconDrawable>) {
        if let Some(icon) = icon {
            self.icon = icon;
        }
    }

    /// Decode image bytes and install them as the icon.
    ///
    /// Undecodable bytes are a silent no-op (logged): the previous icon
    /// stays active. Use [`IconDrawable::from_bytes`] directly to observe
    /// the error.
    pub fn set_icon_from_bytes(&mut self, ctx: &Context, name: &str, bytes: &[u8]) {
        match IconDrawable::from_bytes(ctx, name, bytes) {
            Ok(icon) => self.icon = icon,
            Err(err) => warn!(icon = name, %err, "ignoring undecodable clear icon"),
        }
    }

    /// Release the owned icon resource.
    ///
    /// Teardown hook for detaching the widget from its screen: drops any
    /// decoded texture handle eagerly. If the widget is shown again it
    /// falls back to the built-in glyph.
    pub fn release_icon(&mut self) {
        self.icon = IconDrawable::Builtin;
    }

    /// Render the widget and process this frame's events.
    ///
    /// Returns the inner text-edit response; a clear tap marks it changed.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let config = self.field.config();
        let trailing_inset = config.trailing_padding + config.icon_size;

        let mut buffer = self.field.text().to_owned();

        let frame = Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color))
            .corner_radius(6.0)
            .inner_margin(Margin::symmetric(0, 2));

        let framed = frame.show(ui, |ui| {
            ui.add_sized(
                [ui.available_width(), ROW_HEIGHT],
                TextEdit::singleline(&mut buffer)
                    .hint_text(&self.hint)
                    .vertical_align(Align::Center)
                    // Keep typed text out of the icon's reserved slot.
                    .margin(Margin {
                        left: 6,
                        right: trailing_inset as i8,
                        top: 2,
                        bottom: 2,
                    }),
            )
        });

        let mut response = framed.inner;
        let outer = framed.response.rect;
        let geometry = FieldGeometry::new(outer.width(), outer.height());

        // Event order: raw focus first, then text, then pointer-up.
        if response.gained_focus() {
            self.field.handle_focus_change(true);
        }
        if response.lost_focus() {
            self.field.handle_focus_change(false);
        }
        if response.changed() {
            self.field.set_text(buffer);
        }

        let released_at = ui.input(|i| {
            if i.pointer.any_released() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        if let Some(pos) = released_at {
            let local = pos - outer.min;
            if self.field.handle_pointer_up(local.x, local.y, geometry) {
                debug!("clear icon tapped, field emptied");
                response.mark_changed();
            }
        }

        if self.field.icon_visible() {
            let band = icon_hit_rect(geometry, config);
            let icon_rect = Rect::from_min_max(
                outer.min + vec2(band.left, band.top),
                outer.min + vec2(band.right, band.bottom),
            );
            self.icon.paint(ui.painter(), icon_rect);
        }

        response
    }
}
