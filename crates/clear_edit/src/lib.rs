//! # clear_edit
//!
//! egui integration for the clearable input field.
//!
//! [`ClearableEdit`] wraps `egui::TextEdit::singleline` around a
//! [`field_core::ClearableField`]: it translates egui focus/text/pointer
//! signals into core events, reserves the trailing slot, and paints the
//! clear icon there while the core reports it visible. The icon is either a
//! user-supplied image (decoded with the `image` crate and uploaded as an
//! egui texture) or a built-in painted glyph.

mod icon;
mod widget;

pub use icon::{IconDrawable, IconError, decode_icon};
pub use widget::ClearableEdit;
