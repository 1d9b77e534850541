//! # field_core
//!
//! UI-agnostic interaction core for a clearable text-entry field.
//!
//! This crate provides the building blocks for a text field that shows a
//! clear ("x") icon while focused and non-empty, and empties itself when a
//! pointer-up lands on that icon:
//! - [`ClearableField`]: the widget's entire interaction state and behavior
//! - [`FieldConfig`]: construction-time configuration (icon size, padding)
//! - [`FieldGeometry`] / [`icon_hit_rect`]: pointer hit-testing geometry
//! - [`TextChangeObserver`], [`ClearObserver`], [`FocusObserver`]: the
//!   callback contracts exposed to embedding code
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework (egui, wgpu, etc.)
//! - Layout or drawing systems
//! - Platform-specific APIs
//!
//! All behavior is synchronous state derivation from three host-delivered
//! event streams (focus change, text change, pointer-up). The integration
//! layer is responsible for translating its framework's signals into calls
//! on [`ClearableField`] and for actually drawing the icon while
//! [`ClearableField::icon_visible`] is `true`.
//!
//! ## Invariant
//!
//! After any event, the icon is visible iff the field is focused and its
//! text is non-empty. Losing focus always hides the icon; text changes while
//! unfocused leave visibility untouched (it is already hidden).

mod config;
mod diff;
mod field;
mod geometry;
mod observer;
mod visibility;

pub use config::{DEFAULT_ICON_SIZE, DEFAULT_TRAILING_PADDING, FieldConfig};
pub use diff::ChangeSpan;
pub use field::ClearableField;
pub use geometry::{FieldGeometry, IconRect, icon_hit_rect};
pub use observer::{ClearObserver, FocusObserver, TextChangeObserver};
pub use visibility::IconVisibility;
