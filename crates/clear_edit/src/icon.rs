//! Clear-icon drawables.
//!
//! The field paints its icon from one of two sources: a user-supplied image
//! decoded into an egui texture, or a built-in glyph painted directly. The
//! texture handle is exclusively owned here and released by dropping it.

use egui::{Color32, ColorImage, Context, Painter, Rect, Stroke, TextureHandle, TextureOptions, vec2};
use thiserror::Error;

/// Failure to turn user-supplied bytes into an icon image.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon image data is empty")]
    Empty,

    #[error("failed to decode icon image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode image bytes (png/jpeg) into an egui [`ColorImage`].
pub fn decode_icon(bytes: &[u8]) -> Result<ColorImage, IconError> {
    if bytes.is_empty() {
        return Err(IconError::Empty);
    }

    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// The drawable occupying the field's trailing slot while visible.
pub enum IconDrawable {
    /// Built-in fallback: a filled circle with an "x" cross, painted at the
    /// icon bounds. Used whenever no image resource is configured.
    Builtin,

    /// A decoded image uploaded as an egui texture.
    Texture(TextureHandle),
}

impl IconDrawable {
    /// Decode `bytes` and upload them as a texture on `ctx`.
    pub fn from_bytes(ctx: &Context, name: &str, bytes: &[u8]) -> Result<Self, IconError> {
        let img = decode_icon(bytes)?;
        Ok(Self::Texture(ctx.load_texture(name, img, TextureOptions::LINEAR)))
    }

    /// Paint the icon into `rect` (the icon's bounds, one icon-size square).
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        match self {
            Self::Builtin => paint_builtin(painter, rect),
            Self::Texture(texture) => {
                let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(texture.id(), rect, uv, Color32::WHITE);
            }
        }
    }
}

fn paint_builtin(painter: &Painter, rect: Rect) {
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.5;

    painter.circle_filled(center, radius, Color32::from_gray(120));

    let k = radius * 0.45;
    let stroke = Stroke::new((radius * 0.22).max(1.0), Color32::WHITE);
    painter.line_segment([center - vec2(k, k), center + vec2(k, k)], stroke);
    painter.line_segment([center - vec2(k, -k), center + vec2(k, -k)], stroke);
}
