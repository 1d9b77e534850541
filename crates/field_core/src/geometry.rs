//! Hit-rectangle geometry for the clear icon.
//!
//! The icon occupies the trailing (right) slot of the field. Its hit band is
//! computed from the field's outer size plus the construction-time config:
//! the horizontal band spans the icon's reserved slot inside the trailing
//! inset, and the vertical band is the icon's bounds height centered within
//! the field. Containment is strict on all four edges.

use crate::config::FieldConfig;

/// Outer size of the field, in the same coordinate space as pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldGeometry {
    pub width: f32,
    pub height: f32,
}

impl FieldGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The computed screen-space band used to decide whether a pointer-up lands
/// on the clear icon. Coordinates are local to the field's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl IconRect {
    /// Strict interior test: points exactly on an edge do not hit.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Compute the icon's hit rectangle for a field of the given size.
///
/// Horizontal bounds run from `width - (trailing_padding + icon_size)` to
/// `width - trailing_padding`: the total trailing inset includes the icon's
/// own reserved slot, so the band is exactly one icon wide. Vertical bounds
/// are a band of the icon's height centered within the field height.
pub fn icon_hit_rect(geometry: FieldGeometry, config: FieldConfig) -> IconRect {
    let left = geometry.width - (config.trailing_padding + config.icon_size);
    let right = geometry.width - config.trailing_padding;
    let top = (geometry.height - config.icon_size) / 2.0;
    let bottom = top + config.icon_size;
    IconRect {
        left,
        right,
        top,
        bottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(icon_size: f32, trailing_padding: f32) -> FieldConfig {
        FieldConfig {
            icon_size,
            trailing_padding,
        }
    }

    #[test]
    fn band_is_one_icon_wide_and_tall() {
        let rect = icon_hit_rect(FieldGeometry::new(200.0, 40.0), cfg(30.0, 8.0));
        assert_eq!(rect.width(), 30.0);
        assert_eq!(rect.height(), 30.0);
    }

    #[test]
    fn horizontal_band_sits_inside_trailing_inset() {
        let rect = icon_hit_rect(FieldGeometry::new(200.0, 40.0), cfg(30.0, 8.0));
        assert_eq!(rect.left, 200.0 - 38.0);
        assert_eq!(rect.right, 200.0 - 8.0);
    }

    #[test]
    fn vertical_band_is_centered() {
        let rect = icon_hit_rect(FieldGeometry::new(200.0, 40.0), cfg(30.0, 8.0));
        assert_eq!(rect.top, 5.0);
        assert_eq!(rect.bottom, 35.0);
    }

    #[test]
    fn containment_is_strict_on_all_edges() {
        let rect = icon_hit_rect(FieldGeometry::new(200.0, 40.0), cfg(30.0, 8.0));

        // A point in the middle of the band hits.
        assert!(rect.contains(180.0, 20.0));

        // Points exactly on the edges do not.
        assert!(!rect.contains(rect.left, 20.0));
        assert!(!rect.contains(rect.right, 20.0));
        assert!(!rect.contains(180.0, rect.top));
        assert!(!rect.contains(180.0, rect.bottom));

        // Points outside do not.
        assert!(!rect.contains(rect.left - 1.0, 20.0));
        assert!(!rect.contains(rect.right + 1.0, 20.0));
        assert!(!rect.contains(180.0, rect.top - 1.0));
        assert!(!rect.contains(180.0, rect.bottom + 1.0));
    }

    #[test]
    fn icon_taller_than_field_yields_negative_top() {
        // The band still centers on the field; hit-testing just extends
        // above/below it the way the original compound-drawable math does.
        let rect = icon_hit_rect(FieldGeometry::new(100.0, 20.0), cfg(30.0, 8.0));
        assert_eq!(rect.top, -5.0);
        assert_eq!(rect.bottom, 25.0);
    }
}
