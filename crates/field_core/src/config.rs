//! Construction-time configuration for the clearable field.
//!
//! The configuration is read once when the field is built, mirroring
//! declarative attributes in a host layout system. There is no error path:
//! missing values fall back to defaults.

/// Default edge length (in px) of the square clear-icon bounds.
pub const DEFAULT_ICON_SIZE: f32 = 30.0;

/// Default content padding (in px) on the trailing edge of the field.
pub const DEFAULT_TRAILING_PADDING: f32 = 8.0;

/// Configuration read once at field construction.
///
/// `icon_size` sets the square bounds used both for drawing the icon and for
/// computing its hit rectangle. `trailing_padding` is the content padding
/// between the icon slot and the trailing edge of the field; the icon's own
/// reserved slot sits inside of it, so the total trailing inset is
/// `trailing_padding + icon_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Edge length of the square icon bounds, in px.
    pub icon_size: f32,

    /// Content padding on the trailing edge, in px.
    pub trailing_padding: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            trailing_padding: DEFAULT_TRAILING_PADDING,
        }
    }
}

impl FieldConfig {
    /// Default configuration with a custom icon size.
    pub fn with_icon_size(icon_size: f32) -> Self {
        Self {
            icon_size,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_size_is_30() {
        let cfg = FieldConfig::default();
        assert_eq!(cfg.icon_size, 30.0);
    }

    #[test]
    fn with_icon_size_keeps_other_defaults() {
        let cfg = FieldConfig::with_icon_size(24.0);
        assert_eq!(cfg.icon_size, 24.0);
        assert_eq!(cfg.trailing_padding, DEFAULT_TRAILING_PADDING);
    }
}
