//! Rasterization settings.
//!
//! The frame size can be given programmatically or read from the environment.

use std::env;

use crate::layout::LayoutRect;

const DEFAULT_FRAME_WIDTH: u32 = 800;
const DEFAULT_FRAME_HEIGHT: u32 = 600;

/// Size of the frame a box tree is rasterized into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterConfig {
    /// Frame width in pixels (at least 1)
    pub frame_width: u32,
    /// Frame height in pixels (at least 1)
    pub frame_height: u32,
}

impl RasterConfig {
    /// Construct a config with explicit dimensions. Zero dimensions are raised to 1.
    #[inline]
    #[must_use]
    pub const fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width: if frame_width < 1 { 1 } else { frame_width },
            frame_height: if frame_height < 1 { 1 } else { frame_height },
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `RASTER_FRAME_WIDTH`: frame width in pixels (default: 800)
    /// - `RASTER_FRAME_HEIGHT`: frame height in pixels (default: 600)
    ///
    /// Unset or unparsable values fall back to the defaults.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let read = |key: &str, default: u32| {
            lookup(key)
                .and_then(|val| val.trim().parse::<u32>().ok())
                .unwrap_or(default)
        };
        Self::new(
            read("RASTER_FRAME_WIDTH", DEFAULT_FRAME_WIDTH),
            read("RASTER_FRAME_HEIGHT", DEFAULT_FRAME_HEIGHT),
        )
    }

    /// The frame as a layout rectangle anchored at the origin.
    #[inline]
    pub fn frame(self) -> LayoutRect {
        LayoutRect::new(0.0, 0.0, self.frame_width as f32, self.frame_height as f32)
    }
}

impl Default for RasterConfig {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_clamped() {
        assert_eq!(RasterConfig::new(0, 0), RasterConfig::new(1, 1));
    }

    #[test]
    fn lookup_falls_back_to_defaults() {
        let config = RasterConfig::from_lookup(|key| match key {
            "RASTER_FRAME_WIDTH" => Some(" 320 ".to_owned()),
            "RASTER_FRAME_HEIGHT" => Some("tall".to_owned()),
            _ => None,
        });
        assert_eq!(config, RasterConfig::new(320, DEFAULT_FRAME_HEIGHT));
    }

    #[test]
    fn frame_is_anchored_at_origin() {
        let frame = RasterConfig::new(4, 3).frame();
        assert_eq!(frame, LayoutRect::new(0.0, 0.0, 4.0, 3.0));
    }
}
