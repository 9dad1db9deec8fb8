//! Box tree handed over by layout.

use css::Rgba;
use serde::{Deserialize, Serialize};

/// Layout rectangle with position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    /// X coordinate in pixels.
    pub x: f32,
    /// Y coordinate in pixels.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl LayoutRect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A laid-out box. Boxes without a background paint nothing themselves, but their children
/// still do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutBox {
    pub rect: LayoutRect,
    pub background: Option<Rgba>,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    #[inline]
    pub const fn new(rect: LayoutRect) -> Self {
        Self {
            rect,
            background: None,
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}
