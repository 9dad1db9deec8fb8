//! CPU pixel buffer that display lists are rasterized into.

use css::Rgba;
use log::{debug, trace, warn};

use crate::display_list::{DisplayItem, DisplayList};
use crate::layout::{LayoutBox, LayoutRect};

/// A `width × height` buffer of colours, row-major with the origin at the top-left.
///
/// All painting happens while the canvas is built; afterwards it is only read. Rendering a
/// new frame means building a new canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// A canvas with every pixel set to transparent white.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT_WHITE; width.saturating_mul(height)],
        }
    }

    /// Rasterize a box tree into a canvas sized to `frame`. Fractional frame sizes are
    /// truncated and negative ones become zero.
    pub fn from_layout(root: &LayoutBox, frame: LayoutRect) -> Self {
        if !frame.width.is_finite() || !frame.height.is_finite() {
            warn!(
                target: "renderer",
                "frame size {}x{} is not finite",
                frame.width,
                frame.height
            );
        }
        let list = DisplayList::from_layout(root);
        Self::from_display_list(&list, frame.width as usize, frame.height as usize)
    }

    /// Execute `list` in order against a blank `width × height` canvas.
    pub fn from_display_list(list: &DisplayList, width: usize, height: usize) -> Self {
        let mut canvas = Self::blank(width, height);
        for item in list {
            canvas.render(item);
        }
        debug!(
            target: "renderer",
            "rasterized {} item(s) onto {}x{} canvas",
            list.len(),
            width,
            height
        );
        canvas
    }

    fn render(&mut self, item: &DisplayItem) {
        match *item {
            DisplayItem::Rect {
                x,
                y,
                width,
                height,
                color,
            } => self.fill_rect(LayoutRect::new(x, y, width, height), color),
        }
    }

    /// Overwrite every pixel of `rect` that lies on the canvas. Empty and inverted
    /// rectangles touch nothing.
    fn fill_rect(&mut self, rect: LayoutRect, color: Rgba) {
        let x0 = to_px(rect.x, self.width);
        let x1 = to_px(rect.right(), self.width);
        let y0 = to_px(rect.y, self.height);
        let y1 = to_px(rect.bottom(), self.height);
        trace!(
            target: "renderer",
            "fill [{x0}, {x1}) x [{y0}, {y1}) with {color}"
        );
        if x0 >= x1 {
            return;
        }
        for row in y0..y1 {
            let start = row * self.width;
            if let Some(span) = self.pixels.get_mut(start + x0..start + x1) {
                span.fill(color);
            }
        }
    }

    /// Raw bytes, four per pixel in R, G, B, A order, rows top to bottom.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| pixel.channels())
            .collect()
    }

    /// Colour at `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x >= self.width {
            return None;
        }
        self.pixels.get(y.checked_mul(self.width)? + x).copied()
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }
}

/// Truncate a coordinate to a pixel index bounded by `[0, max]`. Negative and NaN coordinates
/// map to 0.
#[inline]
fn to_px(coord: f32, max: usize) -> usize {
    (coord as usize).min(max)
}
