//! Display list: the ordered queue of paint commands produced from a box tree.
//!
//! Commands execute in FIFO order, so an item pushed later paints over the pixels of any
//! earlier item it overlaps.

pub mod serialization;

use core::slice::Iter;

use css::Rgba;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::layout::LayoutBox;

/// A single paint command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayItem {
    /// Solid color rectangle in device pixels. The covered area is `[x, x + width)` by
    /// `[y, y + height)` after clipping to the target.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgba,
    },
}

/// Paint commands in execution order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    /// Create a new empty display list.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a display list from an iterator of items.
    #[inline]
    pub fn from_items<I: IntoIterator<Item = DisplayItem>>(items: I) -> Self {
        let mut list = Self::new();
        list.items.extend(items);
        list
    }

    /// Append an item to the end of the list.
    #[inline]
    pub fn push(&mut self, item: DisplayItem) {
        self.items.push(item);
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, DisplayItem> {
        self.items.iter()
    }

    /// Flatten a box tree into paint order: each box before its children, children in order.
    /// Boxes without a background emit nothing but their subtree is still visited.
    pub fn from_layout(root: &LayoutBox) -> Self {
        let mut list = Self::new();
        let mut stack: Vec<&LayoutBox> = vec![root];
        while let Some(layout_box) = stack.pop() {
            if let Some(color) = layout_box.background {
                list.push(DisplayItem::Rect {
                    x: layout_box.rect.x,
                    y: layout_box.rect.y,
                    width: layout_box.rect.width,
                    height: layout_box.rect.height,
                    color,
                });
            } else {
                trace!(target: "renderer", "skipping box without background at {:?}", layout_box.rect);
            }
            stack.extend(layout_box.children.iter().rev());
        }
        debug!(target: "renderer", "built display list with {} item(s)", list.len());
        list
    }
}

impl<'list> IntoIterator for &'list DisplayList {
    type Item = &'list DisplayItem;
    type IntoIter = Iter<'list, DisplayItem>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
