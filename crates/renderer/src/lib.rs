//! Software rasterization of laid-out boxes.
//!
//! A box tree produced by layout is flattened into a display list (paint order), and the
//! list is executed against a CPU pixel buffer that can be exported as raw RGBA bytes.

pub mod canvas;
pub mod config;
pub mod display_list;
pub mod layout;

pub use canvas::Canvas;
pub use config::RasterConfig;
pub use display_list::{DisplayItem, DisplayList};
pub use layout::{LayoutBox, LayoutRect};
