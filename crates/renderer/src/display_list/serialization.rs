//! Frame recording: a display list is stored as bytes and later replayed into a fresh
//! canvas, which must rasterize to the same pixels as the original frame.

use super::DisplayList;
use anyhow::{Error as AnyhowError, Result as AnyResult};
use bincode::{deserialize, serialize};
use log::trace;

/// Record the paint commands of a frame.
///
/// # Errors
/// Returns an error if the list cannot be encoded.
pub fn serialize_display_list(list: &DisplayList) -> AnyResult<Vec<u8>> {
    let bytes = serialize(list)
        .map_err(|err| AnyhowError::msg(format!("cannot record display list: {err}")))?;
    trace!(target: "renderer", "recorded {} item(s) into {} byte(s)", list.len(), bytes.len());
    Ok(bytes)
}

/// Load a recording made by [`serialize_display_list`] for replay.
///
/// # Errors
/// Returns an error if the bytes are truncated or corrupted.
pub fn deserialize_display_list(bytes: &[u8]) -> AnyResult<DisplayList> {
    deserialize(bytes).map_err(|err| {
        AnyhowError::msg(format!(
            "cannot replay display list from {} byte(s): {err}",
            bytes.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::DisplayItem;
    use css::Rgba;

    #[test]
    fn truncated_bytes_are_rejected() -> AnyResult<()> {
        let list = DisplayList::from_items([DisplayItem::Rect {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
            color: Rgba::new(10, 20, 30, 255),
        }]);
        let bytes = serialize_display_list(&list)?;
        let truncated = bytes.get(..bytes.len() / 2).unwrap_or_default();
        let error = deserialize_display_list(truncated).err();
        assert!(error.is_some_and(|err| err.to_string().starts_with("cannot replay display list")));
        Ok(())
    }
}
