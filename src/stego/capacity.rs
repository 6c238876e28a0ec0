// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Capacity estimation.
//!
//! Answers "will this message fit?" without touching a random generator.
//! A message fits when its normalized length is at most the pixel count,
//! every character has a nonzero delta, and every band contains at least
//! one pixel that can hold that band's character. When this check passes,
//! [`encode`](crate::stego::encode) cannot fail.

use crate::stego::distribution::{band_range, band_spacing};
use crate::stego::error::{Result, StegoError};
use crate::stego::grid::PixelGrid;
use crate::stego::message::normalize;
use crate::stego::pixel::ensure_encodable;

/// Upper bound on normalized message length: one character per pixel.
pub fn max_message_chars(grid: &PixelGrid) -> usize {
    grid.len()
}

/// Check that `message` can be encoded into `grid`.
///
/// # Errors
/// The same error [`encode`](crate::stego::encode) would return.
pub fn check_capacity(grid: &PixelGrid, message: &str) -> Result<()> {
    let message = normalize(message);
    ensure_encodable(&message)?;

    let chars = message.chars().count();
    let spacing = band_spacing(grid.len(), chars)?;
    let pixels = grid.pixels();

    for (i, c) in message.chars().enumerate() {
        if !pixels[band_range(i, spacing)].iter().any(|p| p.can_encode(c)) {
            return Err(StegoError::CapacityExhausted { index: i, ch: c });
        }
    }
    Ok(())
}

/// Returns `true` if [`check_capacity`] passes.
pub fn can_embed(grid: &PixelGrid, message: &str) -> bool {
    check_capacity(grid, message).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::pixel::Color;

    #[test]
    fn one_char_per_pixel() {
        let grid = PixelGrid::filled(2, 2, Color::rgb(10, 10, 10)).unwrap();
        assert_eq!(max_message_chars(&grid), 4);
        assert!(can_embed(&grid, "ab, c!"));
        assert!(!can_embed(&grid, "abcde"));
    }

    #[test]
    fn saturated_grid_cannot_embed_letters() {
        let grid = PixelGrid::filled(4, 4, Color::rgb(255, 255, 255)).unwrap();
        match check_capacity(&grid, "Z") {
            Err(StegoError::CapacityExhausted { index: 0, ch: 'Z' }) => {}
            other => panic!("expected CapacityExhausted, got {other:?}"),
        }
    }

    #[test]
    fn black_grid_cannot_embed_digits() {
        // Digits map to negative deltas and need room below.
        let grid = PixelGrid::filled(4, 4, Color::rgb(0, 0, 0)).unwrap();
        assert!(can_embed(&grid, "HELLO"));
        assert!(!can_embed(&grid, "7"));
    }
}
