// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Key-image message cipher.
//!
//! A message is hidden by nudging the color channels of one pixel per
//! character. Decoding needs the unmodified key image: every pixel that
//! differs from the key carries one character.
//!
//! - [`pixel`]: per-pixel encipher/decipher arithmetic and capacity test.
//! - [`distribution`]: order-preserving random placement of characters.
//! - [`pipeline`]: message-level [`encode`] / [`decode`].
//! - [`key`]: [`KeyImage`], a holder for the key grid.

pub mod error;
pub mod pixel;
pub mod grid;
pub mod message;
pub mod distribution;
pub mod capacity;
pub mod pipeline;
pub mod key;

pub use error::{Result, StegoError};

/// Maximum pixel dimension (width or height) of a grid.
pub const MAX_DIMENSION: u32 = 16_384;

/// Maximum total pixel count of a grid (width × height).
pub const MAX_PIXELS: u32 = 64_000_000;

/// Validate grid dimensions.
///
/// # Errors
/// - [`StegoError::InvalidGrid`] if either dimension is zero.
/// - [`StegoError::ImageTooLarge`] if either dimension exceeds 16384px or
///   the total exceeds 64M pixels.
pub fn validate_grid_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(StegoError::InvalidGrid { width, height, len: 0 });
    }
    if width > MAX_DIMENSION
        || height > MAX_DIMENSION
        || width.checked_mul(height).map_or(true, |p| p > MAX_PIXELS)
    {
        return Err(StegoError::ImageTooLarge);
    }
    Ok(())
}

pub use capacity::{can_embed, check_capacity, max_message_chars};
pub use distribution::compute_distribution;
pub use grid::PixelGrid;
pub use key::KeyImage;
pub use message::{normalize, SPACE_MARKER};
pub use pipeline::{decode, encode, encode_seeded, encode_with_placement, encode_with_rng, Encoded};
pub use pixel::{Color, Pixel, CHANNEL_MAX, CHAR_OFFSET};
