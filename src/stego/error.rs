// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the key-image cipher.
//!
//! [`StegoError`] covers every failure mode from grid construction through
//! placement, embedding, extraction and (with the `image` feature) image
//! file I/O.

use core::fmt;

/// Errors that can occur while hiding or recovering a message.
#[derive(Debug)]
pub enum StegoError {
    /// The normalized message has more characters than the grid has pixels.
    MessageTooLarge {
        /// Characters in the normalized message.
        chars: usize,
        /// Pixels in the key grid.
        pixels: usize,
    },
    /// No pixel in the band assigned to message position `index` can absorb
    /// character `ch` without leaving the 0–255 channel range.
    CapacityExhausted { index: usize, ch: char },
    /// The cipher grid and key grid have different dimensions.
    DimensionMismatch {
        key: (u32, u32),
        cipher: (u32, u32),
    },
    /// The character maps to a zero delta and could never be detected.
    UnencodableCharacter(char),
    /// A changed pixel's summed channel delta is not a valid character.
    /// Usually means the wrong key image was supplied.
    InvalidDelta(i32),
    /// The pixel buffer does not describe a `width` x `height` grid.
    InvalidGrid { width: u32, height: u32, len: usize },
    /// The grid dimensions exceed the maximum allowed (16384px / 64MP).
    ImageTooLarge,
    /// The image could not be decoded, encoded, read or written.
    #[cfg(feature = "image")]
    Image(image::ImageError),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MessageTooLarge { chars, pixels } => write!(
                f,
                "message of {chars} characters is too large for a key image of {pixels} pixels"
            ),
            Self::CapacityExhausted { index, ch } => write!(
                f,
                "no pixel can hold {ch:?} for message position {index}"
            ),
            Self::DimensionMismatch { key, cipher } => write!(
                f,
                "encrypted image is {}x{} but the key image is {}x{}",
                cipher.0, cipher.1, key.0, key.1
            ),
            Self::UnencodableCharacter(c) => write!(f, "character {c:?} cannot be encoded"),
            Self::InvalidDelta(d) => {
                write!(f, "pixel delta {d} does not decode to a character (wrong key?)")
            }
            Self::InvalidGrid { width, height, len } => write!(
                f,
                "{len} pixels do not form a {width}x{height} grid"
            ),
            Self::ImageTooLarge => write!(f, "image too large (max 16384px / 64MP)"),
            #[cfg(feature = "image")]
            Self::Image(e) => write!(f, "image error: {e}"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "image")]
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for StegoError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, StegoError>;
