// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Per-pixel character cipher.
//!
//! A character is hidden in one pixel by adding its offset value to the
//! red, green and blue channels:
//!
//! ```text
//! value     = code(c) - CHAR_OFFSET
//! share     = floor(value / 3)          (added to R, G and B)
//! remainder = value - 3 * share         (0..=2, added to the smallest channel)
//! ```
//!
//! Because exactly `value` units are distributed, the sum of the channel
//! deltas against the unmodified key pixel always reconstructs `value`,
//! whichever channel absorbed the remainder. Alpha is carried but never
//! touched.

use crate::stego::error::{Result, StegoError};

/// Maximum value of a color channel.
pub const CHANNEL_MAX: i32 = 255;

/// Subtracted from a character's code point before it is spread across the
/// channels. With 63, the space marker `@` maps to 1 and `A`..`Z` map to
/// 2..27, so typical messages move each channel by at most 9.
pub const CHAR_OFFSET: i32 = 63;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack from `0xAARRGGBB`.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    fn channels(self) -> [i32; 3] {
        [self.r as i32, self.g as i32, self.b as i32]
    }
}

/// A pixel of a grid: its coordinates and its color.
///
/// Coordinates identify the pixel only; the cipher arithmetic never
/// reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

/// Offset value of a character.
pub fn char_value(c: char) -> i32 {
    c as i32 - CHAR_OFFSET
}

/// Reject a normalized message holding a character with a zero value.
/// Such a character would leave its pixel unchanged and vanish on decode.
///
/// # Errors
/// [`StegoError::UnencodableCharacter`] with the first such character.
pub fn ensure_encodable(message: &str) -> Result<()> {
    match message.chars().find(|&c| char_value(c) == 0) {
        Some(c) => Err(StegoError::UnencodableCharacter(c)),
        None => Ok(()),
    }
}

/// Split a value into `(share, remainder)` using floor division, so that
/// `3 * share + remainder == value` and `remainder` is in `0..=2` for
/// negative values too.
pub fn split_value(value: i32) -> (i32, i32) {
    (value.div_euclid(3), value.rem_euclid(3))
}

/// Clamp to a channel byte. Only reached with in-range values when the
/// caller checked [`Pixel::can_encode`] first.
fn to_channel(v: i32) -> u8 {
    v.clamp(0, CHANNEL_MAX) as u8
}

impl Pixel {
    pub const fn new(x: u32, y: u32, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Returns `true` if `c` can be enciphered into this pixel without any
    /// channel leaving `0..=CHANNEL_MAX`.
    pub fn can_encode(&self, c: char) -> bool {
        let (share, remainder) = split_value(char_value(c));
        let channels = self.color.channels();

        if channels
            .iter()
            .any(|&ch| ch + share > CHANNEL_MAX || ch + share < 0)
        {
            return false;
        }
        if remainder != 0 {
            let min = channels[0].min(channels[1]).min(channels[2]);
            if min + share + remainder > CHANNEL_MAX {
                return false;
            }
        }
        true
    }

    /// Encipher `c` into this pixel's red, green and blue channels.
    ///
    /// The caller must have verified [`can_encode`](Self::can_encode) for
    /// this pixel and character.
    pub fn encode(&mut self, c: char) {
        debug_assert!(self.can_encode(c), "pixel cannot hold {c:?}");

        let (share, remainder) = split_value(char_value(c));
        let [mut r, mut g, mut b] = self.color.channels().map(|ch| ch + share);

        if remainder != 0 {
            // Smallest of the new values wins; ties go to red, then green.
            let min = r.min(g).min(b);
            if r == min {
                r += remainder;
            } else if g == min {
                g += remainder;
            } else {
                b += remainder;
            }
        }

        self.color.r = to_channel(r);
        self.color.g = to_channel(g);
        self.color.b = to_channel(b);
    }

    /// Summed red, green and blue difference between this pixel and `key`.
    pub fn delta(&self, key: &Pixel) -> i32 {
        let c = self.color.channels();
        let k = key.color.channels();
        (c[0] - k[0]) + (c[1] - k[1]) + (c[2] - k[2])
    }

    /// Recover the character enciphered into this pixel, given the
    /// unmodified key pixel at the same position.
    ///
    /// # Errors
    /// [`StegoError::InvalidDelta`] if the delta is not a valid character.
    pub fn decode(&self, key: &Pixel) -> Result<char> {
        let delta = self.delta(key);
        u32::try_from(delta + CHAR_OFFSET)
            .ok()
            .and_then(char::from_u32)
            .ok_or(StegoError::InvalidDelta(delta))
    }

    /// Zero iff both pixels have the same color (alpha included).
    /// The sign carries no meaning.
    pub fn compare(&self, other: &Pixel) -> i64 {
        i64::from(self.color.to_argb()) - i64::from(other.color.to_argb())
    }
}
