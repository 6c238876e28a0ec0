// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Character placement across the pixel grid.
//!
//! The grid is cut into equal, contiguous bands, one per message character
//! in message order. Within each band one pixel that can absorb the
//! character is chosen uniformly at random. Because bands never overlap,
//! the chosen indices are strictly increasing and a front-to-back scan of
//! the grid reads the characters back in order.
//!
//! # Bounded search
//!
//! Each band is probed at most [`MAX_RANDOM_PROBES`] times. If every probe
//! lands on a pixel that cannot hold the character, the band is scanned
//! once for all feasible pixels and one of those is chosen uniformly. Both
//! paths pick uniformly among the feasible pixels, and a band with no
//! feasible pixel fails with [`StegoError::CapacityExhausted`] instead of
//! spinning forever.
//!
//! Offsets are drawn with `gen_range` over `u32` (not `usize`) so the same
//! seed yields the same placement on 32-bit and 64-bit targets.

use core::ops::Range;

use log::{trace, warn};
use rand::Rng;

use crate::stego::error::{Result, StegoError};
use crate::stego::grid::PixelGrid;
use crate::stego::pixel::Pixel;

/// Random probes per band before falling back to a full scan of the band.
pub const MAX_RANDOM_PROBES: usize = 64;

/// Band width for a message of `chars` characters on a grid of `pixels`.
///
/// # Errors
/// [`StegoError::MessageTooLarge`] if `chars > pixels`.
pub fn band_spacing(pixels: usize, chars: usize) -> Result<usize> {
    if chars > pixels {
        return Err(StegoError::MessageTooLarge { chars, pixels });
    }
    // An empty message has no bands; report the whole grid as one.
    Ok(if chars == 0 { pixels } else { pixels / chars })
}

/// Half-open index range of band `i`.
pub fn band_range(i: usize, spacing: usize) -> Range<usize> {
    i * spacing..(i + 1) * spacing
}

/// Choose one grid index per character of the (already normalized)
/// `message`.
///
/// # Returns
/// The placement map: `map[i]` is the grid index that will carry the
/// `i`-th character. Indices are strictly increasing.
///
/// # Errors
/// - [`StegoError::MessageTooLarge`] if the message has more characters
///   than the grid has pixels.
/// - [`StegoError::CapacityExhausted`] if some band has no pixel that can
///   hold its character.
pub fn compute_distribution<R: Rng>(
    grid: &PixelGrid,
    message: &str,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let chars: Vec<char> = message.chars().collect();
    let spacing = band_spacing(grid.len(), chars.len())?;
    let pixels = grid.pixels();

    let mut placement = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        let band = band_range(i, spacing);
        let idx = match probe_band(pixels, band.clone(), c, rng) {
            Some(idx) => idx,
            None => {
                warn!(
                    "band {i} ({}..{}): {MAX_RANDOM_PROBES} probes missed for {c:?}, scanning band",
                    band.start, band.end
                );
                scan_band(pixels, band, c, rng)
                    .ok_or(StegoError::CapacityExhausted { index: i, ch: c })?
            }
        };
        trace!("char {i} {c:?} -> pixel {idx}");
        placement.push(idx);
    }
    Ok(placement)
}

/// Uniform random probes inside `band`. `None` if all probes fail.
fn probe_band<R: Rng>(
    pixels: &[Pixel],
    band: Range<usize>,
    c: char,
    rng: &mut R,
) -> Option<usize> {
    let width = (band.end - band.start) as u32;
    for _ in 0..MAX_RANDOM_PROBES {
        let idx = band.start + rng.gen_range(0..width) as usize;
        if pixels[idx].can_encode(c) {
            return Some(idx);
        }
    }
    None
}

/// Collect every feasible index in `band` and pick one uniformly.
fn scan_band<R: Rng>(
    pixels: &[Pixel],
    band: Range<usize>,
    c: char,
    rng: &mut R,
) -> Option<usize> {
    let feasible: Vec<usize> = band.filter(|&i| pixels[i].can_encode(c)).collect();
    if feasible.is_empty() {
        return None;
    }
    let pick = rng.gen_range(0..feasible.len() as u32) as usize;
    Some(feasible[pick])
}
