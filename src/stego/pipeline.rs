// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Message-level encode/decode pipeline.
//!
//! Encoding:
//! 1. Normalize the message (uppercase, strip punctuation, mark spaces)
//! 2. Place one character per band of the key grid (see `distribution`)
//! 3. Copy the key grid and encipher each character into its pixel
//!
//! Decoding compares the suspect grid against the key grid pixel by pixel;
//! every pixel that differs carries one character, in index order.
//!
//! The key grid is only ever borrowed. Each encode works on its own copy,
//! so the same key can encode any number of messages and still decode all
//! of them.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::stego::distribution::compute_distribution;
use crate::stego::error::{Result, StegoError};
use crate::stego::grid::PixelGrid;
use crate::stego::message::{normalize, restore_space};
use crate::stego::pixel::{ensure_encodable, Pixel};

/// Result of [`encode_with_placement`].
#[derive(Debug, Clone)]
pub struct Encoded {
    /// The key grid with the message enciphered into it.
    pub grid: PixelGrid,
    /// Grid index carrying each character of `message`.
    pub placement: Vec<usize>,
    /// The normalized message that was embedded.
    pub message: String,
}

/// Hide `message` in a copy of `key`, placing characters with a freshly
/// seeded ChaCha20 generator.
///
/// # Errors
/// - [`StegoError::MessageTooLarge`] if the normalized message has more
///   characters than `key` has pixels.
/// - [`StegoError::CapacityExhausted`] if a band cannot hold its character.
/// - [`StegoError::UnencodableCharacter`] for a character with a zero delta.
pub fn encode(key: &PixelGrid, message: &str) -> Result<PixelGrid> {
    encode_with_rng(key, message, &mut ChaCha20Rng::from_entropy())
}

/// [`encode`] with a fixed 32-byte seed. The same key, message and seed
/// always produce the same grid.
pub fn encode_seeded(key: &PixelGrid, message: &str, seed: &[u8; 32]) -> Result<PixelGrid> {
    encode_with_rng(key, message, &mut ChaCha20Rng::from_seed(*seed))
}

/// [`encode`] drawing placement randomness from `rng`.
pub fn encode_with_rng<R: Rng>(key: &PixelGrid, message: &str, rng: &mut R) -> Result<PixelGrid> {
    encode_with_placement(key, message, rng).map(|encoded| encoded.grid)
}

/// Encode and also report where each character went.
///
/// Nothing is written until the whole placement has been found, so on
/// error there is no partially encoded grid.
pub fn encode_with_placement<R: Rng>(
    key: &PixelGrid,
    message: &str,
    rng: &mut R,
) -> Result<Encoded> {
    let message = normalize(message);

    ensure_encodable(&message)?;

    let placement = compute_distribution(key, &message, rng)?;

    let mut grid = key.clone();
    let pixels = grid.pixels_mut();
    for (&idx, c) in placement.iter().zip(message.chars()) {
        pixels[idx].encode(c);
    }

    debug!(
        "encoded {} chars into {}x{} grid",
        placement.len(),
        key.width(),
        key.height()
    );

    Ok(Encoded { grid, placement, message })
}

/// Recover the message hidden in `cipher` using the unmodified `key`.
///
/// Space markers are turned back into spaces. A grid identical to the key
/// decodes to an empty string.
///
/// # Errors
/// - [`StegoError::DimensionMismatch`] if the grids differ in width or height.
/// - [`StegoError::InvalidDelta`] if a changed pixel does not decode to a
///   character, which usually means the wrong key.
pub fn decode(cipher: &PixelGrid, key: &PixelGrid) -> Result<String> {
    if !cipher.same_dimensions(key) {
        return Err(StegoError::DimensionMismatch {
            key: key.dimensions(),
            cipher: cipher.dimensions(),
        });
    }

    let chars = decode_chars(cipher.pixels(), key.pixels())?;
    debug!(
        "decoded {} chars from {}x{} grid",
        chars.len(),
        key.width(),
        key.height()
    );
    Ok(chars.into_iter().collect())
}

#[cfg(not(feature = "parallel"))]
fn decode_chars(cipher: &[Pixel], key: &[Pixel]) -> Result<Vec<char>> {
    cipher
        .iter()
        .zip(key)
        .filter(|(c, k)| c.compare(k) != 0)
        .map(|(c, k)| c.decode(k).map(restore_space))
        .collect()
}

/// Parallel scan; `collect` keeps index order.
#[cfg(feature = "parallel")]
fn decode_chars(cipher: &[Pixel], key: &[Pixel]) -> Result<Vec<char>> {
    use rayon::prelude::*;

    cipher
        .par_iter()
        .zip(key.par_iter())
        .filter(|(c, k)| c.compare(k) != 0)
        .map(|(c, k)| c.decode(k).map(restore_space))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::pixel::Color;

    fn gray(w: u32, h: u32) -> PixelGrid {
        PixelGrid::filled(w, h, Color::rgb(128, 128, 128)).unwrap()
    }

    #[test]
    fn roundtrip_with_spaces() {
        let key = gray(16, 16);
        let cipher = encode_seeded(&key, "Meet me at noon", &[5u8; 32]).unwrap();
        assert_eq!(decode(&cipher, &key).unwrap(), "MEET ME AT NOON");
    }

    #[test]
    fn key_is_not_modified() {
        let key = gray(4, 4);
        let before = key.clone();
        let _ = encode_seeded(&key, "HI", &[0u8; 32]).unwrap();
        let _ = encode_seeded(&key, "THERE", &[1u8; 32]).unwrap();
        assert_eq!(key, before);
    }

    #[test]
    fn placement_matches_changed_pixels() {
        let key = gray(8, 8);
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        let encoded = encode_with_placement(&key, "a, b. c!", &mut rng).unwrap();
        assert_eq!(encoded.message, "A@B@C");
        assert_eq!(encoded.grid.changed_indices(&key), encoded.placement);
    }

    #[test]
    fn identical_grids_decode_to_empty() {
        let key = gray(3, 3);
        assert_eq!(decode(&key, &key).unwrap(), "");
    }

    #[test]
    fn empty_message_changes_nothing() {
        let key = gray(3, 3);
        let cipher = encode_seeded(&key, "?!", &[0u8; 32]).unwrap();
        assert_eq!(cipher, key);
    }

    #[test]
    fn dimension_mismatch_even_with_same_length() {
        let key = gray(4, 4);
        let cipher = gray(2, 8);
        match decode(&cipher, &key) {
            Err(StegoError::DimensionMismatch { key: (4, 4), cipher: (2, 8) }) => {}
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn wrong_key_reports_invalid_delta() {
        let key = gray(2, 2);
        let cipher = PixelGrid::filled(2, 2, Color::rgb(0, 0, 0)).unwrap();
        assert!(matches!(decode(&cipher, &key), Err(StegoError::InvalidDelta(_))));
    }
}
