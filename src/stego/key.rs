// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Key image holder.
//!
//! [`KeyImage`] owns the unmodified carrier grid that serves as the shared
//! secret. It hands out encrypted copies and decrypts grids produced from
//! it; the held grid itself is never written to.

#[cfg(feature = "image")]
use std::path::Path;

use rand::Rng;

use crate::stego::error::Result;
use crate::stego::grid::PixelGrid;
use crate::stego::pipeline;

/// The key image used to encrypt and decrypt messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyImage {
    grid: PixelGrid,
}

impl KeyImage {
    pub fn new(grid: PixelGrid) -> Self {
        Self { grid }
    }

    /// Load the key from an image file.
    #[cfg(feature = "image")]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        crate::raster::read_grid(path).map(Self::new)
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.grid.dimensions()
    }

    /// Maximum number of normalized characters this key can carry.
    pub fn capacity(&self) -> usize {
        crate::stego::capacity::max_message_chars(&self.grid)
    }

    /// Encrypt `message` into a copy of the key.
    pub fn encrypt(&self, message: &str) -> Result<PixelGrid> {
        pipeline::encode(&self.grid, message)
    }

    pub fn encrypt_seeded(&self, message: &str, seed: &[u8; 32]) -> Result<PixelGrid> {
        pipeline::encode_seeded(&self.grid, message, seed)
    }

    pub fn encrypt_with_rng<R: Rng>(&self, message: &str, rng: &mut R) -> Result<PixelGrid> {
        pipeline::encode_with_rng(&self.grid, message, rng)
    }

    /// Decrypt the message hidden in `cipher`.
    pub fn decrypt(&self, cipher: &PixelGrid) -> Result<String> {
        pipeline::decode(cipher, &self.grid)
    }

    /// Encrypt `message` and write the result to `path` (format from the
    /// extension). Returns the encrypted grid.
    #[cfg(feature = "image")]
    pub fn encrypt_to_file(&self, message: &str, path: impl AsRef<Path>) -> Result<PixelGrid> {
        let cipher = self.encrypt(message)?;
        crate::raster::write_grid(path, &cipher)?;
        Ok(cipher)
    }

    /// Read an encrypted image file and decrypt it.
    #[cfg(feature = "image")]
    pub fn decrypt_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let cipher = crate::raster::read_grid(path)?;
        self.decrypt(&cipher)
    }
}

impl From<PixelGrid> for KeyImage {
    fn from(grid: PixelGrid) -> Self {
        Self::new(grid)
    }
}
