// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Row-major pixel grid.
//!
//! Pixel `(x, y)` lives at index `y * width + x`. The grid is the only
//! representation the cipher works on; image decoding and encoding happen
//! outside of it (see the `raster` module).

use crate::stego::error::{Result, StegoError};
use crate::stego::pixel::{Color, Pixel};
use crate::stego::validate_grid_dimensions;

/// A `width` x `height` grid of pixels in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Build a grid by evaluating `color_at(x, y)` for every position.
    ///
    /// # Errors
    /// - [`StegoError::InvalidGrid`] if either dimension is zero.
    /// - [`StegoError::ImageTooLarge`] if the grid exceeds the size limits.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut color_at: impl FnMut(u32, u32) -> Color,
    ) -> Result<Self> {
        validate_grid_dimensions(width, height)?;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Pixel::new(x, y, color_at(x, y)));
            }
        }
        Ok(Self { width, height, pixels })
    }

    /// A grid where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Self::from_fn(width, height, |_, _| color)
    }

    /// Build a grid from packed RGBA8 bytes (4 bytes per pixel, row-major).
    ///
    /// # Errors
    /// [`StegoError::InvalidGrid`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4));
        if expected != Some(bytes.len()) {
            return Err(StegoError::InvalidGrid { width, height, len: bytes.len() / 4 });
        }
        let mut chunks = bytes.chunks_exact(4);
        Self::from_fn(width, height, |_, _| match chunks.next() {
            Some(&[r, g, b, a]) => Color::rgba(r, g, b, a),
            _ => Color::default(),
        })
    }

    /// Packed RGBA8 bytes in row-major order.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            out.extend_from_slice(&[p.color.r, p.color.g, p.color.b, p.color.a]);
        }
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    pub fn get(&self, index: usize) -> Option<&Pixel> {
        self.pixels.get(index)
    }

    /// Row-major index of `(x, y)`, or `None` if out of bounds.
    pub fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get_xy(&self, x: u32, y: u32) -> Option<&Pixel> {
        self.index_of(x, y).and_then(|i| self.pixels.get(i))
    }

    /// Overwrite the color at `(x, y)`. Returns `false` if out of bounds.
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.pixels[i].color = color;
                true
            }
            None => false,
        }
    }

    pub fn same_dimensions(&self, other: &PixelGrid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Indices whose colors differ between `self` and `other`, in order.
    /// Only positions present in both grids are compared.
    pub fn changed_indices(&self, other: &PixelGrid) -> Vec<usize> {
        self.pixels
            .iter()
            .zip(&other.pixels)
            .enumerate()
            .filter(|(_, (a, b))| a.compare(b) != 0)
            .map(|(i, _)| i)
            .collect()
    }
}
