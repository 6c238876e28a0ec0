// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Image codec boundary (feature `image`).
//!
//! Converts between `image` buffers and [`PixelGrid`], and reads or writes
//! image files. Every input is normalized to 8-bit RGBA before it becomes a
//! grid; the output format follows the file extension.
//!
//! Embedded characters are single-unit channel deltas, so the carrier must
//! be stored losslessly. Writing JPEG works but logs a warning: the decoded
//! pixels will no longer match and the message is lost.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use log::{debug, warn};

use crate::stego::error::Result;
use crate::stego::grid::PixelGrid;

/// Grid from an RGBA8 image buffer.
pub fn grid_from_rgba(img: &RgbaImage) -> Result<PixelGrid> {
    PixelGrid::from_rgba_bytes(img.width(), img.height(), img.as_raw())
}

/// Grid from any decoded image, converted to RGBA8 first.
pub fn grid_from_image(img: &DynamicImage) -> Result<PixelGrid> {
    grid_from_rgba(&img.to_rgba8())
}

/// RGBA8 image buffer holding the grid's colors.
pub fn grid_to_rgba(grid: &PixelGrid) -> RgbaImage {
    RgbaImage::from_fn(grid.width(), grid.height(), |x, y| {
        let c = grid.get_xy(x, y).map(|p| p.color).unwrap_or_default();
        Rgba([c.r, c.g, c.b, c.a])
    })
}

/// Decode an in-memory image file (format sniffed from its header).
pub fn decode_grid(bytes: &[u8]) -> Result<PixelGrid> {
    let img = image::load_from_memory(bytes)?;
    grid_from_image(&img)
}

/// Encode the grid as an in-memory image file.
pub fn encode_grid(grid: &PixelGrid, format: ImageFormat) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    to_dynamic(grid, format).write_to(&mut Cursor::new(&mut out), format)?;
    Ok(out)
}

/// Read an image file into a grid.
pub fn read_grid(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let img = image::open(path)?;
    debug!("read {}x{} image from {}", img.width(), img.height(), path.display());
    grid_from_image(&img)
}

/// Write the grid to `path`, choosing the format from its extension.
///
/// # Errors
/// [`StegoError::Image`](crate::StegoError::Image) if the extension is not a
/// supported format or the file cannot be written.
pub fn write_grid(path: impl AsRef<Path>, grid: &PixelGrid) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    to_dynamic(grid, format).save_with_format(path, format)?;
    debug!("wrote {:?} image to {}", format, path.display());
    Ok(())
}

fn to_dynamic(grid: &PixelGrid, format: ImageFormat) -> DynamicImage {
    let img = DynamicImage::ImageRgba8(grid_to_rgba(grid));
    if format == ImageFormat::Jpeg {
        warn!("JPEG is lossy; the hidden message will not survive");
        // JPEG has no alpha channel.
        return DynamicImage::ImageRgb8(img.to_rgb8());
    }
    img
}
