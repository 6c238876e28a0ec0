// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! # keysteg
//!
//! Hides a text message in the pixel data of a key image and recovers it
//! with the unmodified key. Each character is spread across the red, green
//! and blue channels of one pixel; characters are placed at random inside
//! equal bands of the image so that they read back in order.
//!
//! This is not a secure scheme: it offers no resistance to steganalysis
//! and anyone holding the key image can read the message.
//!
//! The cipher itself (`stego` module) works on in-memory [`PixelGrid`]s.
//! With the default `image` feature the `raster` module reads and writes
//! image files.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use keysteg::KeyImage;
//!
//! let key = KeyImage::open("key.png").unwrap();
//! key.encrypt_to_file("meet at noon", "secret.png").unwrap();
//! let decoded = key.decrypt_file("secret.png").unwrap();
//! assert_eq!(decoded, "MEET AT NOON");
//! ```

pub mod stego;
#[cfg(feature = "image")]
pub mod raster;

pub use stego::{decode, encode, encode_seeded, encode_with_placement, encode_with_rng, Encoded};
pub use stego::{can_embed, check_capacity, max_message_chars, normalize};
pub use stego::{Color, KeyImage, Pixel, PixelGrid, Result, StegoError};
pub use stego::{validate_grid_dimensions, MAX_DIMENSION, MAX_PIXELS};
