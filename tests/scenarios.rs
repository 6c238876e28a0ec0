// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end encode/decode scenarios on small synthetic grids.

use keysteg::{decode, encode, encode_seeded, Color, KeyImage, PixelGrid, StegoError};

fn gray_4x4() -> PixelGrid {
    PixelGrid::filled(4, 4, Color::rgb(128, 128, 128)).unwrap()
}

#[test]
fn hi_in_gray_4x4() {
    let key = gray_4x4();
    let cipher = encode(&key, "HI").unwrap();

    assert_eq!(cipher.changed_indices(&key).len(), 2);
    assert_eq!(decode(&cipher, &key).unwrap(), "HI");
}

#[test]
fn space_marker_restored() {
    let key = gray_4x4();
    let cipher = encode(&key, "A B").unwrap();

    // 'A', '@' and 'B' each change exactly one pixel.
    assert_eq!(cipher.changed_indices(&key).len(), 3);
    assert_eq!(decode(&cipher, &key).unwrap(), "A B");
}

#[test]
fn oversize_message_rejected() {
    let key = PixelGrid::filled(2, 2, Color::rgb(128, 128, 128)).unwrap();
    let before = key.clone();

    match encode(&key, "HELLO") {
        Err(StegoError::MessageTooLarge { chars: 5, pixels: 4 }) => {}
        other => panic!("expected MessageTooLarge, got {other:?}"),
    }
    assert_eq!(key, before);
}

#[test]
fn message_filling_every_pixel() {
    let key = gray_4x4();
    let message = "ABCDEFGHIJKLMNOP";
    let cipher = encode(&key, message).unwrap();
    assert_eq!(cipher.changed_indices(&key), (0..16).collect::<Vec<_>>());
    assert_eq!(decode(&cipher, &key).unwrap(), message);
}

#[test]
fn dimension_mismatch_rejected() {
    let key = gray_4x4();
    let cipher = encode(&key, "HI").unwrap();
    let other_key = PixelGrid::filled(8, 2, Color::rgb(128, 128, 128)).unwrap();

    match decode(&cipher, &other_key) {
        Err(StegoError::DimensionMismatch { key: (8, 2), cipher: (4, 4) }) => {}
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn punctuation_and_case_normalized() {
    let key = PixelGrid::from_fn(32, 32, |x, y| {
        Color::rgb((x * 7) as u8, (y * 5) as u8, ((x + y) * 3) as u8)
    })
    .unwrap();
    let cipher = encode_seeded(&key, "Hello there! General Kenobi.", &[11u8; 32]).unwrap();
    assert_eq!(decode(&cipher, &key).unwrap(), "HELLO THERE GENERAL KENOBI");
}

#[test]
fn full_width_and_cjk_punctuation_stripped() {
    let key = gray_4x4();
    let cipher = encode(&key, "hi！「ok」。").unwrap();
    assert_eq!(cipher.changed_indices(&key).len(), 4);
    assert_eq!(decode(&cipher, &key).unwrap(), "HIOK");
}

#[test]
fn digits_and_symbols_roundtrip() {
    let key = gray_4x4();
    let cipher = encode(&key, "1+1=2 $3").unwrap();
    assert_eq!(decode(&cipher, &key).unwrap(), "1+1=2 $3");
}

#[test]
fn seeded_encode_is_reproducible() {
    let key = gray_4x4();
    let a = encode_seeded(&key, "HI", &[42u8; 32]).unwrap();
    let b = encode_seeded(&key, "HI", &[42u8; 32]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn decoding_with_a_different_key_fails_or_garbles() {
    let key = gray_4x4();
    let cipher = encode_seeded(&key, "HI", &[1u8; 32]).unwrap();
    let wrong = PixelGrid::filled(4, 4, Color::rgb(100, 100, 100)).unwrap();

    // Every pixel differs from the wrong key, so whatever comes back is noise.
    match decode(&cipher, &wrong) {
        Ok(text) => assert_ne!(text, "HI"),
        Err(StegoError::InvalidDelta(_)) => {}
        Err(e) => panic!("unexpected error {e:?}"),
    }
}

#[test]
fn key_image_survives_many_encrypts() {
    let key = KeyImage::new(gray_4x4());
    let messages = ["HI", "YO", "A B", "XYZ"];
    let ciphers: Vec<_> = messages.iter().map(|m| key.encrypt(m).unwrap()).collect();
    for (m, c) in messages.iter().zip(&ciphers) {
        assert_eq!(&key.decrypt(c).unwrap(), m);
    }
    assert_eq!(key.grid(), &gray_4x4());
}
