// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Example: hide a message in a key image and read it back.
use keysteg::KeyImage;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: steg <key.png> <message> <output.png>");
        eprintln!("       steg --decode <key.png> <encrypted.png>");
        std::process::exit(1);
    }

    if args[1] == "--decode" {
        let key = KeyImage::open(&args[2]).expect("Could not read key image");
        match key.decrypt_file(&args[3]) {
            Ok(message) => println!("Decrypted message: {message}"),
            Err(e) => {
                eprintln!("Decode failed: {e}");
                std::process::exit(1);
            }
        }
    } else {
        let key = KeyImage::open(&args[1]).expect("Could not read key image");
        let (width, height) = key.dimensions();
        let message = &args[2];
        let out_path = &args[3];

        let cipher = key
            .encrypt_to_file(message, out_path)
            .expect("Encode failed");
        println!("Encrypted image written to: {out_path}");
        println!("Key: {width}x{height}, capacity {} characters", key.capacity());

        // Read back from memory to show the round trip.
        match key.decrypt(&cipher) {
            Ok(decoded) => println!("Decrypted message: {decoded}"),
            Err(e) => eprintln!("Decode failed: {e}"),
        }
    }
}
