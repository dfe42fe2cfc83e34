// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Round-trip integration tests for the pixel codec and its PNG form.

use pixstash_core::{
    channels_from_png, decode_channels, decode_grid, encode_text, from_png, to_png, CodecError, Seed,
};

fn roundtrip(text: &str, seed: &Seed) -> String {
    let grid = encode_text(text, seed).unwrap();
    decode_grid(&grid, seed).unwrap().into_text().unwrap()
}

#[test]
fn roundtrip_basic() {
    let seed = Seed::from("TEST_SEED");
    assert_eq!(roundtrip("Hello, world!", &seed), "Hello, world!");
}

#[test]
fn roundtrip_empty() {
    let seed = Seed::from("TEST_SEED");
    let grid = encode_text("", &seed).unwrap();
    assert_eq!(grid.side(), Some(1));
    let decoded = decode_grid(&grid, &seed).unwrap();
    assert!(decoded.chars.is_empty());
    assert!(decoded.is_complete());
    assert_eq!(decoded.into_text().unwrap(), "");
}

#[test]
fn roundtrip_unicode_widths() {
    let seed = Seed::from(2024i64);
    // 1-, 2-, 3- and 4-byte characters.
    let message = "Héllo wörld! 日本語テスト 🔐 Кириллица";
    assert_eq!(roundtrip(message, &seed), message);
}

#[test]
fn roundtrip_various_lengths() {
    let seed = Seed::from("lengths");
    for len in 0..40usize {
        let message: String = (0..len).map(|i| (b'A' + (i % 26) as u8) as char).collect();
        assert_eq!(roundtrip(&message, &seed), message, "failed for length {len}");
    }
}

#[test]
fn roundtrip_multibyte_at_every_alignment() {
    let seed = Seed::from("align");
    // Shift a 4-byte char through every pixel offset.
    for prefix in 0..6 {
        let message = format!("{}😀{}", "x".repeat(prefix), "é".repeat(prefix));
        assert_eq!(roundtrip(&message, &seed), message, "prefix {prefix}");
    }
}

#[test]
fn hello_world_grid_is_3x3() {
    let grid = encode_text("Hello, world!", &Seed::from("any")).unwrap();
    assert_eq!(grid.side(), Some(3));
    assert_eq!(grid.as_channels().len(), 27);
}

#[test]
fn wrong_seed_does_not_recover_text() {
    let message = "Hello, world!";
    let grid = encode_text(message, &Seed::from("right")).unwrap();
    let decoded = decode_grid(&grid, &Seed::from("wrong")).unwrap();
    assert_ne!(decoded.text(), message);
    assert!(decoded.clone().into_text().map_or(true, |t| t != message));
}

#[test]
fn wrong_seed_long_payload_decodes_to_garbage() {
    let message = "a".repeat(300);
    let grid = encode_text(&message, &Seed::from(1i64)).unwrap();
    let decoded = decode_grid(&grid, &Seed::from(2i64)).unwrap();
    // A random byte stream hits a bad UTF-8 group or the sentinel long before
    // 300 clean ASCII characters.
    assert_ne!(decoded.text(), message);
}

#[test]
fn truncated_stream_keeps_prefix_and_leftover() {
    let seed = Seed::from("trunc");
    let message = "ab日";
    let grid = encode_text(message, &seed).unwrap();

    // "ab" + the first two bytes of the 3-byte char.
    let cut: Vec<u8> = grid.channels().take(4).collect();
    let decoded = decode_channels(cut, &seed).unwrap();
    assert_eq!(decoded.text(), "ab");
    assert_eq!(decoded.leftover.as_deref(), Some(&"日".as_bytes()[..2]));
    assert!(matches!(
        decoded.into_text(),
        Err(CodecError::Truncated { leftover }) if leftover == "日".as_bytes()[..2]
    ));
}

#[test]
fn stream_cut_on_char_boundary_is_clean() {
    let seed = Seed::from("boundary");
    let grid = encode_text("añb", &seed).unwrap();
    let cut: Vec<u8> = grid.channels().take(3).collect();
    let decoded = decode_channels(cut, &seed).unwrap();
    assert!(decoded.is_complete());
    assert_eq!(decoded.text(), "añ");
}

#[test]
fn png_roundtrip_preserves_payload() {
    let seed = Seed::from("png");
    let message = "Stored in a PNG: ✓ ∑ 🚀";
    let grid = encode_text(message, &seed).unwrap();
    let png = to_png(&grid).unwrap();

    assert_eq!(from_png(&png).unwrap(), grid);
    let channels = channels_from_png(&png).unwrap();
    assert_eq!(decode_channels(channels, &seed).unwrap().into_text().unwrap(), message);
}

#[test]
fn encoded_grid_hides_plaintext() {
    let message = "a".repeat(30);
    let grid = encode_text(&message, &Seed::from("noise")).unwrap();
    let hits = grid.as_channels().iter().filter(|&&b| b == b'a').count();
    assert!(hits < 10, "mask left {hits} plaintext bytes in place");
}

#[test]
fn nul_payload_rejected() {
    let err = encode_text("before\0after", &Seed::from("k")).unwrap_err();
    assert_eq!(err, CodecError::NulInPayload { offset: 6 });
}
