//! Decompression of damaged streams.

use oxihuff_codec::{ErrorKind, OxiHuffError, compress_bytes, decompress};
use std::io::Cursor;

fn try_decompress(data: &[u8]) -> (Result<(), OxiHuffError>, Vec<u8>) {
    let mut output = Vec::new();
    let result = decompress(Cursor::new(data), &mut output).map(|_| ());
    (result, output)
}

// ============================================================================
// Header Faults
// ============================================================================

#[test]
fn test_wrong_magic_writes_nothing() {
    let mut compressed = compress_bytes(b"hello huffman").unwrap();
    compressed[3] = 0x00;

    let (result, output) = try_decompress(&compressed);
    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Header);
    assert!(err.to_string().contains("Unrecognized format"));
    assert!(output.is_empty());
}

#[test]
fn test_plain_text_is_not_a_stream() {
    let (result, output) = try_decompress(b"just some text, not compressed");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Header);
    assert!(output.is_empty());
}

#[test]
fn test_empty_input_is_not_a_stream() {
    let (result, _) = try_decompress(&[]);
    assert!(matches!(
        result.unwrap_err(),
        OxiHuffError::InvalidMagic { found: None, .. }
    ));
}

// ============================================================================
// Structural Faults
// ============================================================================

#[test]
fn test_magic_only() {
    let (result, output) = try_decompress(&[0xFA, 0xCE, 0x82, 0x01]);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Structural);
    assert!(output.is_empty());
}

#[test]
fn test_header_cut_short() {
    let compressed = compress_bytes(&(0..=255).collect::<Vec<u8>>()).unwrap();
    // The full-alphabet header is 2826 bits; stop well inside it
    let (result, _) = try_decompress(&compressed[..100]);
    assert!(matches!(
        result.unwrap_err(),
        OxiHuffError::MalformedTree { .. }
    ));
}

#[test]
fn test_runaway_header() {
    let mut stream = vec![0xFA, 0xCE, 0x82, 0x01];
    stream.extend_from_slice(&[0u8; 128]);
    let (result, _) = try_decompress(&stream);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::Structural);
}

// ============================================================================
// Payload Faults
// ============================================================================

#[test]
fn test_truncated_payload() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
    let compressed = compress_bytes(&original).unwrap();

    for cut in [1, 2, 10, compressed.len() / 2] {
        let (result, output) = try_decompress(&compressed[..compressed.len() - cut]);
        let err = result.unwrap_err();
        assert!(
            matches!(
                err.kind(),
                ErrorKind::Stream | ErrorKind::Structural
            ),
            "cut {cut}: unexpected error {err}"
        );
        assert!(output.is_empty());
    }
}

#[test]
fn test_truncated_by_one_byte_is_stream_error() {
    let compressed = compress_bytes(b"abcdefgh abcdefgh abcdefgh").unwrap();
    let (result, _) = try_decompress(&compressed[..compressed.len() - 1]);
    assert!(matches!(
        result.unwrap_err(),
        OxiHuffError::TruncatedStream { .. }
    ));
}
