//! Round-trip and code-shape properties over a spread of inputs.

use oxihuff_codec::{
    BitCode, FrequencyTable, HuffmanTree, PSEUDO_EOF, compress, compress_bytes, decompress,
    decompress_bytes,
};
use std::io::Cursor;

/// Reproducible pseudo-random bytes.
fn random_bytes(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

/// Bytes with a skewed distribution, so code lengths vary widely.
fn skewed_bytes(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| (i as u64 * 2654435761 % 1024).trailing_zeros() as u8 + b'a')
        .collect()
}

/// Symbol `k` occurs `2^k` times, so the tree degenerates into a chain.
fn doubling_bytes(symbols: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for symbol in 0..symbols {
        data.extend(std::iter::repeat_n(symbol as u8, 1 << symbol));
    }
    data
}

fn corpus() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        b"A".to_vec(),
        b"AAAB".to_vec(),
        vec![0xFF; 300],
        vec![0x00; 17],
        (0..=255).collect(),
        b"The quick brown fox jumps over the lazy dog. ".repeat(40),
        random_bytes(5000, 0x1234_5678_9ABC_DEF0),
        skewed_bytes(3000),
        doubling_bytes(14),
    ]
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_roundtrip_corpus() {
    for (i, original) in corpus().iter().enumerate() {
        let compressed = compress_bytes(original).unwrap();
        let restored = decompress_bytes(&compressed).unwrap();
        assert_eq!(&restored, original, "round trip failed for corpus entry {i}");
    }
}

#[test]
fn test_roundtrip_streams() {
    let original = random_bytes(20_000, 42);
    let mut input = Cursor::new(original.clone());
    let mut compressed = Vec::new();
    let stats = compress(&mut input, &mut compressed).unwrap();
    assert_eq!(stats.symbols, original.len() as u64);

    let mut restored = Vec::new();
    let stats = decompress(Cursor::new(&compressed), &mut restored).unwrap();
    assert_eq!(stats.symbols, original.len() as u64);
    assert_eq!(restored, original);
}

#[test]
fn test_concrete_scenario_aaab() {
    let freq = FrequencyTable::from_bytes(&[65, 65, 65, 66]);
    assert_eq!(freq.get(65), 3);
    assert_eq!(freq.get(66), 1);
    assert_eq!(freq.get(PSEUDO_EOF), 1);

    let codes = HuffmanTree::from_frequencies(&freq).code_table();
    let a = codes.get(65).unwrap().len();
    assert!(a < codes.get(66).unwrap().len());
    assert!(a < codes.get(PSEUDO_EOF).unwrap().len());

    let compressed = compress_bytes(&[65, 65, 65, 66]).unwrap();
    assert_eq!(decompress_bytes(&compressed).unwrap(), vec![65, 65, 65, 66]);
}

#[test]
fn test_concrete_scenario_empty() {
    let compressed = compress_bytes(&[]).unwrap();
    assert_eq!(&compressed[..4], &[0xFA, 0xCE, 0x82, 0x01]);

    let tree = HuffmanTree::from_frequencies(&FrequencyTable::new());
    assert_eq!(tree.leaves(), vec![PSEUDO_EOF]);

    assert!(decompress_bytes(&compressed).unwrap().is_empty());
}

#[test]
fn test_text_compresses() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(40);
    let compressed = compress_bytes(&original).unwrap();
    assert!(compressed.len() < original.len() * 3 / 4);
}

// ============================================================================
// Tree and Code Properties
// ============================================================================

#[test]
fn test_codes_prefix_free() {
    for original in corpus() {
        let codes = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&original))
            .code_table();
        let all: Vec<(u16, &BitCode)> = codes.iter().collect();
        for (i, (a_sym, a)) in all.iter().enumerate() {
            assert!(!a.is_empty(), "symbol {a_sym} has an empty code");
            for (b_sym, b) in all.iter().skip(i + 1) {
                assert!(
                    !a.is_prefix_of(b) && !b.is_prefix_of(a),
                    "codes for {a_sym} ({a}) and {b_sym} ({b}) overlap"
                );
            }
        }
    }
}

#[test]
fn test_tree_shape_idempotent() {
    for original in corpus() {
        let freq = FrequencyTable::from_bytes(&original);
        let first = HuffmanTree::from_frequencies(&freq);
        let second = HuffmanTree::from_frequencies(&freq);
        assert_eq!(first, second);
        assert_eq!(first.code_table(), second.code_table());
    }
}

#[test]
fn test_pseudo_eof_exactly_once() {
    for original in corpus() {
        let tree = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&original));
        let eof_leaves = tree.leaves().iter().filter(|&&s| s == PSEUDO_EOF).count();
        assert_eq!(eof_leaves, 1);
    }
}

#[test]
fn test_every_input_symbol_has_code() {
    let original = skewed_bytes(3000);
    let codes = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&original)).code_table();
    for &byte in &original {
        assert!(codes.get(byte as u16).is_some());
    }
}

#[test]
fn test_deep_tree_roundtrip() {
    let original = doubling_bytes(14);
    let codes = HuffmanTree::from_frequencies(&FrequencyTable::from_bytes(&original)).code_table();
    assert_eq!(codes.max_length(), 14);
    assert_eq!(codes.get(13).unwrap().len(), 1);
    assert_eq!(decompress_bytes(&compress_bytes(&original).unwrap()).unwrap(), original);
}
