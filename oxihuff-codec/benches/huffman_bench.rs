//! Performance benchmarks for oxihuff-codec
//!
//! - Compression/decompression throughput
//! - Tree construction from a frequency table
//! - Behaviour across data patterns and sizes

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff_codec::{FrequencyTable, HuffmanTree, compress_bytes, decompress_bytes};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// Uniform data - a single symbol (one-bit codes)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat distribution, worst case for Huffman
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - realistic skew
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const PATTERNS: &[(&str, PatternGenerator)] = &[
    ("uniform", test_data::uniform),
    ("random", test_data::random),
    ("text", test_data::text_like),
];

const SIZES: &[usize] = &[1024, 16 * 1024, 256 * 1024];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for &(name, generate) in PATTERNS {
        for &size in SIZES {
            let data = generate(size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| compress_bytes(black_box(data)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    for &(name, generate) in PATTERNS {
        for &size in SIZES {
            let compressed = compress_bytes(&generate(size)).unwrap();
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &compressed, |b, data| {
                b.iter(|| decompress_bytes(black_box(data)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let freq = FrequencyTable::from_bytes(&test_data::random(64 * 1024));
    c.bench_function("tree/full_alphabet", |b| {
        b.iter(|| HuffmanTree::from_frequencies(black_box(&freq)).code_table())
    });
}

criterion_group!(benches, bench_compress, bench_decompress, bench_tree);
criterion_main!(benches);
