//! Criterion benchmarks for the PPM codec and viewer frame composition.
//!
//! Run with: `cargo bench -p ppmview`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

use ppmview::{decode, encode, DecodeOptions, ImageRecord, ViewerConfig, ViewerState};

/// Random RGB image with a fixed seed so runs are comparable.
fn noise_image(width: u32, height: u32) -> ImageRecord {
    let mut rng = StdRng::seed_from_u64(0x5050_4d36);
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    rng.fill(pixels.as_mut_slice());
    ImageRecord::new(width, height, pixels).expect("buffer sized from dimensions")
}

/// Header with a comment between every field to exercise the slow paths.
fn chatty_header() -> Vec<u8> {
    let mut bytes = b"# leading\nP6\n# one\n\t 1920 # two\n\n1080\r\n# three\n255\n".to_vec();
    bytes.extend(std::iter::repeat(0x80).take(1920 * 1080 * 3));
    bytes
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let plain = encode(&noise_image(1920, 1080)).bytes;
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("1080p", |b| {
        b.iter(|| decode(black_box(&plain), &DecodeOptions::default()));
    });

    let commented = chatty_header();
    group.bench_function("1080p_commented_header", |b| {
        b.iter(|| decode(black_box(&commented), &DecodeOptions::default()));
    });

    let truncated = &plain[..plain.len() / 2];
    let zero_fill = DecodeOptions::new().with_zero_fill_underrun(true);
    group.bench_function("1080p_half_payload_zero_fill", |b| {
        b.iter(|| decode(black_box(truncated), &zero_fill));
    });

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let image = noise_image(1920, 1080);
    group.throughput(Throughput::Bytes(image.pixels().len() as u64));
    group.bench_function("1080p", |b| {
        b.iter(|| encode(black_box(&image)));
    });

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_frame");

    let image = noise_image(1920, 1080);
    group.throughput(Throughput::Bytes(image.pixels().len() as u64));

    let plain = ViewerState::default();
    group.bench_function("identity", |b| {
        b.iter(|| plain.compose_frame(black_box(&image)));
    });

    let inverted = ViewerState::new(ViewerConfig::default().with_invert(true));
    group.bench_function("inverted", |b| {
        b.iter(|| inverted.compose_frame(black_box(&image)));
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_compose);
criterion_main!(benches);
