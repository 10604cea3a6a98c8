//! Benchmarks for dialogue extraction and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench extraction -- strategy`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use dialog_extractor::Extractor;
use dialog_extractor::core::OutputConfig;
use dialog_extractor::core::output::{to_csv, to_jsonl, to_text};
use dialog_extractor::parsing::strip_color_codes;
use dialog_extractor::source::SourceEncoding;

// =============================================================================
// Test Data Generators
// =============================================================================

/// A client log where roughly one line in five is chat.
fn generate_client_log(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let (h, m, s) = ((i / 3600) % 24, (i / 60) % 60, i % 60);
        let line = match i % 5 {
            0 => format!(
                "[{h:02}:{m:02}:{s:02}] [Render thread/INFO]: [System] [CHAT] <§fPlayer{}§f [dit]> message number {i}",
                i % 7
            ),
            1 => format!("[{h:02}:{m:02}:{s:02}] [Render thread/WARN]: Missing sound for event: minecraft:entity.goat.{i}"),
            2 => format!("[{h:02}:{m:02}:{s:02}] [Worker-Main-{}/INFO]: Loaded {i} recipes", i % 16),
            3 => format!("[{h:02}:{m:02}:{s:02}] [Render thread/INFO]: Created: 512x512x4 minecraft:textures/atlas/{i}.png-atlas"),
            _ => format!("[{h:02}:{m:02}:{s:02}] [Render thread/INFO]: Sound engine started"),
        };
        lines.push(line);
    }
    lines.join("\n")
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy");

    for size in [1_000_usize, 10_000, 100_000] {
        let log = generate_client_log(size);
        group.throughput(Throughput::Elements(size as u64));

        let lenient = Extractor::new();
        group.bench_with_input(BenchmarkId::new("lenient", size), &log, |b, log| {
            b.iter(|| black_box(lenient.extract_str(black_box(log))));
        });

        let strict = Extractor::strict();
        group.bench_with_input(BenchmarkId::new("strict", size), &log, |b, log| {
            b.iter(|| black_box(strict.extract_str(black_box(log))));
        });
    }

    group.finish();
}

fn bench_color_stripping(c: &mut Criterion) {
    let mut group = c.benchmark_group("color_codes");
    let markers = vec!["§".to_string()];

    let clean = "<Kohaku [dit]> a perfectly ordinary line of dialogue".to_string();
    let colored = "<§fKohaku§f [§edit§r]> §la §operfectly §nordinary §kline§r".to_string();

    for (name, text) in [("clean", &clean), ("colored", &colored)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| black_box(strip_color_codes(black_box(text), &markers)));
        });
    }

    group.finish();
}

// =============================================================================
// Source and Output Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let bytes = generate_client_log(10_000).into_bytes();
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    for encoding in [SourceEncoding::Windows1252, SourceEncoding::Utf8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(encoding),
            &bytes,
            |b, bytes| {
                b.iter(|| black_box(encoding.decode(black_box(bytes))));
            },
        );
    }

    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let lines = Extractor::new().extract_lines(&generate_client_log(50_000));
    let config = OutputConfig::new().with_timestamps().with_line_numbers();
    group.throughput(Throughput::Elements(lines.len() as u64));

    group.bench_function("text", |b| b.iter(|| black_box(to_text(&lines))));
    group.bench_function("jsonl", |b| {
        b.iter(|| black_box(to_jsonl(&lines, &config).unwrap()))
    });
    group.bench_function("csv", |b| b.iter(|| black_box(to_csv(&lines, &config).unwrap())));

    group.finish();
}

criterion_group!(
    benches,
    bench_strategies,
    bench_color_stripping,
    bench_decode,
    bench_output
);
criterion_main!(benches);
