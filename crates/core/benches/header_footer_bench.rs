use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use masthead_core::layout::Block;
use masthead_core::source::RawPage;
use masthead_core::structure::detect_header_footer;

const PAGE_BBOX: (f64, f64, f64, f64) = (0.0, 0.0, 612.0, 792.0);

/// Deterministic jitter so bench inputs are stable between runs.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn gen_f64(&mut self, min: f64, max: f64) -> f64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        min + (max - min) * (x as f64 / u64::MAX as f64)
    }
}

/// Pages with a running title, a numbered footer and `blocks` body paragraphs.
fn generate_pages(seed: u64, pages: usize, blocks: usize) -> Vec<RawPage> {
    let mut rng = XorShift64::new(seed);
    (0..pages)
        .map(|i| {
            let mut content = Vec::with_capacity(blocks + 2);
            content.push(Block::text((72.0, 36.0, 540.0, 48.0), "Technical Manual"));
            for k in 0..blocks {
                let top = 72.0 + k as f64 * 30.0 + rng.gen_f64(0.0, 3.0);
                let x0 = 72.0 + rng.gen_f64(0.0, 6.0);
                content.push(Block::text(
                    (x0, top, 540.0, top + 24.0),
                    format!("paragraph {i}/{k} lorem ipsum"),
                ));
            }
            content.push(Block::text(
                (280.0, 760.0, 330.0, 772.0),
                format!("Page {} of {pages}", i + 1),
            ));
            RawPage::new(i, PAGE_BBOX).with_blocks(content)
        })
        .collect()
}

fn bench_detect_header_footer(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_header_footer");
    for &n in &[10usize, 100, 1000] {
        let pages = generate_pages(0x5eed ^ n as u64, n, 20);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("pages", n), &pages, |b, pages| {
            b.iter(|| {
                let edges = detect_header_footer(pages);
                black_box(edges.len());
            })
        });
    }
    group.finish();
}

criterion_group!(header_footer_benches, bench_detect_header_footer);
criterion_main!(header_footer_benches);
