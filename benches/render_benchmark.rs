//! Carousel view and draw benchmarks.
//!
//! Measures building a `CarouselView` and drawing it for growing folders.
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use folio::adapters::StaticImageSource;
use folio::carousel::{CarouselProps, CarouselProvider, CarouselRenderer};
use folio::ui::interaction::HitAreaRegistry;
use folio::ui::render_carousel;
use ratatui::{backend::TestBackend, Terminal};

const SIZES: [usize; 4] = [1, 10, 50, 200];

fn image_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("/images/gallery/shot-{:03}.jpg", i))
        .collect()
}

/// A mounted foreground renderer over `count` images. The ticker runs on
/// `runtime` for as long as the renderer lives.
fn mounted(runtime: &tokio::runtime::Runtime, count: usize) -> (CarouselProvider, CarouselRenderer) {
    let names = image_names(count);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let source = StaticImageSource::new().with_images("gallery", &refs);

    let provider = CarouselProvider::new();
    let props = CarouselProps::new("gallery").expect("valid folder");
    let mut renderer = provider.scope(|| CarouselRenderer::new(props, Arc::new(source)));
    runtime.block_on(renderer.mount());
    (provider, renderer)
}

fn bench_view(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("carousel_view");

    for size in SIZES {
        let (_provider, renderer) = mounted(&runtime, size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &renderer, |b, renderer| {
            b.iter(|| black_box(renderer.view()));
        });
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    let mut group = c.benchmark_group("carousel_draw");

    for size in SIZES {
        let (_provider, renderer) = mounted(&runtime, size);
        let view = renderer.view();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
        let mut hits = HitAreaRegistry::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), &view, |b, view| {
            b.iter(|| {
                hits.clear();
                terminal
                    .draw(|f| render_carousel(f, f.area(), "Gallery", view, &mut hits))
                    .expect("draw");
                black_box(hits.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_view, bench_draw);
criterion_main!(benches);
