// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery interaction.
//!
//! Measures the cost of:
//! - Filtering a large gallery (visibility pass plus re-render)
//! - Lightbox navigation with the carousel following along
//! - Contact payload validation

use criterion::{criterion_group, criterion_main, Criterion};
use folio::config::Config;
use folio::domain::contact::ContactPayload;
use folio::domain::gallery::Item;
use folio::ui::surface::{GalleryMarkup, StaticLayout};
use folio::ui::{InputEvent, Key, Page, PageSurface, Target};
use std::hint::black_box;
use std::time::Duration;

const ITEMS: usize = 500;

fn gallery_surface() -> PageSurface {
    let tags = ["street", "portrait", "landscape", "night"];
    PageSurface {
        gallery: Some(GalleryMarkup {
            items: (0..ITEMS)
                .map(|i| Item::new(format!("photo-{i}.jpg"), format!("Photo {i}")).with_tags([tags[i % tags.len()]]))
                .collect(),
            lightbox: true,
            counter: true,
        }),
        ..PageSurface::default()
    }
}

/// Page with its initial render lock already released.
fn ready_page(layout: &StaticLayout) -> Page {
    let mut page = Page::new(&gallery_surface(), &Config::default());
    page.init(layout);
    page.advance(Duration::from_millis(400), layout);
    page
}

/// Benchmark switching the tag filter back and forth.
fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let layout = StaticLayout::desktop(ITEMS);

    group.bench_function("filter_tag_then_all", |b| {
        b.iter(|| {
            let mut page = ready_page(&layout);
            black_box(page.dispatch(InputEvent::FilterChanged("night".into()), &layout));
            page.advance(Duration::from_millis(400), &layout);
            black_box(page.dispatch(InputEvent::FilterChanged("all".into()), &layout));
        });
    });

    group.finish();
}

/// Benchmark stepping through the lightbox, including carousel catch-up.
fn bench_lightbox_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let layout = StaticLayout::desktop(ITEMS);

    group.bench_function("lightbox_walk_50", |b| {
        b.iter(|| {
            let mut page = ready_page(&layout);
            page.dispatch(InputEvent::Click(Target::GalleryItem(0)), &layout);
            for _ in 0..50 {
                black_box(page.dispatch(InputEvent::KeyDown(Key::ArrowRight), &layout));
                black_box(page.advance(Duration::from_millis(100), &layout));
            }
            page.dispatch(InputEvent::KeyDown(Key::Escape), &layout);
        });
    });

    group.finish();
}

/// Benchmark the shared validation path.
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let payload = ContactPayload::new(
        "  Ada Lovelace ",
        "ada@example.com",
        "Commission",
        "I would like to talk about a print of the harbour series.",
    );

    group.bench_function("sanitize_and_validate", |b| {
        b.iter(|| black_box(payload.sanitized().validate()));
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_lightbox_walk, bench_validate);
criterion_main!(benches);
