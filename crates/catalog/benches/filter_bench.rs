use catalog::{Catalog, FilterCriteria, Product, SortKey, apply};
use common::Money;
use criterion::{Criterion, criterion_group, criterion_main};

fn make_catalog(size: u64) -> Catalog {
    let products = (1..=size)
        .map(|id| {
            let family = match id % 3 {
                0 => "Mug",
                1 => "Teapot",
                _ => "Plate",
            };
            Product::new(
                id,
                format!("{family} #{id}"),
                Money::from_minor((id % 50) * 10),
                "benchmark product",
            )
        })
        .collect();
    Catalog::new(products)
}

fn bench_query_filter(c: &mut Criterion) {
    let catalog = make_catalog(1_000);
    let criteria = FilterCriteria::new().with_query("mug");

    c.bench_function("catalog/filter_query_1k", |b| {
        b.iter(|| apply(&catalog, &criteria));
    });
}

fn bench_price_bounds(c: &mut Criterion) {
    let catalog = make_catalog(1_000);
    let criteria = FilterCriteria::new()
        .with_min_price(Money::from_minor(100))
        .with_max_price(Money::from_minor(400));

    c.bench_function("catalog/filter_price_bounds_1k", |b| {
        b.iter(|| apply(&catalog, &criteria));
    });
}

fn bench_query_and_title_sort(c: &mut Criterion) {
    let catalog = make_catalog(1_000);
    let criteria = FilterCriteria::new()
        .with_query("mug")
        .with_sort(SortKey::TitleAsc);

    c.bench_function("catalog/filter_query_title_sort_1k", |b| {
        b.iter(|| apply(&catalog, &criteria));
    });
}

criterion_group!(
    benches,
    bench_query_filter,
    bench_price_bounds,
    bench_query_and_title_sort
);
criterion_main!(benches);
