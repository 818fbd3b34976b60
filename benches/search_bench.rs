//! Benchmarks for index construction and query latency.
//!
//! Simulates realistic marketplace sizes:
//! - Small:  ~10 shops, ~15 items each   (early marketplace)
//! - Medium: ~40 shops, ~30 items each   (active marketplace)
//! - Large:  ~100 shops, ~50 items each  (upper bound for this design)
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kerko::{build_index, search, CategoryRecord, ItemRecord, ShopRecord, SizeField, UserRecord};

struct CatalogSize {
    name: &'static str,
    shops: usize,
    items_per_shop: usize,
}

const CATALOG_SIZES: &[CatalogSize] = &[
    CatalogSize { name: "small", shops: 10, items_per_shop: 15 },
    CatalogSize { name: "medium", shops: 40, items_per_shop: 30 },
    CatalogSize { name: "large", shops: 100, items_per_shop: 50 },
];

const NAMES: &[&str] = &[
    "Basic Tee", "Air Max 90", "Fustan Mbrëmjeje", "Duks Oversize", "Xhinse Slim",
    "Këmishë Elegante", "Pallto Dimri", "Atlete Sport", "Çantë Lëkure", "Triko Leshi",
];
const BRANDS: &[&str] = &["Nike", "Adidas", "Zara", "Levis", "Puma", ""];
const CATEGORIES: &[&str] = &["T-Shirt", "Sneakers", "Fustan", "Hoodie", "Jeans", "Jacket"];
const COLORS: &[&str] = &["black", "white", "red", "blue", "grey"];
const SIZES: &[&str] = &["S,M,L", "M", "XL/XXL", "38,39,40", "M,L,XL"];

const QUERIES: &[&str] = &["zi", "duks oversize", "airmax", "M L bluzë", "fustam", "zzzyx"];

fn generate(shops: usize, items_per_shop: usize) -> (Vec<ShopRecord>, Vec<ItemRecord>) {
    let shop_records: Vec<ShopRecord> = (0..shops)
        .map(|s| ShopRecord {
            id: format!("s{s}"),
            name: format!("Dyqani {s}"),
            description: "Veshje për të gjithë".into(),
            ..ShopRecord::default()
        })
        .collect();

    let mut items = Vec::with_capacity(shops * items_per_shop);
    for s in 0..shops {
        for i in 0..items_per_shop {
            let n = s * items_per_shop + i;
            items.push(ItemRecord {
                id: format!("i{n}"),
                shop_id: format!("s{s}"),
                name: NAMES[n % NAMES.len()].to_string(),
                brand: BRANDS[n % BRANDS.len()].to_string(),
                category: CATEGORIES[n % CATEGORIES.len()].to_string(),
                color: Some(COLORS[n % COLORS.len()].to_string()),
                size: Some(SizeField::Scalar(SIZES[n % SIZES.len()].to_string())),
                price: 10.0 + n as f64,
                ..ItemRecord::default()
            });
        }
    }
    (shop_records, items)
}

fn categories() -> Vec<CategoryRecord> {
    CATEGORIES
        .iter()
        .map(|name| CategoryRecord { name: (*name).into() })
        .collect()
}

fn users(count: usize) -> Vec<UserRecord> {
    (0..count)
        .map(|u| UserRecord {
            id: format!("u{u}"),
            name: format!("Perdoruesi {u}"),
            email: format!("user{u}@tregu.al"),
            ..UserRecord::default()
        })
        .collect()
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");
    for size in CATALOG_SIZES {
        let (shop_records, items) = generate(size.shops, size.items_per_shop);
        let cats = categories();
        let user_records = users(size.shops * 3);
        group.throughput(Throughput::Elements(items.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), size, |b, _| {
            b.iter(|| build_index(&shop_records, &items, &cats, &user_records));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in CATALOG_SIZES {
        let (shop_records, items) = generate(size.shops, size.items_per_shop);
        let index = build_index(&shop_records, &items, &categories(), &users(size.shops * 3));
        group.bench_with_input(BenchmarkId::from_parameter(size.name), size, |b, _| {
            b.iter(|| {
                for query in QUERIES {
                    black_box(search(&index, query));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_index, bench_search);
criterion_main!(benches);
