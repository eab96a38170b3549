use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_core::ProductId;
use stockroom_inventory::Inventory;
use stockroom_products::{BaseDetails, Product};

fn catalog_of(size: usize) -> Inventory {
    let mut inventory = Inventory::new();
    for i in 0..size {
        let id = ProductId::new(format!("P{i:06}")).expect("valid id");
        let details = BaseDetails::new(format!("Item number {i}"), 9.99, format!("Category {}", i % 10))
            .expect("valid details");
        inventory
            .add_product(Product::generic(id, details, 1_000))
            .expect("unique id");
    }
    inventory
}

fn bench_stock_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("stock_round_trip");
    group.throughput(Throughput::Elements(2));

    let mut inventory = catalog_of(1_000);
    let id = ProductId::new("P000500").expect("valid id");

    group.bench_function("add_then_remove", |b| {
        b.iter(|| {
            inventory.add_stock(black_box(&id), black_box(5)).expect("known product");
            inventory.remove_stock(black_box(&id), black_box(5)).expect("enough stock");
        })
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_name");
    for size in [100usize, 1_000, 10_000] {
        let inventory = catalog_of(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inventory, |b, inventory| {
            b.iter(|| inventory.search_by_name(black_box("number 4")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stock_round_trip, bench_search);
criterion_main!(benches);
