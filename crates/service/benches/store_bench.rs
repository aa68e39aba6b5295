use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use models::Customer;
use service::customer::{CustomerService, InMemoryCustomerRepository};

fn bench_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::new()));

    // pre-fill outside of the measured loop so lookups scan a realistic list
    rt.block_on(async {
        for id in 0..1_000 {
            svc.save_customer(Customer::new(id, format!("c{id}"), "Street", 30)).await.unwrap();
        }
    });

    let svc = &svc;
    c.bench_function("customer_find_last_of_1000", |b| {
        b.to_async(&rt).iter(|| async move { svc.find_by_id(999).await.unwrap() });
    });

    c.bench_function("customer_save", |b| {
        let mut id = 1_000;
        b.to_async(&rt).iter(|| {
            id += 1;
            let customer = Customer::new(id, "Bench", "Street", 30);
            async move { svc.save_customer(customer).await.unwrap() }
        });
    });
}

criterion_group!(benches, bench_store);
criterion_main!(benches);
