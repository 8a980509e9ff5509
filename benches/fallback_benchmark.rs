use criterion::{black_box, criterion_group, criterion_main, Criterion};
use futures::executor::block_on;
use futures::future;
use optionality::{optional, OptionalRef, OptionalValue};

fn bench_value_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_fallback");

    group.bench_function("optional_value_fallback", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..1024u64 {
                let optional = optional::from(black_box((i % 3 != 0).then_some(i)));
                sum = sum.wrapping_add(optional.fallback(black_box(7)));
            }
            black_box(sum);
        });
    });

    // Comparison with std::Option
    group.bench_function("std_option_unwrap_or", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..1024u64 {
                let option = black_box((i % 3 != 0).then_some(i));
                sum = sum.wrapping_add(option.unwrap_or(black_box(7)));
            }
            black_box(sum);
        });
    });

    group.finish();
}

fn bench_ref_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("ref_fallback");
    let names: Vec<Option<&str>> = (0..1024)
        .map(|i| (i % 2 == 0).then_some("present"))
        .collect();

    group.bench_function("optional_ref_fallback", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for name in &names {
                let optional: OptionalRef<&str> = optional::from(black_box(*name));
                total += optional.fallback("absent").len();
            }
            black_box(total);
        });
    });

    group.bench_function("std_option_unwrap_or", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for name in &names {
                total += black_box(*name).unwrap_or("absent").len();
            }
            black_box(total);
        });
    });

    group.finish();
}

fn bench_from_async(c: &mut Criterion) {
    c.bench_function("from_async_ready", |b| {
        b.iter(|| {
            let optional: OptionalValue<u32> =
                block_on(optional::from_async(future::ready(black_box(Some(42)))));
            black_box(optional);
        });
    });
}

criterion_group!(benches, bench_value_fallback, bench_ref_fallback, bench_from_async);
criterion_main!(benches);
