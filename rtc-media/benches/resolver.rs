use criterion::{Criterion, criterion_group, criterion_main};
use rtc_media::{Dimensions, resolve_dimensions};
use std::hint::black_box;

fn benchmark_resolve_dimensions(c: &mut Criterion) {
    let sources = [
        Dimensions::H2160_169,
        Dimensions::H1080_169,
        Dimensions::new(1179, 2556),
        Dimensions::new(101, 101),
        Dimensions::H1440_43,
    ];
    let max = Dimensions::H720_169;

    c.bench_function("resolve_dimensions downscale", |b| {
        b.iter(|| {
            for source in sources {
                black_box(resolve_dimensions(black_box(source), black_box(max)));
            }
        })
    });

    c.bench_function("resolve_dimensions pass-through", |b| {
        b.iter(|| {
            for source in sources {
                black_box(resolve_dimensions(
                    black_box(source),
                    black_box(Dimensions::ZERO),
                ));
            }
        })
    });
}

criterion_group!(benches, benchmark_resolve_dimensions);
criterion_main!(benches);
