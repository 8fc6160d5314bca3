use criterion::{Criterion, black_box, criterion_group, criterion_main};
use lunisolar::{moon_position, sun_position};

fn series_bench(c: &mut Criterion) {
    let t = 0.24;

    let mut group = c.benchmark_group("series");
    group.bench_function("sun_position", |b| {
        b.iter(|| sun_position(black_box(t)))
    });
    group.bench_function("moon_position", |b| {
        b.iter(|| moon_position(black_box(t)))
    });
    group.finish();
}

criterion_group!(benches, series_bench);
criterion_main!(benches);
