use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gpkernels::kernel::{Kernel, KernelKind, Rbf};
use gpkernels::{cross_covariance, gram, initialise};
use ndarray::{Array, Array2, Axis};

fn points(n: usize, dim: usize) -> Array2<f64> {
    let column = Array::linspace(0.0, 1.0, n).insert_axis(Axis(1));
    Array2::from_shape_fn((n, dim), |(i, j)| column[[i, 0]] * (j + 1) as f64)
}

fn bench_gram(c: &mut Criterion) {
    let mut group = c.benchmark_group("gram");

    for size in [10, 50, 200].iter() {
        let x = points(*size, 5);

        for kind in KernelKind::ALL {
            let kernel = kind.build(Some(5)).unwrap();
            let (params, _, _) = initialise(kernel.as_ref());

            group.bench_with_input(BenchmarkId::new(kind.as_str(), size), size, |b, _| {
                b.iter(|| gram(kernel.as_ref(), black_box(&x), &params));
            });
        }
    }
    group.finish();
}

fn bench_cross_covariance(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_covariance");

    for size in [10, 50, 200].iter() {
        let x1 = points(*size, 3);
        let x2 = points(*size / 2 + 1, 3);
        let kernel = Rbf::default();
        let (params, _, _) = initialise(&kernel);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| cross_covariance(&kernel, black_box(&x2), black_box(&x1), &params));
        });
    }
    group.finish();
}

fn bench_call(c: &mut Criterion) {
    let kernel = Rbf::with_ndims(5);
    let (params, _, _) = initialise(&kernel);
    let x = points(2, 5);
    let (a, b) = (x.slice_axis(Axis(0), (0..1).into()), x.slice_axis(Axis(0), (1..2).into()));

    c.bench_function("rbf_call", |bench| {
        bench.iter(|| kernel.call(black_box(a), black_box(b), &params));
    });
}

criterion_group!(benches, bench_gram, bench_cross_covariance, bench_call);
criterion_main!(benches);
