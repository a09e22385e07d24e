use criterion::{Criterion, black_box, criterion_group, criterion_main};
use math_solvant::{GeConfig, GeFactorization, Matrix, Pivoting, Vector, ge, solve_dense};

fn tridiagonal<const N: usize>() -> Matrix<f64, N, N> {
    Matrix::from_fn(|i, j| match i.abs_diff(j) {
        0 => 4.0,
        1 => -1.0,
        _ => 0.0,
    })
}

fn bench_fixed_size(c: &mut Criterion) {
    let a = tridiagonal::<8>();
    let b = Vector::from([1.0; 8]);

    c.bench_function("ge_8x8", |bench| {
        bench.iter(|| {
            let mut x = Vector::zeros();
            ge(black_box(&b), black_box(&a), &mut x).unwrap();
            black_box(x)
        })
    });

    let config = GeConfig::default().with_pivoting(Pivoting::Magnitude);
    let lu = GeFactorization::factorize(&a, &config).unwrap();
    c.bench_function("ge_8x8_resolve", |bench| {
        bench.iter(|| black_box(lu.solve(black_box(&b)).unwrap()))
    });

    let a = tridiagonal::<32>();
    let b = Vector::from([1.0; 32]);
    c.bench_function("ge_32x32", |bench| {
        bench.iter(|| {
            let mut x = Vector::zeros();
            ge(black_box(&b), black_box(&a), &mut x).unwrap();
            black_box(x)
        })
    });
}

fn bench_dense(c: &mut Criterion) {
    let a = tridiagonal::<32>().to_array2();
    let b = ndarray::Array1::from_elem(32, 1.0);
    let config = GeConfig::default();

    c.bench_function("solve_dense_32x32", |bench| {
        bench.iter(|| black_box(solve_dense(black_box(&a), black_box(&b), &config).unwrap()))
    });
}

criterion_group!(benches, bench_fixed_size, bench_dense);
criterion_main!(benches);
