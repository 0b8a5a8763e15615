// benches/multivector.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ga_units::ga::left_multiplication_matrix;
use ga_units::{gauss, geometric_product_full, Geometric3, Unit, Vector3};
use nalgebra::{SMatrix, SVector};

const BATCH: usize = 1_000;

fn sample() -> [f64; 8] {
    [1.5, 0.25, -0.5, 0.75, 0.1, -0.2, 0.3, 0.05]
}

fn bench_products(c: &mut Criterion) {
    let a = black_box(sample());
    let b = a;
    let mut out = [0.0; 8];

    c.bench_function("geometric product kernel × 1000", |bencher| {
        bencher.iter(|| {
            for _ in 0..BATCH {
                geometric_product_full(black_box(&a), black_box(&b), &mut out);
            }
            black_box(out)
        })
    });

    let m = Geometric3::new(a, Some(&Unit::METER));
    let n = Geometric3::new(b, Some(&Unit::SECOND));
    c.bench_function("Geometric3 mul with units × 1000", |bencher| {
        bencher.iter(|| {
            let mut p = m.clone();
            for _ in 0..BATCH {
                p = p.mul(black_box(&n)).direction();
            }
            black_box(p)
        })
    });

    c.bench_function("Geometric3 mul on locked constant × 1000", |bencher| {
        bencher.iter(|| {
            let mut p = Geometric3::ZERO;
            for _ in 0..BATCH {
                p = Geometric3::E1.mul(black_box(&Geometric3::E2));
            }
            black_box(p)
        })
    });
}

/// Inversion: our Gauss elimination against nalgebra's LU.
fn bench_inverse(c: &mut Criterion) {
    let matrix = left_multiplication_matrix(&sample());
    let mut rhs = [0.0; 8];
    rhs[0] = 1.0;

    c.bench_function("inverse gauss 8×8 × 1000", |bencher| {
        bencher.iter(|| {
            let mut x = [0.0; 8];
            for _ in 0..BATCH {
                x = gauss(black_box(matrix), black_box(rhs)).unwrap();
            }
            black_box(x)
        })
    });

    let lhs = SMatrix::<f64, 8, 8>::from_fn(|i, j| matrix[i][j]);
    let b = SVector::<f64, 8>::from_column_slice(&rhs);
    c.bench_function("inverse nalgebra LU 8×8 × 1000", |bencher| {
        bencher.iter(|| {
            let mut x = None;
            for _ in 0..BATCH {
                x = black_box(lhs).lu().solve(black_box(&b));
            }
            black_box(x)
        })
    });
}

fn bench_rotors(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-0.5, 0.25, 2.0);

    c.bench_function("rotor from directions × 1000", |bencher| {
        bencher.iter(|| {
            let mut r = Geometric3::ONE;
            for _ in 0..BATCH {
                r = Geometric3::rotor_from_directions(black_box(&a), black_box(&b)).unwrap();
            }
            black_box(r)
        })
    });

    let r = Geometric3::rotor_from_directions(&a, &b).unwrap();
    let v = Geometric3::from_vector(&a);
    c.bench_function("rotate by sandwich × 1000", |bencher| {
        bencher.iter(|| {
            let mut p = v.clone();
            for _ in 0..BATCH {
                p = p.rotate(black_box(&r)).unwrap();
            }
            black_box(p)
        })
    });
}

fn bench_exp_log(c: &mut Criterion) {
    let m = Geometric3::new(sample(), None);
    c.bench_function("exp(log(m)) × 1000", |bencher| {
        bencher.iter(|| {
            let mut p = m.clone();
            for _ in 0..BATCH {
                p = black_box(&m).clone().log().and_then(Geometric3::exp).unwrap();
            }
            black_box(p)
        })
    });
}

criterion_group!(
    multivector_benches,
    bench_products,
    bench_inverse,
    bench_rotors,
    bench_exp_log
);
criterion_main!(multivector_benches);
