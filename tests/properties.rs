//! Algebraic properties of the transform, checked on seeded random data
//! against a direct matrix-vector product.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fhtly::{fht_f32, fht_f64, lane_count, Fht};

/// Entry `(i, j)` of the Sylvester-ordered Hadamard matrix.
fn sylvester(i: usize, j: usize) -> f64 {
    if (i & j).count_ones() % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

fn naive(x: &[f64]) -> Vec<f64> {
    (0..x.len())
        .map(|i| x.iter().enumerate().map(|(j, &v)| sylvester(i, j) * v).sum())
        .collect()
}

fn random_vec(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}

#[test]
fn test_matches_matrix_product_f64() {
    let mut rng = StdRng::seed_from_u64(42);

    for log_n in 0..=10 {
        let n = 1usize << log_n;
        let x = random_vec(&mut rng, n);

        let mut y = x.clone();
        fht_f64(&mut y, log_n).unwrap();
        let expected = naive(&x);

        for (i, (a, b)) in y.iter().zip(&expected).enumerate() {
            assert!((a - b).abs() < 1e-9 * n as f64, "log_n={log_n}, i={i}: {a} != {b}");
        }
    }
}

#[test]
fn test_matches_matrix_product_f32() {
    let mut rng = StdRng::seed_from_u64(43);

    for log_n in 0..=10 {
        let n = 1usize << log_n;
        let x = random_vec(&mut rng, n);

        let mut y: Vec<f32> = x.iter().map(|&v| v as f32).collect();
        fht_f32(&mut y, log_n).unwrap();
        let expected = naive(&x);

        for (i, (&a, b)) in y.iter().zip(&expected).enumerate() {
            assert!(
                (a as f64 - b).abs() < 1e-4 * n as f64,
                "log_n={log_n}, i={i}: {a} != {b}"
            );
        }
    }
}

#[test]
fn test_involution_scales_by_n() {
    let mut rng = StdRng::seed_from_u64(3);

    for log_n in 0..=16 {
        let n = 1usize << log_n;
        let x = random_vec(&mut rng, n);

        let mut y = x.clone();
        fht_f64(&mut y, log_n).unwrap();
        fht_f64(&mut y, log_n).unwrap();

        for (a, b) in y.iter().zip(&x) {
            assert!((a - n as f64 * b).abs() < 1e-9 * n as f64, "log_n={log_n}");
        }
    }
}

#[test]
fn test_involution_scales_by_n_f32() {
    let mut rng = StdRng::seed_from_u64(4);

    for log_n in 0..=20 {
        let n = 1usize << log_n;
        let x: Vec<f32> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();

        let mut y = x.clone();
        fht_f32(&mut y, log_n).unwrap();
        fht_f32(&mut y, log_n).unwrap();

        let scale = 1.0 / n as f32;
        for (i, (a, b)) in y.iter().zip(&x).enumerate() {
            assert!(
                (a * scale - b).abs() <= 1e-5 * b.abs().max(1.0),
                "log_n={log_n}, i={i}: {} != {b}",
                a * scale
            );
        }
    }
}

#[test]
fn test_linearity() {
    let mut rng = StdRng::seed_from_u64(5);
    let log_n = 9;
    let n = 1usize << log_n;

    let x = random_vec(&mut rng, n);
    let y = random_vec(&mut rng, n);
    let (a, b) = (2.5, -0.75);

    let mut combined: Vec<f64> = x.iter().zip(&y).map(|(u, v)| a * u + b * v).collect();
    let mut hx = x.clone();
    let mut hy = y.clone();

    fht_f64(&mut combined, log_n).unwrap();
    fht_f64(&mut hx, log_n).unwrap();
    fht_f64(&mut hy, log_n).unwrap();

    for i in 0..n {
        assert!((combined[i] - (a * hx[i] + b * hy[i])).abs() < 1e-9 * n as f64);
    }
}

#[test]
fn test_last_input_reaches_every_output() {
    // A block-diagonal network would leave the first half of the output
    // untouched by the last input element.
    for log_n in 1..=14 {
        let n = 1usize << log_n;

        let mut data = vec![0.0f32; n];
        data[n - 1] = 1.0;
        fht_f32(&mut data, log_n).unwrap();

        for (i, &v) in data.iter().enumerate() {
            let expected = sylvester(i, n - 1) as f32;
            assert_eq!(v, expected, "log_n={log_n}, i={i}");
        }
    }
}

#[test]
fn test_sizes_around_register_width() {
    let mut rng = StdRng::seed_from_u64(17);
    let lanes = lane_count::<f32>();

    for n in [lanes / 2, lanes, 2 * lanes, 4 * lanes] {
        let n = n.max(1);
        let log_n = n.trailing_zeros() as i32;
        let x = random_vec(&mut rng, n);

        let mut y: Vec<f32> = x.iter().map(|&v| v as f32).collect();
        fht_f32(&mut y, log_n).unwrap();

        for (a, b) in y.iter().zip(naive(&x)) {
            assert!((*a as f64 - b).abs() < 1e-4 * n as f64, "n={n}");
        }
    }
}

#[test]
fn test_inverse_round_trip() {
    let mut rng = StdRng::seed_from_u64(23);
    let x = random_vec(&mut rng, 1 << 12);

    let mut y = x.clone();
    f64::fht_inplace(&mut y).unwrap();
    f64::ifht_inplace(&mut y).unwrap();

    for (a, b) in y.iter().zip(&x) {
        assert!((a - b).abs() < 1e-12);
    }
}
