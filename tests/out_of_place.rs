//! Out-of-place transform against the in-place one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fhtly::{fht_f32, fht_f32_oop, fht_f64, fht_f64_oop, FhtError};

#[test]
fn test_oop_equals_inplace_f32() {
    let mut rng = StdRng::seed_from_u64(7);

    for log_n in 0..=14 {
        let n = 1usize << log_n;
        let input: Vec<f32> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();

        let mut output = vec![0.0f32; n];
        let mut expected = input.clone();
        let snapshot = input.clone();

        fht_f32_oop(&input, &mut output, log_n).unwrap();
        fht_f32(&mut expected, log_n).unwrap();

        assert_eq!(output, expected, "log_n={log_n}");
        assert_eq!(input, snapshot, "input modified at log_n={log_n}");
    }
}

#[test]
fn test_oop_equals_inplace_f64() {
    let mut rng = StdRng::seed_from_u64(11);

    for log_n in 0..=14 {
        let n = 1usize << log_n;
        let input: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();

        let mut output = vec![f64::NAN; n];
        let mut expected = input.clone();

        fht_f64_oop(&input, &mut output, log_n).unwrap();
        fht_f64(&mut expected, log_n).unwrap();

        assert_eq!(output, expected, "log_n={log_n}");
    }
}

#[test]
fn test_oop_copy_crosses_memcpy_threshold() {
    // 2^19 f64 values are 4 MiB, well past the vector copy range
    let log_n = 19;
    let n = 1usize << log_n;
    let input: Vec<f64> = (0..n).map(|i| ((i % 17) as f64) - 8.0).collect();

    let mut output = vec![0.0f64; n];
    let mut expected = input.clone();

    fht_f64_oop(&input, &mut output, log_n).unwrap();
    fht_f64(&mut expected, log_n).unwrap();

    assert_eq!(output, expected);
}

#[test]
fn test_oop_invalid_size_writes_nothing() {
    let input = vec![1.0f32; 4];
    let mut output = vec![9.0f32; 4];

    assert_eq!(
        fht_f32_oop(&input, &mut output, 31),
        Err(FhtError::InvalidSize { log_n: 31 })
    );
    assert_eq!(
        fht_f32_oop(&input, &mut output, -1),
        Err(FhtError::InvalidSize { log_n: -1 })
    );
    assert_eq!(output, vec![9.0; 4]);
}

#[test]
fn test_oop_output_length_checked() {
    let input = vec![1.0f64; 8];
    let mut output = vec![0.0f64; 16];

    assert_eq!(
        fht_f64_oop(&input, &mut output, 3),
        Err(FhtError::LengthMismatch {
            expected: 8,
            actual: 16
        })
    );
    assert!(output.iter().all(|&x| x == 0.0));
}
