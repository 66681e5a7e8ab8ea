//! ndarray integration and batch transforms.

use ndarray::{s, Array1, Array2};
use ndarray_stats::DeviationExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fhtly::{fht_batch, fht_f64, par_fht_batch, par_fht_rows, FhtArray, FhtError};

fn random_array(rng: &mut StdRng, n: usize) -> Array1<f64> {
    Array1::from_shape_fn(n, |_| rng.random_range(-1.0..1.0))
}

#[test]
fn test_array_matches_slice_api() {
    let mut rng = StdRng::seed_from_u64(1);
    let data = random_array(&mut rng, 256);

    let mut expected = data.to_vec();
    fht_f64(&mut expected, 8).unwrap();
    let expected = Array1::from_vec(expected);

    let out = data.fht().unwrap();
    let mut inplace = data.clone();
    inplace.fht_inplace().unwrap();

    assert_eq!(out.linf_dist(&expected).unwrap(), 0.0);
    assert_eq!(inplace.linf_dist(&expected).unwrap(), 0.0);
}

#[test]
fn test_strided_view_round_trip() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut data = random_array(&mut rng, 128);
    let original = data.clone();

    let mut view = data.slice_mut(s![1..;2]);
    view.fht_inplace().unwrap();
    view.fht_inplace().unwrap();
    view.mapv_inplace(|x| x / 64.0);

    assert!(data.linf_dist(&original).unwrap() < 1e-12);
}

#[test]
fn test_array_wrong_length() {
    let data = Array1::<f32>::zeros(6);

    assert_eq!(data.fht(), Err(FhtError::NotPowerOfTwo { len: 6 }));
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(3);
    let data = random_array(&mut rng, 1 << 18).to_vec();

    let mut sequential = data.clone();
    let mut parallel = data;

    fht_batch(&mut sequential, 8).unwrap();
    par_fht_batch(&mut parallel, 8).unwrap();

    let sequential = Array1::from_vec(sequential);
    let parallel = Array1::from_vec(parallel);

    assert_eq!(sequential.linf_dist(&parallel).unwrap(), 0.0);
}

#[test]
fn test_batch_errors() {
    let mut data = vec![0.0f32; 24];

    assert_eq!(
        par_fht_batch(&mut data, 4),
        Err(FhtError::RaggedBatch {
            len: 24,
            transform_len: 16
        })
    );
    assert_eq!(fht_batch(&mut data, 31), Err(FhtError::InvalidSize { log_n: 31 }));
}

#[test]
fn test_rows_match_batch() {
    let mut rng = StdRng::seed_from_u64(4);
    let rows = Array2::from_shape_fn((64, 512), |_| rng.random_range(-1.0f64..1.0));

    let mut by_rows = rows.clone();
    par_fht_rows(&mut by_rows).unwrap();

    let mut flat = rows.iter().copied().collect::<Vec<_>>();
    fht_batch(&mut flat, 9).unwrap();
    let flat = Array2::from_shape_vec((64, 512), flat).unwrap();

    assert_eq!(by_rows.linf_dist(&flat).unwrap(), 0.0);

    // Column views of the transposed array are strided rows
    let mut transposed = rows.t().as_standard_layout().into_owned();
    let mut view = transposed.view_mut().reversed_axes();
    par_fht_rows(&mut view).unwrap();

    assert_eq!(transposed.t().linf_dist(&flat).unwrap(), 0.0);
}
