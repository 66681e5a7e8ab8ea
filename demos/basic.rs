//! Walks through the public API with the kernel picked at build time.
//!
//! ```sh
//! cargo run --release --example basic
//! FHT_BACKEND=fallback cargo run --release --example basic
//! ```

use fhtly::{
    backend_name, fht_f32, fht_f64_oop, lane_count, par_fht_rows, vector_bytes, Fht, FhtArray,
    FhtError,
};
use ndarray::{Array1, Array2};

fn main() -> Result<(), FhtError> {
    println!(
        "backend: {} ({} bytes per register, {} f32 lanes, {} f64 lanes)",
        backend_name(),
        vector_bytes(),
        lane_count::<f32>(),
        lane_count::<f64>()
    );

    // In place
    let mut data = vec![1.0f32, -1.0, 1.0, -1.0];
    fht_f32(&mut data, 2)?;
    println!("H4 · [1, -1, 1, -1] = {:?}", data);

    // Out of place, input untouched
    let input: Vec<f64> = (0..8).map(f64::from).collect();
    let mut output = vec![0.0; 8];
    fht_f64_oop(&input, &mut output, 3)?;
    println!("H8 · {:?} = {:?}", input, output);

    // Normalized inverse
    f64::ifht_inplace(&mut output)?;
    println!("inverse: {:?}", output);

    // ndarray
    let array = Array1::from(vec![0.5f64, 0.25, -0.25, 1.0]);
    println!("array: {}", array.fht()?);

    let mut rows = Array2::from_shape_fn((3, 8), |(i, j)| if j == i { 1.0f32 } else { 0.0 });
    par_fht_rows(&mut rows)?;
    println!("rows of H8:\n{}", rows);

    // Errors come back as values
    let mut bad = vec![0.0f32; 4];
    if let Err(err) = fht_f32(&mut bad, 31) {
        println!("log_n = 31: {} (status {})", err, err.status());
    }

    Ok(())
}
