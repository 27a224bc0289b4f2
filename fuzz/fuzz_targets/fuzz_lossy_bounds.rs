#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyseries::{compress, decompress, EncodeError};

fuzz_target!(|data: &[u8]| {
    let Some((&p, rest)) = data.split_first() else {
        return;
    };
    let precision = i32::from(p % 11);

    // Arbitrary f64 bit patterns, including NaN and huge values
    let series: Vec<f64> = rest
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]))
        .collect();

    match compress(&series, precision) {
        Ok(text) => {
            let decoded = decompress(&text).expect("own output must decode");
            assert_eq!(decoded.len(), series.len(), "count mismatch");

            // Property: every value is within half a unit of the last kept digit,
            // plus the float error of scaling very large values
            let scale = 10f64.powi(precision);
            for (d, s) in decoded.iter().zip(series.iter()) {
                let bound = 0.5 / scale + s.abs() * 1e-15;
                assert!((d - s).abs() <= bound, "decoded {d} too far from {s} at precision {precision}");
            }
        }
        Err(EncodeError::NonNumericElement { index }) => {
            assert!(!series[index].is_finite(), "finite value {index} rejected");
            assert!(series[..index].iter().all(|v| v.is_finite()), "not the first bad element");
        }
        Err(EncodeError::ValueOutOfRange { index }) => {
            assert!(series[index].is_finite());
        }
        Err(e @ EncodeError::PrecisionOutOfRange { .. }) => panic!("valid precision rejected: {e}"),
    }
});
