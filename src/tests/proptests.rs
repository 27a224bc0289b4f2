use crate::constants::{round_half_up, POW10};
use crate::{compress, decompress, DecodeError};
use proptest::prelude::*;

/// Value at precision `p` as the decoder reconstructs it
fn quantize(value: f64, precision: i32) -> f64 {
    let scale = POW10[precision as usize];
    round_half_up(value * scale) / scale
}

prop_compose! {
    /// Generate a random-walk series, like a slowly varying sensor
    fn arb_walk()(
        start in -1_000_000.0f64..1_000_000.0,
        steps in prop::collection::vec(-50.0f64..50.0, 0..500),
    ) -> Vec<f64> {
        let mut current = start;
        let mut series = Vec::with_capacity(steps.len() + 1);
        series.push(current);
        for step in steps {
            current += step;
            series.push(current);
        }
        series
    }
}

proptest! {
    /// Property: decompress(compress(s, p)) equals s rounded to p digits
    #[test]
    fn prop_roundtrip_quantized(
        series in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 0..300),
        precision in 0i32..=10,
    ) {
        let text = compress(&series, precision).unwrap();
        let decoded = decompress(&text).unwrap();

        prop_assert_eq!(decoded.len(), series.len());
        for (i, (&d, &s)) in decoded.iter().zip(series.iter()).enumerate() {
            prop_assert_eq!(d, quantize(s, precision), "mismatch at {} for {}", i, s);
        }
    }

    /// Property: decoded values stay within half a unit of the last kept digit
    #[test]
    fn prop_lossy_bounds(series in arb_walk(), precision in 0i32..=6) {
        let text = compress(&series, precision).unwrap();
        let decoded = decompress(&text).unwrap();

        let bound = 0.5 / POW10[precision as usize] + 1e-6;
        for (&d, &s) in decoded.iter().zip(series.iter()) {
            prop_assert!((d - s).abs() <= bound, "{} vs {} exceeds {}", d, s, bound);
        }
    }

    /// Property: integers at precision 0 round-trip exactly
    #[test]
    fn prop_integers_lossless(series in prop::collection::vec(-(1i64 << 52)..(1i64 << 52), 0..300)) {
        let floats: Vec<f64> = series.iter().map(|&v| v as f64).collect();
        let text = compress(&floats, 0).unwrap();
        prop_assert_eq!(decompress(&text).unwrap(), floats);
    }

    /// Property: empty only for an empty series, otherwise header + >= 1 char per value
    #[test]
    fn prop_length_bounds(series in arb_walk(), precision in 0i32..=10) {
        let text = compress(&series, precision).unwrap();
        prop_assert!(text.len() > series.len());
        prop_assert!(text.len() <= 1 + series.len() * 13);
    }

    /// Property: every character is printable ASCII in '?'..='~'
    #[test]
    fn prop_printable(series in arb_walk(), precision in 0i32..=10) {
        let text = compress(&series, precision).unwrap();
        prop_assert!(text.chars().all(|c| ('?'..='~').contains(&c)));
    }

    /// Property: compress is deterministic
    #[test]
    fn prop_idempotent(series in arb_walk(), precision in 0i32..=10) {
        prop_assert_eq!(compress(&series, precision).unwrap(), compress(&series, precision).unwrap());
    }

    /// Property: re-encoding the decoded values reproduces the text
    #[test]
    fn prop_reencode_stable(series in arb_walk(), precision in 0i32..=4) {
        let text = compress(&series, precision).unwrap();
        let decoded = decompress(&text).unwrap();
        prop_assert_eq!(compress(&decoded, precision).unwrap(), text);
    }

    /// Property: out-of-range precision is always rejected
    #[test]
    fn prop_precision_out_of_range(precision in prop_oneof![i32::MIN..0, 11..i32::MAX]) {
        prop_assert!(compress(&[1.0], precision).is_err());
        prop_assert!(compress(&[], precision).is_err());
    }

    /// Property: arbitrary text never panics the decoder
    #[test]
    fn prop_decode_arbitrary(text in ".*") {
        let _ = decompress(&text);
    }

    /// Property: chopping a continuation character off the end is detected
    #[test]
    fn prop_truncation_detected(start in 1_000.0f64..1_000_000.0, precision in 0i32..=3) {
        let text = compress(&[start], precision).unwrap();
        // start * 10^p >= 1000, so the group spans several characters
        let cut = &text[..text.len() - 1];
        prop_assert_eq!(decompress(cut), Err(DecodeError::Truncated { offset: cut.len() }));
    }
}
