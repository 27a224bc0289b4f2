#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyseries::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    // First byte selects the precision, the rest are i16 values
    let Some((&p, rest)) = data.split_first() else {
        return;
    };
    let precision = i32::from(p % 11);

    let series: Vec<f64> = rest
        .chunks_exact(2)
        .map(|c| f64::from(i16::from_le_bytes([c[0], c[1]])))
        .collect();

    // Integers survive any precision: |i16| * 10^10 < 2^62
    let text = compress(&series, precision).expect("integers are always encodable");
    let decoded = decompress(&text).expect("own output must decode");
    assert_eq!(decoded.len(), series.len(), "count mismatch");

    for (i, (d, s)) in decoded.iter().zip(series.iter()).enumerate() {
        assert_eq!(d, s, "value mismatch at {i}: {d} vs {s}");
    }
});
