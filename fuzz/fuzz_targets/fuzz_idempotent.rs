#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyseries::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    let Some((&p, rest)) = data.split_first() else {
        return;
    };
    let precision = i32::from(p % 11);

    // Small signed steps around a base, like a sensor
    let mut current = 20.0;
    let series: Vec<f64> = rest
        .iter()
        .map(|&b| {
            current += f64::from(b as i8) / 16.0;
            current
        })
        .collect();

    // Property: compress is deterministic
    let text1 = compress(&series, precision).unwrap();
    let text2 = compress(&series, precision).unwrap();
    assert_eq!(text1, text2, "compress not deterministic");

    // Property: decode -> encode reproduces the same text
    let decoded = decompress(&text1).unwrap();
    let text3 = compress(&decoded, precision).unwrap();
    assert_eq!(text1, text3, "re-encoding changed the text");
});
