#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyseries::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary text to decompress() - should never panic
    // May return an error for malformed input, but should not crash
    let text = String::from_utf8_lossy(data);
    if let Ok(values) = decompress(&text) {
        // Anything that decodes was a valid precision header plus groups,
        // so every value must be finite
        if !values.is_empty() {
            let precision = i32::from(text.as_bytes()[0]) - 63;
            assert!(values.iter().all(|v| v.is_finite()), "non-finite value decoded");
            let _ = compress(&values, precision);
        }
    }
});
