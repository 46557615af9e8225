#![no_main]

use libfuzzer_sys::fuzz_target;
use slide_puzzle::formats::png;

fuzz_target!(|data: &[u8]| {
    if let Ok(size) = png::read_dimensions(data) {
        assert!(size.width > 0 && size.height > 0);
    }
    let _ = png::ihdr_checksum_matches(data);
});
