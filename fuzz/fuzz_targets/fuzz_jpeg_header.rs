#![no_main]

use libfuzzer_sys::fuzz_target;
use slide_puzzle::formats::jpeg;

fuzz_target!(|data: &[u8]| {
    if let Ok(size) = jpeg::read_dimensions(data) {
        assert!(size.width > 0 && size.height > 0);
        assert!(jpeg::find_frame_marker(data).is_some());
    }
});
