#![no_main]

use libfuzzer_sys::fuzz_target;
use weightshare::{decode, payload_from_url};

fuzz_target!(|data: &[u8]| {
    // Arbitrary text should never panic; malformed payloads return None
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let _ = decode(text);
    if let Some(payload) = payload_from_url(text) {
        let _ = decode(payload);
    }

    // Same bytes behind a valid header reach the chunking code
    let _ = decode(&format!("20240101-3-{text}"));
    let _ = decode(&format!("20240101-4-{text}"));
});
