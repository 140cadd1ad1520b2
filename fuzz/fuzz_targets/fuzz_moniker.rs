#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Fuzz moniker resolution - a total function that must never panic
        let moniker = mason::resolve(&mason::FrameworkIdentity::new(raw));
        let _ = mason::derive_symbols(&moniker);
    }
});
