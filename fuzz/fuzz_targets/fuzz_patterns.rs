#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Fuzz matcher construction - invalid patterns must error, not panic
        let patterns: Vec<String> = raw.lines().map(|l| l.to_string()).collect();
        if let Ok(matcher) = mason::PathMatcher::new(Path::new("/fuzz"), &patterns, &patterns) {
            let _ = matcher.is_match(Path::new("src/lib.cs"));
        }
    }
});
