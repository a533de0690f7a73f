#![no_main]

use libfuzzer_sys::fuzz_target;
use proclang::{RenderConfig, parse, render_tree};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        match parse(s) {
            Ok(tree) => {
                // A tree that parsed must also render
                let _ = render_tree(&tree, &RenderConfig::default());
            }
            Err(err) => {
                // Reported offsets never point past the input
                assert!(err.offset() <= s.len());
            }
        }
    }
});
