#![no_main]
use libfuzzer_sys::fuzz_target;
use sitemap_builder::escape;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let escaped = escape(s);
        assert!(!escaped.contains(['<', '>', '"', '\'']));
    }
});
