#![no_main]
use libfuzzer_sys::fuzz_target;
use sitemap_builder::{ChangeFrequency, RenderOptions, SitemapBuilder, SitemapUrl};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut lines = s.lines();
        let base = lines.next().unwrap_or_default();
        let builder = lines.enumerate().fold(
            SitemapBuilder::create(base).as_url_set(),
            |builder, (i, loc)| {
                let freq = ChangeFrequency::ALL[i % ChangeFrequency::ALL.len()];
                builder.add_url(SitemapUrl::new(loc).with_change_freq(freq))
            },
        );
        let minified = builder.build();
        let pretty = builder.build_with_options(RenderOptions::pretty());
        assert_eq!(minified.matches("<url>").count(), builder.len());
        assert_eq!(pretty.matches("</url>").count(), builder.len());
    }
});
