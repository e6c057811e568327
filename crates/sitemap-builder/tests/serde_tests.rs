#![cfg(feature = "serde")]

use sitemap_builder::{ChangeFrequency, RenderOptions, SitemapBuilder, SitemapLocation, SitemapUrl};
use time::macros::datetime;

#[test]
fn test_url_entries_from_json() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"[
        { "loc": "/about", "lastMod": "2024-01-25T20:00:00+09:00", "changeFreq": "daily", "priority": 0.7 },
        { "loc": "https://www.natsuneko.blog/categories" }
    ]"#;
    let urls: Vec<SitemapUrl> = serde_json::from_str(input)?;

    assert_eq!(urls[0].last_mod, Some(datetime!(2024-01-25 20:00:00 +9)));
    assert_eq!(urls[0].change_freq, Some(ChangeFrequency::Daily));
    assert_eq!(urls[1].priority, None);

    let output = urls
        .into_iter()
        .fold(SitemapBuilder::create("https://www.natsuneko.blog").as_url_set(), |b, url| {
            b.add_url(url)
        })
        .build();
    assert!(output.contains(
        "<url><loc>https://www.natsuneko.blog/about</loc><lastmod>2024-01-25T11:00:00.000Z</lastmod><changefreq>daily</changefreq><priority>0.7</priority></url>"
    ));
    assert!(output.contains("<url><loc>https://www.natsuneko.blog/categories</loc></url>"));
    Ok(())
}

#[test]
fn test_unknown_change_frequency_is_rejected() {
    let result: Result<SitemapUrl, _> =
        serde_json::from_str(r#"{ "loc": "/about", "changeFreq": "fortnightly" }"#);
    assert!(result.is_err());
}

#[test]
fn test_location_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
    let location =
        SitemapLocation::new("/sitemap-0.xml").with_last_mod(datetime!(2024-01-25 11:00:00 UTC));
    let json = serde_json::to_string(&location)?;
    assert_eq!(
        json,
        r#"{"url":"/sitemap-0.xml","lastMod":"2024-01-25T11:00:00Z"}"#
    );
    let back: SitemapLocation = serde_json::from_str(&json)?;
    assert_eq!(back, location);

    let bare = serde_json::to_string(&SitemapLocation::new("/s.xml"))?;
    assert_eq!(bare, r#"{"url":"/s.xml"}"#);
    Ok(())
}

#[test]
fn test_render_options_merge_partial_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let options: RenderOptions = serde_json::from_str(r#"{ "minified": false }"#)?;
    assert_eq!(options, RenderOptions::pretty());

    let options: RenderOptions = serde_json::from_str(r#"{ "indentWidth": 4 }"#)?;
    assert_eq!(options, RenderOptions::minified().with_indent(4));

    let options: RenderOptions = serde_json::from_str("{}")?;
    assert_eq!(options, RenderOptions::default());
    Ok(())
}
