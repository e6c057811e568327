//! Typed records accumulated by the sitemap builders

use std::fmt;
use std::str::FromStr;

use time::{OffsetDateTime, UtcOffset};

use crate::error::{Error, ErrorKind};

/// How often a page is expected to change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    /// The literal written into `<changefreq>`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| {
                Error::new(ErrorKind::UnknownChangeFrequency {
                    value: s.to_string(),
                })
            })
    }
}

/// One `<sitemap>` entry of a sitemap index
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SitemapLocation {
    /// Absolute `http(s)://` URL, or a path appended to the base URL
    pub url: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub last_mod: Option<OffsetDateTime>,
}

impl SitemapLocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_mod: None,
        }
    }

    pub fn with_last_mod(mut self, last_mod: OffsetDateTime) -> Self {
        self.last_mod = Some(last_mod);
        self
    }
}

impl From<&str> for SitemapLocation {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for SitemapLocation {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

/// One `<url>` entry of a URL set
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SitemapUrl {
    /// Absolute `http(s)://` URL, or a path appended to the base URL
    pub loc: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub last_mod: Option<OffsetDateTime>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub change_freq: Option<ChangeFrequency>,
    /// A priority of zero is treated like no priority at all
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub priority: Option<f64>,
}

impl SitemapUrl {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            last_mod: None,
            change_freq: None,
            priority: None,
        }
    }

    pub fn with_last_mod(mut self, last_mod: OffsetDateTime) -> Self {
        self.last_mod = Some(last_mod);
        self
    }

    pub fn with_change_freq(mut self, change_freq: ChangeFrequency) -> Self {
        self.change_freq = Some(change_freq);
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = Some(priority);
        self
    }
}

impl From<&str> for SitemapUrl {
    fn from(loc: &str) -> Self {
        Self::new(loc)
    }
}

impl From<String> for SitemapUrl {
    fn from(loc: String) -> Self {
        Self::new(loc)
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:mm:ss.sssZ` in UTC.
///
/// Years outside `0..=9999` use the expanded `±YYYYYY` form.
pub fn format_last_mod(value: OffsetDateTime) -> String {
    let utc = value.checked_to_offset(UtcOffset::UTC).unwrap_or(value);
    let year = utc.year();
    let year = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+07}")
    };
    format!(
        "{year}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.millisecond()
    )
}

/// Text for `<priority>`, or None when the element is omitted.
///
/// Zero (either sign) and NaN count as "no priority".
/// Finite values use Rust's shortest round-trip form, so tiny and huge
/// values print in full (`0.0000001`) rather than in exponent form (`1e-7`).
pub fn format_priority(priority: f64) -> Option<String> {
    if priority == 0.0 || priority.is_nan() {
        return None;
    }
    if priority.is_infinite() {
        let text = if priority.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return Some(text.to_string());
    }
    Some(priority.to_string())
}
