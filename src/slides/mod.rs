//! Slide model for the daily digest.
//!
//! A digest is an ordered, immutable sequence of [`Slide`]s. Each variant
//! carries exactly the fields its layout needs; anything that fails to decode
//! for its declared type becomes a [`Slide::Fallback`] instead of failing the
//! whole sequence.

pub mod markup;

use serde::Deserialize;

/// One unit of displayed content, tagged by its `type` on the wire.
///
/// Decoded item by item in `content::decode_slide`, never deserialized
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    Opening(OpeningSlide),
    News(NewsSlide),
    Markup(MarkupSlide),
    Fallback(FallbackSlide),
}

/// Cover slide shown first in the digest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningSlide {
    /// Display date, e.g. "MONDAY, AUGUST 25, 2025".
    pub date: String,
    /// Greeting headline.
    pub headline: String,
    /// Reading time badge text, e.g. "2 minute read".
    pub reading_time: String,
}

/// A numbered digest item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsSlide {
    /// 1-based position of the item in the digest.
    pub number: u32,
    pub emoji: String,
    pub title: String,
    pub summary: String,
    /// Link to the full article.
    #[serde(default)]
    pub url: Option<String>,
}

/// Filler or terminal slide with opaque markup (history, end, newsletter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupSlide {
    /// The type tag the provider used, e.g. "html" or "raw-html".
    pub kind: String,
    pub content: String,
}

/// Stand-in for an item that did not match its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackSlide {
    pub declared_type: Option<String>,
    pub reason: String,
}

impl Slide {
    /// Wire type tag of this slide.
    pub fn type_tag(&self) -> &str {
        match self {
            Slide::Opening(_) => "opening",
            Slide::News(_) => "news",
            Slide::Markup(markup) => &markup.kind,
            Slide::Fallback(fallback) => fallback.declared_type.as_deref().unwrap_or("unknown"),
        }
    }

    /// External link opened when the slide body is tapped.
    ///
    /// Only news slides with a non-blank `url` are clickable. Position in the
    /// sequence plays no part.
    pub fn link(&self) -> Option<&str> {
        match self {
            Slide::News(news) => news
                .url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty()),
            Slide::Opening(_) | Slide::Markup(_) | Slide::Fallback(_) => None,
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.link().is_some()
    }
}
