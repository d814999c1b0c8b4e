//! Lenient decoding of the `{"stories": [...]}` payload.
//!
//! The envelope must be well formed, but each story is decoded on its own so
//! one bad item turns into a [`Slide::Fallback`] instead of failing the load.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::content::error::ContentError;
use crate::slides::{FallbackSlide, MarkupSlide, NewsSlide, OpeningSlide, Slide};

#[derive(Deserialize)]
struct NewsEnvelope {
    stories: Vec<Value>,
}

#[derive(Deserialize)]
struct MarkupBody {
    content: String,
}

/// Decodes a provider response body into the slide sequence.
pub fn decode_stories(body: &[u8]) -> Result<Vec<Slide>, ContentError> {
    let envelope: NewsEnvelope = serde_json::from_slice(body).map_err(ContentError::Decode)?;
    let slides: Vec<Slide> = envelope.stories.into_iter().map(decode_slide).collect();

    if slides.is_empty() {
        return Err(ContentError::Empty);
    }

    for (index, slide) in slides.iter().enumerate() {
        if let Slide::Fallback(fallback) = slide {
            tracing::warn!(
                index,
                declared_type = slide.type_tag(),
                reason = %fallback.reason,
                "Malformed slide replaced with fallback"
            );
        }
    }
    warn_on_duplicate_numbers(&slides);

    Ok(slides)
}

/// Decodes a single story object according to its `type` tag.
pub fn decode_slide(value: Value) -> Slide {
    let declared = value.get("type").and_then(Value::as_str).map(str::to_owned);
    let Some(kind) = declared else {
        return fallback(None, "missing type tag".to_string());
    };

    let decoded = match kind.as_str() {
        "opening" => serde_json::from_value::<OpeningSlide>(value).map(Slide::Opening),
        "news" => serde_json::from_value::<NewsSlide>(value).and_then(|news| {
            if news.number == 0 {
                Err(serde::de::Error::custom("news number must be at least 1"))
            } else {
                Ok(Slide::News(news))
            }
        }),
        _ => serde_json::from_value::<MarkupBody>(value).map(|body| {
            Slide::Markup(MarkupSlide {
                kind: kind.clone(),
                content: body.content,
            })
        }),
    };

    decoded.unwrap_or_else(|err| fallback(Some(kind), err.to_string()))
}

fn fallback(declared_type: Option<String>, reason: String) -> Slide {
    Slide::Fallback(FallbackSlide {
        declared_type,
        reason,
    })
}

fn warn_on_duplicate_numbers(slides: &[Slide]) {
    let mut seen = HashSet::new();
    for slide in slides {
        if let Slide::News(news) = slide {
            if !seen.insert(news.number) {
                tracing::warn!(number = news.number, "Duplicate news number in digest");
            }
        }
    }
}
