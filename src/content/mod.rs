//! Content provider collaborators.
//!
//! The pager only ever sees a `Vec<Slide>` or a [`ContentError`]; where the
//! digest comes from is decided once at startup by [`SlideSource`].

mod client;
mod decode;
mod error;
mod sample;

use std::path::PathBuf;

pub use client::{news_endpoint, NewsClient, NEWS_PATH};
pub use decode::{decode_slide, decode_stories};
pub use error::ContentError;
pub use sample::SAMPLE_NEWS;

use crate::slides::Slide;

/// Origin of the slide sequence.
pub enum SlideSource {
    /// `GET <base_url>/api/news`
    Http(NewsClient),
    /// A local file with the same JSON shape.
    File(PathBuf),
    /// The bundled sample digest.
    Sample,
}

impl SlideSource {
    /// Loads the whole sequence once. No retry happens here.
    pub async fn load(&self) -> Result<Vec<Slide>, ContentError> {
        match self {
            SlideSource::Http(client) => client.fetch().await,
            SlideSource::File(path) => {
                let body = tokio::fs::read(path).await.map_err(|source| ContentError::Io {
                    path: path.clone(),
                    source,
                })?;
                decode_stories(&body)
            }
            SlideSource::Sample => decode_stories(SAMPLE_NEWS.as_bytes()),
        }
    }

    /// Short human-readable origin for logs.
    pub fn describe(&self) -> String {
        match self {
            SlideSource::Http(client) => client.endpoint().to_string(),
            SlideSource::File(path) => path.display().to_string(),
            SlideSource::Sample => "bundled sample".to_string(),
        }
    }
}
