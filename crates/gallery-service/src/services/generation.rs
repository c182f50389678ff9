//! Generation service
//!
//! Bounds every call to the content generator by the configured timeout and
//! turns any failure into fallback content. Generator errors never reach
//! callers.

use std::future::Future;

use tracing::{debug, instrument, warn};

use gallery_core::{Category, DomainError, GenerationError, GenerationResult};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Description used when the generator fails or times out
pub const DESCRIPTION_FALLBACK: &str = "A beautiful original artwork for your collection.";

/// Description used when the generator answers with empty text
pub const EMPTY_DESCRIPTION_FALLBACK: &str =
    "A stunning piece exploring themes of existence and form.";

/// Generation service
pub struct GenerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GenerationService<'a> {
    /// Create a new GenerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn bounded<T, F>(&self, call: F) -> GenerationResult<T>
    where
        F: Future<Output = GenerationResult<T>>,
    {
        let limit = self.ctx.generation_timeout();
        tokio::time::timeout(limit, call)
            .await
            .unwrap_or(Err(GenerationError::Timeout(limit)))
    }

    /// Gallery description for a work; never fails once the title is present
    #[instrument(skip(self))]
    pub async fn describe(&self, title: &str, category: Category) -> ServiceResult<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::MissingField("title").into());
        }

        let text = match self
            .bounded(self.ctx.generator().describe(title, category))
            .await
        {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => {
                warn!("Generator returned an empty description, using fallback");
                EMPTY_DESCRIPTION_FALLBACK.to_string()
            }
            Err(e) => {
                warn!(error = %e, "Description generation failed, using fallback");
                DESCRIPTION_FALLBACK.to_string()
            }
        };
        Ok(text)
    }

    /// Illustration as a `data:` URL, or `None` when nothing could be generated
    #[instrument(skip(self, tags))]
    pub async fn illustrate(
        &self,
        title: &str,
        category: Category,
        tags: &[String],
    ) -> ServiceResult<Option<String>> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::MissingField("title").into());
        }

        match self
            .bounded(self.ctx.generator().illustrate(title, category, tags))
            .await
        {
            Ok(Some(image)) => {
                debug!(bytes = image.data.len(), "Illustration generated");
                Ok(Some(image.to_data_url()))
            }
            Ok(None) => {
                warn!("Generator returned no image");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Image generation failed");
                Ok(None)
            }
        }
    }
}
