//! Content generator port - the external description/image service

use async_trait::async_trait;

use crate::entities::Category;
use crate::error::GenerationError;
use crate::value_objects::GeneratedImage;

/// Result type for generator calls
pub type GenerationResult<T> = Result<T, GenerationError>;

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce a gallery description for a work
    async fn describe(&self, title: &str, category: Category) -> GenerationResult<String>;

    /// Produce an illustration; `Ok(None)` when the service returned no image
    async fn illustrate(
        &self,
        title: &str,
        category: Category,
        tags: &[String],
    ) -> GenerationResult<Option<GeneratedImage>>;
}
