//! Generator used when the service is not configured

use async_trait::async_trait;

use gallery_core::{Category, ContentGenerator, GeneratedImage, GenerationError, GenerationResult};

/// Always reports the service as unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

const REASON: &str = "no generation credential configured";

#[async_trait]
impl ContentGenerator for DisabledGenerator {
    async fn describe(&self, _title: &str, _category: Category) -> GenerationResult<String> {
        Err(GenerationError::Unavailable(REASON.to_string()))
    }

    async fn illustrate(
        &self,
        _title: &str,
        _category: Category,
        _tags: &[String],
    ) -> GenerationResult<Option<GeneratedImage>> {
        Err(GenerationError::Unavailable(REASON.to_string()))
    }
}
