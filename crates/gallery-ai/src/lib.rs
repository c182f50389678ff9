//! # gallery-ai
//!
//! Adapters for the external generation service behind the
//! `ContentGenerator` port.
//!
//! - [`GeminiClient`]: Gemini `generateContent` over HTTPS
//! - [`DisabledGenerator`]: used when no credential is configured; every call
//!   fails so callers take their fallback path
//!
//! ```ignore
//! use gallery_ai::generator_from_config;
//!
//! let generator = generator_from_config(&config.generation)?;
//! let text = generator.describe("Ethereal Dawn", Category::Paintings).await?;
//! ```

mod disabled;
pub mod gemini;

use std::sync::Arc;

use gallery_common::GenerationConfig;
use gallery_core::{ContentGenerator, GenerationError};

pub use disabled::DisabledGenerator;
pub use gemini::GeminiClient;

/// Pick the adapter matching the configuration
pub fn generator_from_config(
    config: &GenerationConfig,
) -> Result<Arc<dyn ContentGenerator>, GenerationError> {
    if config.is_enabled() {
        Ok(Arc::new(GeminiClient::from_config(config)?))
    } else {
        tracing::info!("No generation credential configured, generation disabled");
        Ok(Arc::new(DisabledGenerator))
    }
}
