//! Test helpers for integration tests
//!
//! Builds service contexts over real stores with scripted generators, and
//! small shortcuts for signing users in.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use gallery_common::try_init_tracing;
use gallery_core::{
    Artwork, Category, ContentGenerator, EntityId, GeneratedImage, GenerationError,
    GenerationResult, StorageBackend, User, UserRole,
};
use gallery_service::{AuthService, ServiceContext, ServiceContextBuilder};
use gallery_store::{MemoryBackend, Store};

use crate::fixtures::{sign_up_request, unique_suffix};

/// Generator with fixed answers, or one that always errors
#[derive(Debug, Clone)]
pub struct ScriptedGenerator {
    description: Option<String>,
    image: Option<GeneratedImage>,
}

impl ScriptedGenerator {
    pub fn working() -> Self {
        Self {
            description: Some("A quiet meditation in ochre.".to_string()),
            image: Some(GeneratedImage::new("image/png", vec![0x89, 0x50, 0x4e, 0x47])),
        }
    }

    pub fn broken() -> Self {
        Self {
            description: None,
            image: None,
        }
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn describe(&self, _title: &str, _category: Category) -> GenerationResult<String> {
        self.description
            .clone()
            .ok_or_else(|| GenerationError::Transport("connection refused".to_string()))
    }

    async fn illustrate(
        &self,
        _title: &str,
        _category: Category,
        _tags: &[String],
    ) -> GenerationResult<Option<GeneratedImage>> {
        match &self.image {
            Some(image) => Ok(Some(image.clone())),
            None => Err(GenerationError::Transport("connection refused".to_string())),
        }
    }
}

/// Install a subscriber once per test binary; later calls are no-ops
pub fn init_test_tracing() {
    let _ = try_init_tracing();
}

/// Build a context over `backend`, seeded, with no checkout latency
pub fn context_on(
    backend: Arc<dyn StorageBackend>,
    generator: ScriptedGenerator,
) -> Result<ServiceContext> {
    init_test_tracing();
    let store = Store::new(backend);
    store.initialize()?;
    let ctx = ServiceContextBuilder::new()
        .store(store)
        .generator(Arc::new(generator))
        .generation_timeout(Duration::from_millis(500))
        .checkout_delay(Duration::ZERO)
        .build()?;
    Ok(ctx)
}

/// Seeded in-memory context with a working generator
pub fn test_context() -> Result<ServiceContext> {
    context_on(Arc::new(MemoryBackend::new()), ScriptedGenerator::working())
}

/// Seeded in-memory context whose artworks are replaced by `artworks`
pub fn context_with_artworks(artworks: &[Artwork]) -> Result<ServiceContext> {
    let ctx = test_context()?;
    ctx.store().write_artworks(artworks)?;
    Ok(ctx)
}

/// Sign up a fresh user of `role`, leaving them as the session user.
/// Admins cannot self-register, so they are written straight to the store.
pub async fn signed_in(ctx: &ServiceContext, role: UserRole) -> Result<User> {
    if role == UserRole::Admin {
        return provision_admin(ctx);
    }
    Ok(AuthService::new(ctx).sign_up(sign_up_request(role)).await?)
}

/// Insert an admin account and make it the session user
pub fn provision_admin(ctx: &ServiceContext) -> Result<User> {
    let suffix = unique_suffix();
    let admin = User::new(
        EntityId::new(format!("admin-{suffix}")),
        format!("Admin {suffix}"),
        format!("admin{suffix}@example.com"),
        UserRole::Admin,
    );
    ctx.store().transact(|tx| {
        tx.users_mut().push(admin.clone());
        tx.set_session(Some(admin.clone()));
        Ok(())
    })?;
    Ok(admin)
}
