//! Shared fixtures for service unit tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use gallery_core::{
    Category, ContentGenerator, EntityId, GeneratedImage, GenerationError, GenerationResult,
    PaymentProvider, User, UserRole,
};
use gallery_store::Store;

use crate::dto::{PaymentAccountInput, SignUpRequest};
use crate::services::{AuthService, ServiceContext, ServiceContextBuilder};

/// Generator returning canned output, or failing when `fail` is set
pub struct StubGenerator {
    pub description: String,
    pub image: Option<GeneratedImage>,
    pub fail: bool,
}

impl StubGenerator {
    pub fn working() -> Self {
        Self {
            description: "A luminous study.".to_string(),
            image: Some(GeneratedImage::new("image/png", vec![1, 2, 3])),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            description: String::new(),
            image: None,
            fail: true,
        }
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn describe(&self, _title: &str, _category: Category) -> GenerationResult<String> {
        if self.fail {
            return Err(GenerationError::Unavailable("stub".to_string()));
        }
        Ok(self.description.clone())
    }

    async fn illustrate(
        &self,
        _title: &str,
        _category: Category,
        _tags: &[String],
    ) -> GenerationResult<Option<GeneratedImage>> {
        if self.fail {
            return Err(GenerationError::Unavailable("stub".to_string()));
        }
        Ok(self.image.clone())
    }
}

/// Seeded in-memory context with no checkout latency
pub fn context_with(generator: StubGenerator) -> ServiceContext {
    let store = Store::in_memory();
    store.initialize().unwrap();
    ServiceContextBuilder::new()
        .store(store)
        .generator(Arc::new(generator))
        .generation_timeout(Duration::from_millis(200))
        .checkout_delay(Duration::ZERO)
        .build()
        .unwrap()
}

pub fn context() -> ServiceContext {
    context_with(StubGenerator::working())
}

/// Sign up (and log in as) a user of `role`; artists get a PayPal account.
/// Admins cannot self-register, so they are written straight to the store.
pub async fn sign_up(ctx: &ServiceContext, name: &str, role: UserRole) -> User {
    if role == UserRole::Admin {
        return provision_admin(ctx, name);
    }
    let payment_account = (role == UserRole::Artist).then(|| PaymentAccountInput {
        provider: PaymentProvider::PayPal,
        identifier: format!("{}@paypal.test", name.to_lowercase()),
    });
    AuthService::new(ctx)
        .sign_up(SignUpRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role,
            payment_account,
        })
        .await
        .unwrap()
}

fn provision_admin(ctx: &ServiceContext, name: &str) -> User {
    let admin = User::new(
        EntityId::new(format!("admin-{}", name.to_lowercase())),
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
        UserRole::Admin,
    );
    ctx.store()
        .transact(|tx| {
            tx.users_mut().push(admin.clone());
            tx.set_session(Some(admin.clone()));
            Ok(())
        })
        .unwrap();
    admin
}
