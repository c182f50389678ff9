//! Service context - dependency container for services
//!
//! Holds the collection store, the generation port, and the tunables the
//! services read (id generation, generation timeout, checkout latency).

use std::sync::Arc;
use std::time::Duration;

use gallery_ai::generator_from_config;
use gallery_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use gallery_core::{ContentGenerator, EntityId, IdGenerator, IdKind, StorageBackend};
use gallery_store::{FileBackend, MemoryBackend, Store};
use tracing::{debug, info};

use super::error::{ServiceError, ServiceResult};

const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CHECKOUT_DELAY: Duration = Duration::from_millis(1800);

/// Service context containing all dependencies
///
/// This is the dependency container passed by reference to every service.
/// There is no global state: callers build one context at start-up.
#[derive(Clone)]
pub struct ServiceContext {
    store: Store,
    generator: Arc<dyn ContentGenerator>,
    id_generator: Arc<IdGenerator>,
    generation_timeout: Duration,
    checkout_delay: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        store: Store,
        generator: Arc<dyn ContentGenerator>,
        id_generator: Arc<IdGenerator>,
        generation_timeout: Duration,
        checkout_delay: Duration,
    ) -> Self {
        Self {
            store,
            generator,
            id_generator,
            generation_timeout,
            checkout_delay,
        }
    }

    /// Load configuration from the environment and wire a context from it
    pub fn from_env() -> ServiceResult<Self> {
        let config = AppConfig::from_env().map_err(AppError::from)?;
        Self::from_config(&config)
    }

    /// Wire a context from configuration and seed the store.
    ///
    /// Installs the tracing preset for the configured environment unless a
    /// subscriber is already set. Uses a file-backed store when `STORAGE_DIR`
    /// is set, in-memory otherwise.
    pub fn from_config(config: &AppConfig) -> ServiceResult<Self> {
        let tracing_config = TracingConfig::for_environment(config.app.env);
        if try_init_tracing_with_config(&tracing_config).is_err() {
            debug!("Tracing subscriber already installed");
        }

        let quota = config.storage.quota_bytes;
        let backend: Arc<dyn StorageBackend> = match &config.storage.data_dir {
            Some(dir) => {
                info!(dir = %dir.display(), quota, "Opening file-backed store");
                let backend = FileBackend::open(dir).map_err(|e| {
                    AppError::Config(format!("STORAGE_DIR {} is unusable: {e}", dir.display()))
                })?;
                Arc::new(backend.with_quota(quota))
            }
            None => {
                info!(quota, "Using in-memory store");
                Arc::new(MemoryBackend::with_quota(quota))
            }
        };

        let store = Store::new(backend);
        store.initialize()?;

        let generator = generator_from_config(&config.generation)
            .map_err(|e| AppError::Config(e.to_string()))?;

        ServiceContextBuilder::new()
            .store(store)
            .generator(generator)
            .generation_timeout(config.generation.timeout())
            .checkout_delay(config.checkout.processing_delay())
            .build()
    }

    /// Get the collection store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the content generator
    pub fn generator(&self) -> &dyn ContentGenerator {
        self.generator.as_ref()
    }

    /// Upper bound for one generation call
    pub fn generation_timeout(&self) -> Duration {
        self.generation_timeout
    }

    /// Simulated payment gateway latency
    pub fn checkout_delay(&self) -> Duration {
        self.checkout_delay
    }

    /// Generate a fresh id of `kind` that `taken` does not report as used
    pub fn generate_id<F>(&self, kind: IdKind, taken: F) -> EntityId
    where
        F: Fn(&EntityId) -> bool,
    {
        self.id_generator.generate_unique(kind, taken)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &self.store)
            .field("generator", &"dyn ContentGenerator")
            .field("generation_timeout", &self.generation_timeout)
            .field("checkout_delay", &self.checkout_delay)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    store: Option<Store>,
    generator: Option<Arc<dyn ContentGenerator>>,
    id_generator: Option<Arc<IdGenerator>>,
    generation_timeout: Duration,
    checkout_delay: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            generator: None,
            id_generator: None,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
            checkout_delay: DEFAULT_CHECKOUT_DELAY,
        }
    }

    pub fn store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    pub fn generator(mut self, generator: Arc<dyn ContentGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn id_generator(mut self, generator: Arc<IdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    pub fn generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    pub fn checkout_delay(mut self, delay: Duration) -> Self {
        self.checkout_delay = delay;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.store
                .ok_or_else(|| ServiceError::validation("store is required"))?,
            self.generator
                .ok_or_else(|| ServiceError::validation("generator is required"))?,
            self.id_generator.unwrap_or_default(),
            self.generation_timeout,
            self.checkout_delay,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
