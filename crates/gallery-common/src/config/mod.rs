//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CheckoutConfig, ConfigError, Environment, GenerationConfig,
    StorageConfig,
};
