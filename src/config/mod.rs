//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `PORTFOLIO` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_showcase::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Content from {}", config.supabase.url);
//! ```

mod app;
mod error;
mod showcase;
mod supabase;

pub use app::{AppSettings, Environment};
pub use error::{ConfigError, ValidationError};
pub use showcase::ShowcaseConfig;
pub use supabase::SupabaseConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Runtime settings (environment, logging)
    #[serde(default)]
    pub app: AppSettings,

    /// Supabase content backend
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// Showcase page layout
    #[serde(default)]
    pub showcase: ShowcaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PORTFOLIO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PORTFOLIO__SUPABASE__URL=...` -> `supabase.url = ...`
    /// - `PORTFOLIO__APP__LOG_JSON=true` -> `app.log_json = true`
    ///
    /// Missing required values are reported by [`AppConfig::validate()`],
    /// not here.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PORTFOLIO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.validate()?;
        self.supabase.validate(&self.app.environment)?;
        self.showcase.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.app.is_production()
    }
}
