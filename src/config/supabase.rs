//! Supabase configuration

use serde::Deserialize;
use std::time::Duration;

use super::app::Environment;
use super::error::ValidationError;
use crate::adapters::content::SupabaseSourceConfig;

/// Supabase connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL (e.g. https://xyz.supabase.co)
    #[serde(default)]
    pub url: String,

    /// Anonymous (public) API key
    #[serde(default)]
    pub anon_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SupabaseConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds the adapter configuration; the key becomes a secret here.
    pub fn source_config(&self) -> SupabaseSourceConfig {
        SupabaseSourceConfig::new(&self.url, &self.anon_key).with_timeout(self.timeout())
    }

    /// Validate Supabase configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_URL"));
        }
        if self.anon_key.is_empty() {
            return Err(ValidationError::MissingRequired("SUPABASE_ANON_KEY"));
        }

        let is_https = self.url.starts_with("https://");
        if !is_https && !self.url.starts_with("http://") {
            return Err(ValidationError::InvalidSupabaseUrl);
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::SupabaseUrlMustBeHttps);
        }

        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SupabaseConfig {
        SupabaseConfig {
            url: "https://xyz.supabase.co".to_string(),
            anon_key: "anon-key".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_missing_url() {
        let config = SupabaseConfig {
            url: String::new(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("SUPABASE_URL"))
        );
    }

    #[test]
    fn test_validation_missing_anon_key() {
        let config = SupabaseConfig {
            anon_key: String::new(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("SUPABASE_ANON_KEY"))
        );
    }

    #[test]
    fn test_validation_invalid_url_scheme() {
        let config = SupabaseConfig {
            url: "xyz.supabase.co".to_string(),
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidSupabaseUrl)
        );
    }

    #[test]
    fn test_http_allowed_outside_production() {
        let config = SupabaseConfig {
            url: "http://localhost:54321".to_string(),
            ..valid()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::SupabaseUrlMustBeHttps)
        );
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = SupabaseConfig {
            timeout_secs: 0,
            ..valid()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn test_source_config_carries_timeout() {
        let config = SupabaseConfig {
            timeout_secs: 3,
            ..valid()
        };
        let source = config.source_config();
        assert_eq!(source.timeout, Duration::from_secs(3));
        assert_eq!(source.base_url, "https://xyz.supabase.co");
    }
}
