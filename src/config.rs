//! Comparison service configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search";
pub const DEFAULT_SHOPPING_COUNTRY: &str = "in";
pub const DEFAULT_SHOPPING_LANGUAGE: &str = "en";
pub const DEFAULT_EMBEDDINGS_URL: &str = "http://localhost:11434/api/embeddings";
pub const DEFAULT_EMBEDDINGS_MODEL: &str = "nomic-embed-text";
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.86;
pub const DEFAULT_MAX_LISTINGS: usize = 8;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set or is blank.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// An environment variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// SerpAPI Google Shopping settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingConfig {
    pub api_key: String,
    pub url: String,
    pub country: String,
    pub language: String,
}

/// Embeddings endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingsConfig {
    pub url: String,
    pub model: String,
}

/// Listing grouping settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingConfig {
    /// Minimum cosine similarity for a listing to join an existing group.
    pub similarity_threshold: f32,
    /// Listings beyond this count are ignored.
    pub max_listings: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self { similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD, max_listings: DEFAULT_MAX_LISTINGS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl ProviderTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

/// Full server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub shopping: ShoppingConfig,
    pub embeddings: EmbeddingsConfig,
    pub grouping: GroupingConfig,
    pub timeouts: ProviderTimeouts,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `SERPAPI_KEY`
    ///
    /// Optional:
    /// - `SERPAPI_URL`, `SHOPPING_COUNTRY` (`in`), `SHOPPING_LANGUAGE` (`en`)
    /// - `EMBEDDINGS_URL`, `EMBEDDINGS_MODEL` (`nomic-embed-text`)
    /// - `GROUP_SIMILARITY_THRESHOLD` (0.86), `GROUP_MAX_LISTINGS` (8)
    /// - `PROVIDER_TIMEOUT_SECS` (15), `PROVIDER_CONNECT_TIMEOUT_SECS` (5)
    /// - `PORT` (3000)
    ///
    /// # Errors
    ///
    /// Returns an error if `SERPAPI_KEY` is absent or a numeric value does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_key = get("SERPAPI_KEY").ok_or(ConfigError::Missing("SERPAPI_KEY"))?;
        let shopping = ShoppingConfig {
            api_key,
            url: get("SERPAPI_URL").unwrap_or_else(|| DEFAULT_SERPAPI_URL.to_owned()),
            country: get("SHOPPING_COUNTRY").unwrap_or_else(|| DEFAULT_SHOPPING_COUNTRY.to_owned()),
            language: get("SHOPPING_LANGUAGE").unwrap_or_else(|| DEFAULT_SHOPPING_LANGUAGE.to_owned()),
        };

        let embeddings = EmbeddingsConfig {
            url: get("EMBEDDINGS_URL").unwrap_or_else(|| DEFAULT_EMBEDDINGS_URL.to_owned()),
            model: get("EMBEDDINGS_MODEL").unwrap_or_else(|| DEFAULT_EMBEDDINGS_MODEL.to_owned()),
        };

        let similarity_threshold = parse_or(
            "GROUP_SIMILARITY_THRESHOLD",
            get("GROUP_SIMILARITY_THRESHOLD"),
            DEFAULT_SIMILARITY_THRESHOLD,
        )?;
        if !(0.0..=1.0).contains(&similarity_threshold) {
            return Err(ConfigError::Invalid {
                var: "GROUP_SIMILARITY_THRESHOLD",
                value: similarity_threshold.to_string(),
            });
        }
        let grouping = GroupingConfig {
            similarity_threshold,
            max_listings: parse_or("GROUP_MAX_LISTINGS", get("GROUP_MAX_LISTINGS"), DEFAULT_MAX_LISTINGS)?,
        };

        let timeouts = ProviderTimeouts {
            request_secs: parse_or("PROVIDER_TIMEOUT_SECS", get("PROVIDER_TIMEOUT_SECS"), DEFAULT_PROVIDER_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "PROVIDER_CONNECT_TIMEOUT_SECS",
                get("PROVIDER_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;

        Ok(Self { port, shopping, embeddings, grouping, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
