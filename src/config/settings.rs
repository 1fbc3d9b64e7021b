use std::fmt;
use std::time::Duration;

use crate::error::AppError;

/// Environment variable holding the fallback target language.
pub const DEFAULT_LANGUAGE_ENV: &str = "TGF_DEFAULT_LANGUAGE";
/// Environment variable holding the request timeout in seconds.
pub const REQUEST_TIMEOUT_ENV: &str = "TGF_REQUEST_TIMEOUT";
/// Environment variable holding the OpenAI API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Target language used when neither the CLI nor the environment names one.
pub const FALLBACK_LANGUAGE: &str = "english";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Target language used when `--language` is absent or blank.
    pub default_language: String,
    /// Upper bound for the whole HTTP exchange.
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: FALLBACK_LANGUAGE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    /// Resolves settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_language = non_blank(lookup(DEFAULT_LANGUAGE_ENV))
            .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

        let request_timeout = non_blank(lookup(REQUEST_TIMEOUT_ENV)).map_or(
            DEFAULT_REQUEST_TIMEOUT,
            |raw| match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "ignoring invalid {REQUEST_TIMEOUT_ENV}, using {}s",
                        DEFAULT_REQUEST_TIMEOUT.as_secs()
                    );
                    DEFAULT_REQUEST_TIMEOUT
                }
            },
        );

        Self {
            default_language,
            request_timeout,
        }
    }
}

/// Bearer credential for the translation API.
///
/// `Debug` is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the key through `lookup`, failing when it is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        non_blank(lookup(API_KEY_ENV))
            .map(Self)
            .ok_or(AppError::MissingCredential(API_KEY_ENV))
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over the settings.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language override.
    pub language: Option<String>,
    /// Additional context for the model.
    pub context: Option<String>,
}

/// Configuration for one translation after merging CLI options and settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub target_language: String,
    /// Trimmed context hint, `None` when absent or blank.
    pub context: Option<String>,
}

/// Merges CLI options with settings.
///
/// A non-blank `--language` wins over the configured default. The context
/// hint is independent of the target language.
pub fn resolve_config(options: &ResolveOptions, settings: &Settings) -> ResolvedConfig {
    let target_language = non_blank(options.language.clone())
        .unwrap_or_else(|| settings.default_language.clone());

    ResolvedConfig {
        target_language,
        context: non_blank(options.context.clone()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
