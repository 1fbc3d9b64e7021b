//! Settings resolution and environment file loading.

mod env_file;
mod settings;

pub use env_file::{ENV_FILE_NAME, load_env_file};
pub use settings::{
    API_KEY_ENV, ApiKey, DEFAULT_LANGUAGE_ENV, DEFAULT_REQUEST_TIMEOUT, FALLBACK_LANGUAGE,
    REQUEST_TIMEOUT_ENV, ResolveOptions, ResolvedConfig, Settings, resolve_config,
};
