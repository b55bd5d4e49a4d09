//! API key retrieval from environment variables and `.env` files.

use anyhow::Result;
use std::env;

use crate::config::constants::defaults;

/// Load environment variables from a `.env` file when one exists.
///
/// A missing file is fine. Any other failure is logged and ignored so a
/// malformed file never blocks startup.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => tracing::warn!("failed to load .env file: {err}"),
    }
}

/// Resolve the Gemini API key, trying `env_var` first and then
/// `GOOGLE_API_KEY`. Empty values count as unset.
pub fn resolve_api_key(env_var: &str) -> Result<String> {
    resolve_from(env_var, defaults::FALLBACK_API_KEY_ENV)
}

fn resolve_from(primary: &str, fallback: &str) -> Result<String> {
    for var in [primary, fallback] {
        if let Ok(key) = env::var(var) {
            if !key.is_empty() {
                return Ok(key);
            }
        }
    }
    anyhow::bail!(
        "No Gemini API key found. Set {primary} or {fallback} in the environment or a .env file"
    )
}
