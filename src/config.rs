//! Startup configuration, read once from the environment.
//!
//! Missing model credentials abort startup instead of failing on the first
//! request — a deck service without a model key can never do useful work.

use std::env;
use std::path::PathBuf;

/// Default directory for decks saved via `POST /api/ppt/save`.
const DEFAULT_OUTPUT_DIR: &str = "downloads/generatedppts";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Immutable application configuration, shared via `web::Data`.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Gemini generative-model endpoint. Required.
    pub gemini_api_key: String,
    /// Model name, e.g. `gemini-1.5-flash`. Required.
    pub gemini_model: String,
    /// Directory where saved decks are written.
    pub output_dir: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `GEMINI_API_KEY` and `GEMINI_API_MODEL` are required; `OUTPUT_DIR`
    /// and `BIND_ADDR` fall back to defaults.
    pub fn from_env() -> Result<Self, String> {
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY is not set".to_string())?;
        let gemini_model = env::var("GEMINI_API_MODEL")
            .map_err(|_| "GEMINI_API_MODEL is not set".to_string())?;

        if gemini_api_key.trim().is_empty() {
            return Err("GEMINI_API_KEY is empty".to_string());
        }
        if gemini_model.trim().is_empty() {
            return Err("GEMINI_API_MODEL is empty".to_string());
        }

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));
        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Config {
            gemini_api_key,
            gemini_model,
            output_dir,
            bind_addr,
        })
    }
}
