//! Shortlink engine: wire contract, transport, and effect execution support.
mod client;
mod clipboard;
mod config;
mod dto;
mod engine;
mod types;

pub use client::{ReqwestShortenClient, ShortenClient};
pub use clipboard::{test_fixtures, ClipboardResult, ClipboardService, SystemClipboard};
pub use config::{api_base_url, parse_base_url, ConfigError, API_URL_ENV};
pub use dto::{ShortenRequest, ShortenResult, GENERIC_FAILURE_MESSAGE};
pub use engine::EngineHandle;
pub use types::{EngineEvent, FailureKind, ShortenOutcome, SubmitError};
