//! Nomora: travel generation core
//!
//! Produces feeling catchphrases, trip plan suggestions and chat replies for a
//! Gen Z travel companion, over interchangeable LLM backends (OpenAI,
//! OpenRouter, Gemini) or a deterministic offline mock.

pub mod budget;
pub mod cli;
pub mod config;
pub mod error;
pub mod fallback;
pub mod localization;
pub mod logging;
pub mod orchestrator;
pub mod prompt;
pub mod provider;
pub mod response;
pub mod types;

pub use error::{ErrorKind, GenerationError, ProviderError};
pub use orchestrator::GenerationOrchestrator;
pub use provider::{CompletionBackend, ProviderKind, ProviderRegistry};
