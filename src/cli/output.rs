//! CLI output: error mapping and JSON rendering for the CLI surface.

use crate::error::GenerationError;
use crate::provider::ProviderRegistry;
use serde::Serialize;
use serde_json::json;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &GenerationError) -> String {
    format!("error[{}]: {}", e.kind, e.message)
}

/// Pretty JSON for any serializable result.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, GenerationError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| GenerationError::unknown(format!("Failed to render output: {}", e)))
}

/// Active kind plus every constructed backend with its model.
pub fn format_providers(registry: &ProviderRegistry) -> Result<String, GenerationError> {
    let configured: Vec<_> = registry
        .configured_kinds()
        .into_iter()
        .filter_map(|kind| {
            registry.get(kind).map(|backend| {
                json!({
                    "kind": kind,
                    "model": backend.model_name(),
                    "active": kind == registry.active_kind(),
                })
            })
        })
        .collect();

    to_pretty_json(&json!({
        "active": registry.active_kind(),
        "configured": configured,
    }))
}
