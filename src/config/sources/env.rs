//! Environment sources.
//!
//! `NOMORA__SECTION__KEY` variables map onto the config tree. The well-known
//! `AI_PROVIDER` and `*_API_KEY` variables are applied last as overrides.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENV_PREFIX: &str = "NOMORA";
pub const ENV_SEPARATOR: &str = "__";

/// Well-known variables and the config keys they override
pub const WELL_KNOWN_VARS: &[(&str, &str)] = &[
    ("AI_PROVIDER", "provider.kind"),
    ("OPENAI_API_KEY", "provider.openai.api_key"),
    ("GEMINI_API_KEY", "provider.gemini.api_key"),
    ("OPENROUTER_API_KEY", "provider.openrouter.api_key"),
];

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .ignore_empty(true),
    );
    add_well_known_overrides(builder)
}

fn add_well_known_overrides(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    for (var, key) in WELL_KNOWN_VARS {
        let value = std::env::var(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(|v| {
                if *var == "AI_PROVIDER" {
                    v.to_lowercase()
                } else {
                    v
                }
            });
        builder = builder.set_override_option(*key, value)?;
    }
    Ok(builder)
}
