//! Integration tests for Configuration System

use crate::integration::test_utils::with_isolated_env;
use nomora::cli::RunContext;
use nomora::config::ConfigLoader;
use nomora::provider::{ProviderKind, ProviderRegistry};
use nomora::ErrorKind;
use tempfile::TempDir;

fn write_workspace_config(workspace: &TempDir, name: &str, contents: &str) {
    let dir = workspace.path().join("config");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_workspace_config_builds_registry() {
    let config_home = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_workspace_config(
        &workspace,
        "config.toml",
        r#"
[provider]
kind = "gemini"

[provider.gemini]
api_key = "g-workspace"

[provider.openai]
api_key = "sk-workspace"
"#,
    );

    let config = with_isolated_env(config_home.path(), || {
        ConfigLoader::load(workspace.path()).unwrap()
    });
    assert!(config.validate().is_ok());

    let registry = ProviderRegistry::from_settings(&config.provider).unwrap();
    assert_eq!(registry.active_kind(), ProviderKind::Gemini);
    assert_eq!(
        registry.configured_kinds(),
        vec![ProviderKind::OpenAI, ProviderKind::Gemini, ProviderKind::Mock]
    );
    assert_eq!(
        registry.active_backend().unwrap().model_name(),
        "gemini-2.5-flash-lite"
    );
}

#[test]
fn test_missing_credential_is_fatal_at_startup() {
    let config_home = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_workspace_config(&workspace, "config.toml", "[provider]\nkind = \"openrouter\"\n");

    let result = with_isolated_env(config_home.path(), || {
        RunContext::new(workspace.path().to_path_buf(), None, None)
    });
    let err = result.err().unwrap();
    assert_eq!(err.kind, ErrorKind::ConfigError);
    assert!(err.message.contains("openrouter"));
}

#[test]
fn test_provider_override_selects_mock() {
    let config_home = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_workspace_config(&workspace, "config.toml", "[provider]\nkind = \"openrouter\"\n");

    let context = with_isolated_env(config_home.path(), || {
        RunContext::new(
            workspace.path().to_path_buf(),
            None,
            Some(ProviderKind::Mock),
        )
    })
    .ok()
    .unwrap();
    assert!(context.orchestrator().registry().is_mock());
}

#[test]
fn test_well_known_variables_override_files() {
    let config_home = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let global_dir = config_home.path().join("nomora");
    std::fs::create_dir_all(&global_dir).unwrap();
    std::fs::write(
        global_dir.join("config.toml"),
        "[provider]\nkind = \"gemini\"\n\n[logging]\nlevel = \"warn\"\n",
    )
    .unwrap();

    let config = with_isolated_env(config_home.path(), || {
        std::env::set_var("AI_PROVIDER", "openai");
        std::env::set_var("OPENAI_API_KEY", "sk-from-env");
        std::env::set_var("NOMORA__LOGGING__LEVEL", "debug");
        ConfigLoader::load(workspace.path()).unwrap()
    });

    assert_eq!(config.provider.kind, ProviderKind::OpenAI);
    assert_eq!(config.provider.openai.credential(), Some("sk-from-env"));
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file_rejects_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("absent.toml")).is_err());
}
