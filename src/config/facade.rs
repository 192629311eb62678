//! Configuration loader: assembles the layered sources into a [`NomoraConfig`].

use super::merge::merge_policy;
use super::sources::{env, global_file, workspace_file};
use super::NomoraConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Layers, later wins: defaults, global file, workspace files,
    /// `NOMORA__*` environment, then the well-known provider variables.
    pub fn load(workspace_root: &Path) -> Result<NomoraConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env::add_to_builder(builder)?;

        let config: NomoraConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            provider = %config.provider.kind,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a single file over the defaults.
    ///
    /// Environment layers are not applied; the file is authoritative.
    pub fn load_from_file(path: &Path) -> Result<NomoraConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
