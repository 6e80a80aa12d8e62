//! MergeService: orchestrates sources, applies merge policy, deserializes to AppConfig.

use crate::config::sources::global_file;
use crate::config::AppConfig;
use crate::error::ApiError;
use config::{Environment, File, Map};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ApiError> {
        Self::load_with_env(explicit, None)
    }

    /// Like [`MergeService::load`], reading the environment overlay from `vars`
    /// instead of the process environment when given.
    fn load_with_env(
        explicit: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<AppConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ApiError::ConfigError(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                builder.add_source(File::from(path).required(true))
            }
            None => builder,
        };
        let builder = builder.add_source(environment_source(vars));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

/// `CODEVIEW_` prefix, `__` between nested keys: `CODEVIEW_RENDER__INDENT=4`.
fn environment_source(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("CODEVIEW")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}
