use super::types::PartialOptions;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Json, Toml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config files looked up in the working directory, first hit wins.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["cssdts.config.toml", "cssdts.config.json"];

const ENV_PREFIX: &str = "CSSDTS_";

/// The first default config file present in `cwd`.
pub fn find_config_file(cwd: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| cwd.join(name))
        .find(|path| path.is_file())
}

/// Load the config file and `CSSDTS_*` environment variables.
///
/// An explicit path that does not exist is an error; a missing default file
/// is not. Environment values override file values, so
/// `CSSDTS_EXPORT_TYPE=default` beats `exportType = "named"`.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<PartialOptions> {
    let path = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(ConfigError::NotFound(path).into());
            }
            Some(path)
        }
        None => find_config_file(cwd),
    };

    let mut figment = Figment::new();
    if let Some(path) = &path {
        debug!(path = %path.display(), "Loading config file");
        figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => figment.merge(Json::file(path)),
            _ => figment.merge(Toml::file(path)),
        };
    }

    // CSSDTS_UPDATE_STALE_ONLY -> updateStaleOnly
    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .map(|key| env_key_to_field(key.as_str()).into())
            .lowercase(false),
    );

    figment.extract().map_err(|e| {
        ConfigError::Parse {
            path: path.unwrap_or_else(|| PathBuf::from(format!("<{ENV_PREFIX}* environment>"))),
            message: e.to_string(),
        }
        .into()
    })
}

fn env_key_to_field(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '_' {
            upper = !field.is_empty();
        } else if upper {
            field.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            field.push(c.to_ascii_lowercase());
        }
    }
    field
}
