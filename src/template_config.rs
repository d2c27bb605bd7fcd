use serde::Deserialize;
use std::convert::TryFrom;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// Optional configuration file looked up in the templates base directory.
pub const CONFIG_FILE_NAME: &str = "scaffold.toml";

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub defaults: Option<DefaultsConfig>,
    pub post_create: Option<PostCreateConfig>,
}

/// Overrides for the built-in render context values.
#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub org: Option<String>,
    pub go_version: Option<String>,
}

/// Commands run inside the new project. An empty list disables the step.
#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PostCreateConfig {
    pub build: Option<Vec<String>>,
    pub test: Option<Vec<String>>,
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> std::result::Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    /// Load the config at `path`. A missing file is the default config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents).map_err(|e| ScaffoldError::Config {
                path: path.to_path_buf(),
                source: e,
            }),
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Ok(Self::default()),
                _ => Err(ScaffoldError::ConfigRead {
                    path: path.to_path_buf(),
                    source: e,
                }),
            },
        }
    }

    pub fn org(&self) -> Option<&str> {
        self.defaults.as_ref()?.org.as_deref()
    }

    pub fn go_version(&self) -> Option<&str> {
        self.defaults.as_ref()?.go_version.as_deref()
    }

    pub fn build_command(&self) -> Option<&[String]> {
        self.post_create.as_ref()?.build.as_deref()
    }

    pub fn test_command(&self) -> Option<&[String]> {
        self.post_create.as_ref()?.test.as_deref()
    }
}
