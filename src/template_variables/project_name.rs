use std::fmt::Display;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// Fails with [`ScaffoldError::MissingName`] when no usable project name was given.
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::MissingName);
    }
    Ok(())
}

/// Project types that have a template directory under the templates base.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProjectKind {
    Cli,
    Test,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Test => "test",
        }
    }
}

impl FromStr for ProjectKind {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cli" => Ok(Self::Cli),
            "test" => Ok(Self::Test),
            _ => Err(ScaffoldError::UnknownType(s.to_string())),
        }
    }
}

impl Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
