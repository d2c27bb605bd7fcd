//! Error kinds produced while generating a project.
//!
//! Stage context ("create", "new project", "post create") is attached on top of
//! these with [`anyhow::Context`]; the kind itself stays reachable through
//! `anyhow::Error::downcast_ref::<ScaffoldError>()`.

use std::path::PathBuf;
use thiserror::Error;

use crate::template::SyntaxError;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Command line ---
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("project name is required")]
    MissingName,

    #[error("invalid command: {0}")]
    UnknownCommand(String),

    #[error("invalid project type: {0} (supported: cli, test)")]
    UnknownType(String),

    // --- Configuration ---
    #[error("failed to parse config at {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read config at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Materialization ---
    /// The template tree could not be listed or an entry could not be inspected.
    #[error("walk {path}: {reason}")]
    Walk { path: PathBuf, reason: String },

    #[error("make directory {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("copy file {from} to {to}")]
    FileCopy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Rendering ---
    #[error("load template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse template {path}")]
    TemplateSyntax {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    #[error("write rendered file {path}")]
    RenderWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Post create ---
    #[error("{step}: {reason}")]
    PostCreate { step: String, reason: String },
}

impl ScaffoldError {
    pub(crate) fn walk(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Walk {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
