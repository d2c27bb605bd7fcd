use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// The directory a project is generated into: `<destination>/<name>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    pub fn new(destination: impl AsRef<Path>, name: &str) -> Self {
        Self(destination.as_ref().join(name))
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}
