use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::template_variables::project_name::{validate_project_name, ProjectKind};
use crate::template_variables::ProjectDir;

/// Directory holding one template root per project kind.
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Everything needed to generate one project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
    name: String,
    kind: ProjectKind,
    template_root: PathBuf,
    destination: PathBuf,
}

impl ProjectDescriptor {
    /// `template_root` is `<templates_dir>/<kind>`; it is not checked here.
    pub fn new(
        name: impl Into<String>,
        kind: ProjectKind,
        templates_dir: impl AsRef<Path>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            template_root: templates_dir.as_ref().join(kind.as_str()),
            destination: destination.into(),
        }
    }

    /// Only the name is validated; a bad template root surfaces during the walk.
    pub fn validate(&self) -> Result<()> {
        validate_project_name(&self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn project_dir(&self) -> ProjectDir {
        ProjectDir::new(&self.destination, &self.name)
    }
}
