mod project_dir;
pub mod project_name;

use std::str::FromStr;

pub use project_dir::ProjectDir;

/// Organization used when neither the config file nor `--org` provide one.
pub const DEFAULT_ORG: &str = "haleyrc";
/// Go version used when neither the config file nor `--go-version` provide one.
pub const DEFAULT_GO_VERSION: &str = "1.16";

/// The only names a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Name,
    Org,
    GoVersion,
}

impl Variable {
    pub const ALL: [Variable; 3] = [Variable::Name, Variable::Org, Variable::GoVersion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Org => "Org",
            Self::GoVersion => "GoVersion",
        }
    }
}

impl FromStr for Variable {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or(())
    }
}

/// Values bound to `.Name`, `.Org` and `.GoVersion` while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub name: String,
    pub org: String,
    pub go_version: String,
}

impl RenderContext {
    /// A context for `name` with the built-in org and Go version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            org: DEFAULT_ORG.to_string(),
            go_version: DEFAULT_GO_VERSION.to_string(),
        }
    }

    pub fn with_org(mut self, org: impl Into<String>) -> Self {
        self.org = org.into();
        self
    }

    pub fn with_go_version(mut self, go_version: impl Into<String>) -> Self {
        self.go_version = go_version.into();
        self
    }

    pub fn get(&self, var: Variable) -> &str {
        match var {
            Variable::Name => &self.name,
            Variable::Org => &self.org,
            Variable::GoVersion => &self.go_version,
        }
    }
}
