//! Input from user but after parse

use std::path::PathBuf;

use console::style;
use log::debug;

use crate::args::AppArgs;
use crate::error::ScaffoldError;
use crate::project::{ProjectDescriptor, DEFAULT_TEMPLATES_DIR};
use crate::template_config::{Config, CONFIG_FILE_NAME};
use crate::template_variables::project_name::ProjectKind;
use crate::template_variables::RenderContext;

// Contains parsed information from user, merged with the templates config file.
#[derive(Debug)]
pub struct UserParsedInput {
    name: String,
    kind: ProjectKind,
    templates_dir: PathBuf,

    // empty means the current directory
    destination: PathBuf,

    // built-in defaults, then `scaffold.toml`, then `--org` / `--go-version`
    render_context: RenderContext,

    config: Config,
    post_create: bool,
}

impl UserParsedInput {
    /// Resolve the project type and load the config file next to the templates.
    ///
    /// The name is not validated here; an empty name is reported by the generator.
    pub fn try_from_args(args: &AppArgs) -> Result<Self, ScaffoldError> {
        let kind = args.project_type.parse::<ProjectKind>()?;
        let name = args.name.clone().unwrap_or_default();

        let templates_dir = args
            .templates_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR));
        let config_path = templates_dir.join(CONFIG_FILE_NAME);
        let config = Config::from_path(&config_path)?;
        debug!(
            "{} {}",
            style("Using config:").bold(),
            style(config_path.display()).yellow()
        );

        let mut render_context = RenderContext::new(name.clone());
        if let Some(org) = args.org.as_deref().or(config.org()) {
            render_context = render_context.with_org(org);
        }
        if let Some(go_version) = args.go_version.as_deref().or(config.go_version()) {
            render_context = render_context.with_go_version(go_version);
        }

        Ok(Self {
            name,
            kind,
            templates_dir,
            destination: args.destination.clone().unwrap_or_default(),
            render_context,
            config,
            post_create: !args.no_post_create,
        })
    }

    pub const fn render_context(&self) -> &RenderContext {
        &self.render_context
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn post_create(&self) -> bool {
        self.post_create
    }

    pub fn project(&self) -> ProjectDescriptor {
        ProjectDescriptor::new(
            self.name.clone(),
            self.kind,
            &self.templates_dir,
            self.destination.clone(),
        )
    }
}
