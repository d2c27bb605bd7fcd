//! Generate a new project from a local template directory.
//!
//! A project type (`cli`, `test`) selects `<templates>/<type>`. That tree is
//! mirrored into a directory named after the project: files ending in `.tmpl`
//! are rendered with `{{.Name}}`, `{{.Org}}` and `{{.GoVersion}}` and lose the
//! suffix, every other file is copied as is. Afterwards the configured build
//! and test commands run inside the new project.

pub mod app_log;
pub mod args;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod materialize;
pub mod project;
pub mod template;
pub mod template_config;
pub mod template_variables;
pub mod user_parsed_input;

pub use args::{parse_args, resolve_args, AppArgs};
pub use error::ScaffoldError;
pub use generator::{GenerationReport, Generator};

use anyhow::{Context, Result};
use console::style;
use log::{info, warn};

use hooks::configured_hooks;
use user_parsed_input::UserParsedInput;

/// Run a `new` command end to end.
pub fn generate(args: AppArgs) -> Result<GenerationReport> {
    let user_parsed_input = UserParsedInput::try_from_args(&args)?;

    let mut generator = Generator::new(
        user_parsed_input.project(),
        user_parsed_input.render_context().clone(),
    );
    if user_parsed_input.post_create() {
        generator = generator.with_hooks(configured_hooks(user_parsed_input.config()));
    } else {
        warn!("Skipping post create steps");
    }

    let report = generator.run().context("create")?;
    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(report.project_dir.display()).underlined()
    );
    Ok(report)
}
