//! Steps run against a project after its files have been generated.

mod command;
mod context;

pub use command::CommandHook;
pub use context::HookContext;

use crate::error::Result;
use crate::template_config::Config;

/// Build step used when the config file does not define one.
pub const DEFAULT_BUILD_COMMAND: [&str; 5] = ["go", "build", "-o", "build/{{.Name}}", "."];
/// Test step used when the config file does not define one.
pub const DEFAULT_TEST_COMMAND: [&str; 5] = ["go", "test", "-v", "-count=1", "."];

pub trait PostCreateHook {
    /// Short name used in logs and error messages, e.g. `build`.
    fn step(&self) -> &str;

    fn run(&self, ctx: &HookContext) -> Result<()>;
}

/// The build and test steps, in that order, as configured.
///
/// Steps configured with an empty command are left out.
pub fn configured_hooks(config: &Config) -> Vec<Box<dyn PostCreateHook>> {
    let build = config
        .build_command()
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| DEFAULT_BUILD_COMMAND.map(String::from).to_vec());
    let test = config
        .test_command()
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| DEFAULT_TEST_COMMAND.map(String::from).to_vec());

    [("build", build), ("test", test)]
        .into_iter()
        .filter(|(_, argv)| !argv.is_empty())
        .map(|(step, argv)| Box::new(CommandHook::new(step, argv)) as Box<dyn PostCreateHook>)
        .collect()
}
