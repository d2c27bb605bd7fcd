use std::env;
use std::path;
use std::process::Command;

use console::style;
use log::{debug, info};

use super::{HookContext, PostCreateHook};
use crate::error::{Result, ScaffoldError};
use crate::template::render_str;

/// Runs an external program inside the project directory.
///
/// Arguments may reference template variables, e.g. `build/{{.Name}}`. Output
/// goes straight to the terminal.
#[derive(Debug, Clone)]
pub struct CommandHook {
    step: String,
    argv: Vec<String>,
}

impl CommandHook {
    pub fn new(step: impl Into<String>, argv: Vec<String>) -> Self {
        Self {
            step: step.into(),
            argv,
        }
    }

    fn failure(&self, reason: impl ToString) -> ScaffoldError {
        ScaffoldError::PostCreate {
            step: self.step.clone(),
            reason: reason.to_string(),
        }
    }

    fn rendered_argv(&self, ctx: &HookContext) -> Result<Vec<String>> {
        self.argv
            .iter()
            .map(|arg| render_str(arg, &ctx.render_context).map_err(|e| self.failure(e)))
            .collect()
    }
}

impl PostCreateHook for CommandHook {
    fn step(&self) -> &str {
        &self.step
    }

    fn run(&self, ctx: &HookContext) -> Result<()> {
        let argv = self.rendered_argv(ctx)?;
        let Some((program, args)) = argv.split_first() else {
            return Err(self.failure("empty command"));
        };
        // `./build.sh` is looked up in the project, like the shell would after `cd`
        let resolved = which::which_in(program, env::var_os("PATH"), &ctx.project_dir)
            .map_err(|_| self.failure(format!("required tool '{program}' not found")))?;
        let resolved = path::absolute(&resolved).map_err(|e| self.failure(e))?;

        info!(
            "🔧 {} {}",
            style(format!("{}:", self.step)).bold().yellow(),
            argv.join(" ")
        );
        debug!("running {} in {}", resolved.display(), ctx.project_dir.display());

        let status = Command::new(&resolved)
            .args(args)
            .current_dir(&ctx.project_dir)
            .status()
            .map_err(|e| self.failure(e))?;
        if !status.success() {
            return Err(self.failure(status));
        }
        Ok(())
    }
}
