use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use log::info;

use crate::hooks::{HookContext, PostCreateHook};
use crate::materialize::materialize;
use crate::project::ProjectDescriptor;
use crate::template_variables::RenderContext;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub project_dir: PathBuf,
    /// Every created directory and file, in creation order.
    pub created: Vec<PathBuf>,
}

/// Validates a project, materializes its template, then runs the post-create hooks.
pub struct Generator {
    project: ProjectDescriptor,
    render_context: RenderContext,
    hooks: Vec<Box<dyn PostCreateHook>>,
}

impl Generator {
    pub fn new(project: ProjectDescriptor, render_context: RenderContext) -> Self {
        Self {
            project,
            render_context,
            hooks: Vec::new(),
        }
    }

    pub fn with_hook(mut self, hook: Box<dyn PostCreateHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn with_hooks(mut self, hooks: impl IntoIterator<Item = Box<dyn PostCreateHook>>) -> Self {
        self.hooks.extend(hooks);
        self
    }

    /// Stops at the first failure. Files created before it are left on disk.
    pub fn run(&self) -> Result<GenerationReport> {
        self.project.validate()?;

        let project_dir = self.project.project_dir();
        info!(
            "🔧 {}",
            style(format!(
                "Generating {} project `{}` from {} ...",
                self.project.kind(),
                self.project.name(),
                self.project.template_root().display()
            ))
            .bold()
            .yellow()
        );

        let created = materialize(
            self.project.template_root(),
            project_dir.as_ref(),
            &self.render_context,
        )
        .context("new project")?;

        let hook_context = HookContext {
            render_context: self.render_context.clone(),
            project_dir: project_dir.as_ref().to_path_buf(),
        };
        for hook in &self.hooks {
            hook.run(&hook_context).context("post create")?;
        }

        Ok(GenerationReport {
            project_dir: project_dir.into_path_buf(),
            created,
        })
    }
}
