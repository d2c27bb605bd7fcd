use std::path::PathBuf;

use crate::template_variables::RenderContext;

/// What a post-create hook gets to see of the generated project.
#[derive(Debug)]
pub struct HookContext {
    pub render_context: RenderContext,
    pub project_dir: PathBuf,
}
