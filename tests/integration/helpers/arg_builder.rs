use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;

pub fn binary() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

pub trait ArgBuilderExt {
    fn arg_new(&mut self, project_type: &str) -> &mut Self;
    fn arg_name(&mut self, name: &str) -> &mut Self;
    fn arg_templates(&mut self, dir: impl AsRef<Path>) -> &mut Self;
    fn arg_no_post_create(&mut self) -> &mut Self;
}

impl ArgBuilderExt for Command {
    fn arg_new(&mut self, project_type: &str) -> &mut Self {
        self.arg("new").arg(project_type)
    }

    fn arg_name(&mut self, name: &str) -> &mut Self {
        self.arg("--name").arg(name)
    }

    fn arg_templates(&mut self, dir: impl AsRef<Path>) -> &mut Self {
        self.arg("--templates-dir").arg(dir.as_ref())
    }

    fn arg_no_post_create(&mut self) -> &mut Self {
        self.arg("--no-post-create")
    }
}
