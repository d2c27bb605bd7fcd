use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ErrorKind};
use clap::{Args, Parser};
use std::env;

use crate::error::ScaffoldError;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
    pub const TEMPLATE_VALUES: &str = "Template Values";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

#[derive(Parser, Debug)]
#[command(
    name = "scaffold-gen",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub enum Cli {
    /// Create a new project from a template
    New(AppArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct AppArgs {
    /// Project type, selects the template directory (cli, test)
    #[arg(value_name = "TYPE", help_heading = heading::TEMPLATE_SELECTION)]
    pub project_type: String,

    /// Name of the project; also the name of the directory that is created
    #[arg(long, short, value_parser, help_heading = heading::OUTPUT_PARAMETERS)]
    pub name: Option<String>,

    /// Directory holding one template directory per project type
    #[arg(long, value_name = "DIR", help_heading = heading::TEMPLATE_SELECTION)]
    pub templates_dir: Option<PathBuf>,

    /// Generate the project inside the given directory instead of the current one
    #[arg(long, value_parser, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Organization substituted for `{{.Org}}`
    #[arg(long, value_name = "ORG", help_heading = heading::TEMPLATE_VALUES)]
    pub org: Option<String>,

    /// Go version substituted for `{{.GoVersion}}`
    #[arg(long, value_name = "VERSION", help_heading = heading::TEMPLATE_VALUES)]
    pub go_version: Option<String>,

    /// Skip the build and test steps after the project is created
    #[arg(long, action, help_heading = heading::OUTPUT_PARAMETERS)]
    pub no_post_create: bool,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// Long flags that may also be written with a single dash, e.g. `-name=acme`.
const LONG_FLAGS: [&str; 7] = [
    "name",
    "templates-dir",
    "destination",
    "org",
    "go-version",
    "no-post-create",
    "verbose",
];

/// Rewrite `-flag` / `-flag=value` into `--flag` / `--flag=value` for known long flags.
fn normalize_single_dash(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(body) = text.strip_prefix('-').filter(|b| !b.starts_with('-')) else {
        return arg;
    };
    let flag = body.split_once('=').map_or(body, |(flag, _)| flag);
    if LONG_FLAGS.contains(&flag) {
        OsString::from(format!("-{text}"))
    } else {
        arg
    }
}

fn first_line(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Parse a full argument list (including the binary name).
///
/// `--help` and `--version` print and exit the process, like clap normally does.
/// Without any arguments the help is printed and the call fails.
pub fn parse_args<I, T>(args: I) -> Result<AppArgs, ScaffoldError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = args
        .into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| if i == 0 { arg } else { normalize_single_dash(arg) });

    match Cli::try_parse_from(args) {
        Ok(Cli::New(args)) => Ok(args),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                // still show the usage, but fail like any other bad invocation
                let _ = e.print();
                Err(ScaffoldError::InvalidArguments(
                    "a command is required".to_string(),
                ))
            }
            ErrorKind::InvalidSubcommand => Err(ScaffoldError::UnknownCommand(
                e.get(ContextKind::InvalidSubcommand)
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| first_line(&e)),
            )),
            _ => Err(ScaffoldError::InvalidArguments(first_line(&e))),
        },
    }
}

/// To get the arguments list from terminal
pub fn resolve_args() -> Result<AppArgs, ScaffoldError> {
    parse_args(env::args_os())
}
