use std::process::ExitCode;
use std::time::Instant;

use log::{error, info};

use scaffold_gen::app_log::log_env_init;
use scaffold_gen::{generate, resolve_args};

fn main() -> ExitCode {
    let start = Instant::now();
    let args = resolve_args();
    log_env_init(args.as_ref().is_ok_and(|a| a.verbose));

    match args.map_err(anyhow::Error::from).and_then(generate) {
        Ok(_) => {
            info!("completed in {:.2?}.", start.elapsed());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
