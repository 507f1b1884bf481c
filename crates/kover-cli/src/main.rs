//! Kover CLI entry point.

use std::{env, io, path::PathBuf, process};

use log::{debug, info};

use kover::config::DiagnosticStyle;
use kover_cli::{Args, CONFIG_ENV, CliError, error_adapter, execute};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    // Logs share stderr with diagnostics, so they are off unless requested
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("KOVER_LOG", "off"))
        .init();

    let args = match Args::from_argv(env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            eprint!("{}", error_adapter::render(&CliError::Args(err), DiagnosticStyle::Plain));
            process::exit(1);
        }
    };
    info!("Starting Kover");
    debug!(args:?; "Parsed arguments");

    let config_path = env::var_os(CONFIG_ENV).map(PathBuf::from);

    let code = execute(
        &args,
        config_path.as_deref(),
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    info!(code; "Completed");
    process::exit(code);
}
