use crate::config::Config;
use crate::core::session;
use crate::errors::AppResult;
use std::io;

/// Handle the default `explore` command: run the interactive session on the console.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let iterations = session::run(cfg, stdin.lock(), stdout.lock())?;
    log::info!("session finished after {iterations} iteration(s)");
    Ok(())
}
