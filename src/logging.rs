//! Diagnostics go to stderr through `log`, filtered by RUST_LOG.
//! The default level is `warn` so prompts and reports on stdout stay clean.

use env_logger::Env;

pub fn init_logging() {
    let env = Env::default().default_filter_or("warn");
    // a second call (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
