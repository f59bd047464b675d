use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        check,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            if Config::init_file(path)? {
                success(format!("Config file created: {}", path.display()));
            } else {
                info(format!("Config file already exists: {}", path.display()));
            }
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No config file at {} (defaults are used)",
                    path.display()
                ));
            } else {
                let missing = Config::missing_fields(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults are used): {}",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- PRINT ----
        if *print_config || !(*init || *check) {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
