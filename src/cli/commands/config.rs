use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = &cli.command
    {
        let path = cli
            .config
            .as_deref()
            .map_or_else(Config::config_file, expand_tilde);

        if *init {
            if path.exists() && !*force {
                warning(format!(
                    "Configuration file already exists: {} (use --force to overwrite)",
                    path.display()
                ));
            } else {
                let written = Config::write_default(Some(&path))?;
                success(format!("Config file: {}", written.display()));
            }
        }

        if *print_config || !*init {
            println!("📄 Configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
