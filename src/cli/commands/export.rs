use crate::cli::commands::load_stats;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        archive,
        table,
        format,
        file,
        force,
    } = cmd
    {
        let stats = load_stats(archive, cfg)?;
        ExportLogic::export_table(&stats, *table, *format, file, *force)?;
    }
    Ok(())
}
