use crate::cli::commands::load_stats;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

/// Handle the `inspect` subcommand: one block per canonical table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { archive } = cmd {
        let stats = load_stats(archive, cfg)?;

        println!();
        print_table_info(
            "sleep",
            stats.sleep().iter().map(|r| (r.time, r.daytime)),
        );
        print_table_info(
            "nursing",
            stats.nursing().iter().map(|r| (r.time, r.daytime)),
        );
        print_table_info(
            "pumped",
            stats.pumped().iter().map(|r| (r.time, r.daytime)),
        );
        print_table_info(
            "all-feeding",
            stats.all_feeding().iter().map(|r| (r.time, r.daytime)),
        );
    }
    Ok(())
}

/// Rows arrive sorted by time, so the first and last give the range.
fn print_table_info(name: &str, rows: impl Iterator<Item = (NaiveDateTime, bool)>) {
    let mut count = 0usize;
    let mut daytime = 0usize;
    let mut first: Option<NaiveDateTime> = None;
    let mut last: Option<NaiveDateTime> = None;

    for (time, is_day) in rows {
        count += 1;
        if is_day {
            daytime += 1;
        }
        first.get_or_insert(time);
        last = Some(time);
    }

    let fmt = |ts: Option<NaiveDateTime>| {
        ts.map(|t| format_timestamp(&t))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{CYAN}• {name}:{RESET} {GREEN}{count}{RESET} rows ({daytime} daytime)");
    println!("    from: {YELLOW}{}{RESET}", fmt(first));
    println!("    to:   {YELLOW}{}{RESET}", fmt(last));
}
