use crate::cli::commands::load_stats;
use crate::cli::parser::{AnalyzeFormat, Commands};
use crate::config::Config;
use crate::core::analysis::{DaytimeSleepSummary, analyze_daytime_sleep};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::GREEN;
use crate::utils::histogram::{five_number_summary, render_histogram};
use crate::utils::table::{Cell, Column, Table};
use crate::utils::time::{format_timestamp, hours2readable};

/// Handle the `analyze` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        archive,
        weeks,
        format,
        file,
        force,
    } = cmd
    {
        let weeks = weeks.unwrap_or(cfg.default_weeks);
        let stats = load_stats(archive, cfg)?;
        let summary = analyze_daytime_sleep(stats.sleep(), weeks, &cfg.analysis()?);

        let export_format = match format {
            AnalyzeFormat::Text => None,
            AnalyzeFormat::Csv => Some(ExportFormat::Csv),
            AnalyzeFormat::Json => Some(ExportFormat::Json),
        };

        match (export_format, file) {
            (Some(fmt), Some(path)) => {
                ExportLogic::export_sleep(&summary.rows, fmt, path, *force)?;
                println!("{}", summary.summary());
            }
            (Some(fmt), None) => {
                return Err(AppError::Export(format!(
                    "--file is required for {} output",
                    fmt.as_str()
                )));
            }
            (None, _) => print_report(&summary),
        }
    }
    Ok(())
}

fn print_report(summary: &DaytimeSleepSummary) {
    header(format!(
        "Hours between start of daytime naps in last {} weeks",
        summary.weeks
    ));
    println!("{}", summary.summary());
    println!();

    if summary.rows.is_empty() {
        warning(format!(
            "No daytime naps with a preceding session since {}",
            format_timestamp(&summary.cutoff)
        ));
        return;
    }

    let mut table = Table::new(vec![
        Column::left("Time"),
        Column::right("Duration"),
        Column::left("Sleep end"),
        Column::right("dt_hours"),
    ]);
    for r in &summary.rows {
        table.add_row(vec![
            Cell::from(format_timestamp(&r.time)),
            Cell::from(hours2readable(r.duration_hours())),
            Cell::from(format_timestamp(&r.sleep_end)),
            r.dt_hours
                .map(|h| Cell::colored(format!("{h:.2}"), GREEN))
                .unwrap_or_else(|| Cell::from("-".to_string())),
        ]);
    }
    print!("{}", table.render());
    println!();

    let values = summary.dt_hours();
    info(format!("dt_hours distribution ({} naps)", values.len()));
    print!("{}", render_histogram(&values));

    if let Some(b) = five_number_summary(&values) {
        println!(
            "box: min {:.2} | q1 {:.2} | median {:.2} | q3 {:.2} | max {:.2}",
            b.min, b.q1, b.median, b.q3, b.max
        );
    }
}
