//! Report CLI commands

use std::fs::File;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::display::{format_daily, format_range, format_summary};
use crate::error::{KilnError, KilnResult};
use crate::export::write_entries_csv;
use crate::reports::{BusinessSummary, DailySales, SalesRangeReport};
use crate::storage::Storage;

use super::common::parse_date;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Business summary: sales, expenses, profit, net cash
    Summary,

    /// Sales for one day
    Daily {
        /// Day to report (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },

    /// Sales over a date range
    Range {
        /// Start date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with = "last")]
        start: Option<String>,

        /// End date (YYYY-MM-DD, defaults to today)
        #[arg(short, long, conflicts_with = "last")]
        end: Option<String>,

        /// Shortcut: last N days ending today (e.g. 7 or 30)
        #[arg(short, long)]
        last: Option<i64>,
    },

    /// Export entries as CSV
    Export {
        /// Output file path
        output: PathBuf,

        /// Start date filter (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// End date filter (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> KilnResult<()> {
    let entries = storage.entries.all()?;

    match cmd {
        ReportCommands::Summary => {
            let summary = BusinessSummary::compute(&entries);
            print!("{}", format_summary(&summary));
        }

        ReportCommands::Daily { date } => {
            let day = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };
            let report = DailySales::compute(&entries, day);
            print!("{}", format_daily(&report));
        }

        ReportCommands::Range { start, end, last } => {
            let report = match (start, last) {
                (_, Some(days)) => {
                    if days <= 0 {
                        return Err(KilnError::Validation(
                            "--last must be a positive number of days".into(),
                        ));
                    }
                    SalesRangeReport::last_days(&entries, days)
                }
                (Some(s), None) => {
                    let start = parse_date(&s)?;
                    let end = match end {
                        Some(e) => parse_date(&e)?,
                        None => Local::now().date_naive(),
                    };
                    if end < start {
                        return Err(KilnError::Validation(
                            "End date is before start date".into(),
                        ));
                    }
                    SalesRangeReport::compute(&entries, start, end)
                }
                (None, None) => SalesRangeReport::today(&entries),
            };
            print!("{}", format_range(&report));
        }

        ReportCommands::Export {
            output,
            start,
            end,
        } => {
            let start = start.as_deref().map(parse_date).transpose()?;
            let end = end.as_deref().map(parse_date).transpose()?;

            let filtered: Vec<_> = entries
                .into_iter()
                .filter(|e| {
                    let day = e.local_day();
                    start.map(|s| day >= s).unwrap_or(true)
                        && end.map(|en| day <= en).unwrap_or(true)
                })
                .collect();

            let file = File::create(&output).map_err(|e| {
                KilnError::Export(format!("Failed to create {}: {}", output.display(), e))
            })?;
            write_entries_csv(file, &filtered)?;
            println!("Exported {} entries to {}", filtered.len(), output.display());
        }
    }

    Ok(())
}
