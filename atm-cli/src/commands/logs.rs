//! Logs command - show the event log of this run

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;

use atm_core::services::LoggingService;
use atm_core::OperationResult;

use crate::output;

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Print the most recent `limit` entries, as a table or JSON
pub fn run(logger: &LoggingService, limit: usize, json: bool) -> Result<()> {
    let entries = logger.get_recent(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(entries))?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Entry", "Event", "Context", "Error"]);

    for entry in entries {
        let context = [entry.command.as_deref(), entry.error_details.as_deref()]
            .iter()
            .filter_map(|&s| s)
            .collect::<Vec<_>>()
            .join(", ");

        let error_indicator = match &entry.error_message {
            Some(kind) => kind.red().to_string(),
            None => String::new(),
        };

        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.entry_point,
            entry.event,
            context,
            error_indicator,
        ]);
    }

    println!("{}", table);

    let errors = logger.get_errors(usize::MAX).len();
    if errors > 0 {
        println!();
        println!(
            "{} {} of {} events were errors",
            "Summary:".bold(),
            errors,
            logger.count()
        );
    }

    Ok(())
}
