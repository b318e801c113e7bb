use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::cli::{CliCommand, ConvertArgs, DateFormat, KindArg, ListArgs, RemainingArgs};
use crate::config::AppConfig;
use crate::core::dates::{self, DateKind};
use crate::core::{TaskRow, ViewSnapshot};
use crate::source::load_tasks;

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::List(args) => handle_list(config, &args, &mut writer),
        CliCommand::Convert(args) => handle_convert(&args, &mut writer),
        CliCommand::Remaining(args) => handle_remaining(&args, &mut writer),
    }
}

fn handle_list<W: Write>(config: &AppConfig, args: &ListArgs, mut writer: W) -> Result<()> {
    let path = config.tasks_path_or(args.tasks.as_deref());
    let tasks = load_tasks(path)?;
    let (today, now) = reference_time(args.today.as_deref())?;

    let snapshot = ViewSnapshot::build(&tasks, &args.criteria(), today);
    if args.json {
        serde_json::to_writer_pretty(&mut writer, &snapshot.tasks)?;
        writeln!(writer)?;
        return Ok(());
    }

    let rows = snapshot.rows(now);
    write_table(&rows, &mut writer)?;
    writeln!(
        writer,
        "{}",
        SummaryLine::for_snapshot(rows.len(), snapshot.total)
    )?;
    Ok(())
}

fn handle_convert<W: Write>(args: &ConvertArgs, mut writer: W) -> Result<()> {
    let converted = match args.to {
        DateFormat::Storage => dates::to_storage_format(&args.value)?,
        DateFormat::Readable => dates::to_readable_format(&args.value)?,
    };
    writeln!(writer, "{converted}")?;
    Ok(())
}

fn handle_remaining<W: Write>(args: &RemainingArgs, mut writer: W) -> Result<()> {
    let date = dates::parse_storage_date(&args.date)?;
    let (_, now) = reference_time(args.today.as_deref())?;
    let kind = match args.kind {
        KindArg::Start => DateKind::Start,
        KindArg::Due => DateKind::Due,
    };
    writeln!(writer, "{}", dates::days_remaining(date, kind, now))?;
    Ok(())
}

/// The calendar day used by the filters and the instant used by the labels.
/// An explicit date pins both to its local midnight.
fn reference_time(explicit: Option<&str>) -> Result<(NaiveDate, NaiveDateTime)> {
    match explicit {
        Some(value) => {
            let today = dates::parse_storage_date(value)
                .with_context(|| format!("Invalid --today value '{value}'"))?;
            Ok((today, today.and_time(NaiveTime::MIN)))
        }
        None => {
            let now = Local::now().naive_local();
            Ok((now.date(), now))
        }
    }
}

fn write_table<W: Write>(rows: &[TaskRow], mut writer: W) -> Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    let title_width = rows
        .iter()
        .map(|row| row.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    writeln!(
        writer,
        "{:>4}  {:<title_width$}  {:<9}  {:<8}  {:<12}  {:<8}  {:<12}  {}",
        "ID", "Title", "Status", "Priority", "Start", "", "Due", ""
    )?;
    for row in rows {
        writeln!(
            writer,
            "{:>4}  {:<title_width$}  {:<9}  {:<8}  {:<12}  {:<8}  {:<12}  {}",
            row.id,
            row.title,
            row.status,
            row.priority,
            row.start_date,
            row.start_label,
            row.due_date,
            row.due_label
        )?;
    }
    Ok(())
}

enum SummaryLine {
    NoTasks,
    NoneVisible { total: usize },
    Showing { visible: usize, total: usize },
}

impl SummaryLine {
    fn for_snapshot(visible: usize, total: usize) -> Self {
        if total == 0 {
            SummaryLine::NoTasks
        } else if visible == 0 {
            SummaryLine::NoneVisible { total }
        } else {
            SummaryLine::Showing { visible, total }
        }
    }
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryLine::NoTasks => write!(f, "You have no tasks!"),
            SummaryLine::NoneVisible { total } => write!(
                f,
                "No tasks match the current filters ({} hidden)",
                total
            ),
            SummaryLine::Showing { visible, total } => write!(
                f,
                "Showing {} of {} task{}",
                visible,
                total,
                if *total == 1 { "" } else { "s" }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"[
        {"id": 1, "title": "Buy milk", "description": "", "status": "Completed",
         "priority": "Low", "startDate": "2025-01-01", "dueDate": "2025-01-05"},
        {"id": 2, "title": "Write report", "description": "quarterly", "status": "Pending",
         "priority": "High", "startDate": "2025-01-20", "dueDate": "2025-01-30"},
        {"id": 3, "title": "Plan trip", "description": "", "status": "On Hold",
         "priority": "Medium", "startDate": "2025-02-01", "dueDate": "2025-02-10"}
    ]"#;

    fn temp_config(snapshot: &str) -> (AppConfig, TempDir) {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf()).expect("config");
        std::fs::write(config.tasks_path(), snapshot).expect("write snapshot");
        (config, dir)
    }

    fn run(config: &AppConfig, args: &[&str]) -> String {
        let cli = Cli::parse_from(args);
        let mut output = Vec::new();
        execute(config, cli.command_or_default(), &mut output).expect("execute");
        String::from_utf8(output).expect("utf8")
    }

    #[test]
    fn list_hides_completed_and_sorts_by_priority() {
        let (config, _dir) = temp_config(SNAPSHOT);
        let output = run(
            &config,
            &[
                "taskview",
                "list",
                "--hide-completed",
                "--sort",
                "priority",
                "--today",
                "2025-01-23",
            ],
        );

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Write report"));
        assert!(lines[1].contains("30 Jan, 2025"));
        assert!(lines[2].contains("Plan trip"));
        assert!(lines[2].contains("Started!"));
        assert!(!output.contains("Buy milk"));
        assert_eq!(lines[3], "Showing 2 of 3 tasks");
    }

    #[test]
    fn list_json_emits_visible_tasks() {
        let (config, _dir) = temp_config(SNAPSHOT);
        let output = run(
            &config,
            &[
                "taskview", "list", "--search", "report", "--json", "--today", "2025-01-23",
            ],
        );
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 2);
        assert_eq!(items[0]["dueDate"], "2025-01-30");
    }

    #[test]
    fn list_reports_when_filters_hide_everything() {
        let (config, _dir) = temp_config(SNAPSHOT);
        let output = run(
            &config,
            &["taskview", "list", "--search", "nothing", "--today", "2025-01-23"],
        );
        assert_eq!(output.trim(), "No tasks match the current filters (3 hidden)");
    }

    #[test]
    fn list_handles_empty_snapshot() {
        let (config, _dir) = temp_config("[]");
        let output = run(&config, &["taskview"]);
        assert_eq!(output.trim(), "You have no tasks!");
    }

    #[rstest]
    #[case(&["taskview", "convert", "23-01-2025"], "2025-01-23\n")]
    #[case(&["taskview", "convert", "2025-01-23", "--to", "readable"], "23 Jan, 2025\n")]
    #[case(
        &["taskview", "remaining", "2025-01-22", "--kind", "due", "--today", "2025-01-23"],
        "Overdue!\n"
    )]
    #[case(&["taskview", "remaining", "2025-01-24", "--today", "2025-01-23"], "1\n")]
    #[case(
        &["taskview", "remaining", "2025-01-24", "--kind", "start", "--today", "2025-01-23"],
        "Started!\n"
    )]
    fn convert_and_remaining_use_the_date_codec(#[case] args: &[&str], #[case] expected: &str) {
        let (config, _dir) = temp_config("[]");
        assert_eq!(run(&config, args), expected);
    }

    #[test]
    fn invalid_today_is_reported() {
        let (config, _dir) = temp_config(SNAPSHOT);
        let cli = Cli::parse_from(["taskview", "list", "--today", "23-01-2025"]);
        let mut output = Vec::new();
        let err = execute(&config, cli.command_or_default(), &mut output).unwrap_err();
        assert!(err.to_string().contains("Invalid --today value"));
    }
}
