use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::{FilterCriteria, SortField, ViewCriteria};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "taskview",
    version,
    about = "Search, filter and sort a snapshot of your task list.",
    after_help = "Examples:\n  taskview                         List every task (same as `taskview list`)\n  taskview list --sort priority --hide-completed\n  taskview list --search report --today 2025-01-23\n  taskview convert 23-01-2025\n  taskview remaining 2025-01-30 --kind due"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the tracing filter (e.g. "info", "debug", or full directives)
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Cli {
    /// The subcommand to run, defaulting to an unfiltered listing.
    pub fn command_or_default(&self) -> CliCommand {
        self.command
            .clone()
            .unwrap_or_else(|| CliCommand::List(ListArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Show the filtered and sorted task table (default command)
    List(ListArgs),
    /// Convert a date between entry (DD-MM-YYYY), storage and readable formats
    Convert(ConvertArgs),
    /// Print the days-remaining label for a start or due date
    Remaining(RemainingArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Task snapshot to read (defaults to tasks.json in the data directory)
    #[arg(long = "tasks", value_name = "PATH")]
    pub tasks: Option<PathBuf>,

    /// Only show tasks whose title or description contains TEXT (case-sensitive)
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Field to sort the table by
    #[arg(long, value_enum, default_value_t = SortField::Id)]
    pub sort: SortField,

    /// Hide completed tasks
    #[arg(long)]
    pub hide_completed: bool,

    /// Hide tasks that are not completed
    #[arg(long)]
    pub hide_uncompleted: bool,

    /// Hide tasks whose start date is today or later
    #[arg(long)]
    pub hide_started: bool,

    /// Hide tasks whose start date has passed
    #[arg(long)]
    pub hide_not_started: bool,

    /// Hide tasks whose due date is today or later
    #[arg(long = "hide-before-due")]
    pub hide_before_due_date: bool,

    /// Hide tasks whose due date has passed
    #[arg(long)]
    pub hide_overdue: bool,

    /// Reference date for the date filters and labels (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Print the visible tasks as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn criteria(&self) -> ViewCriteria {
        ViewCriteria {
            search: self.search.clone(),
            filter: FilterCriteria {
                completed: !self.hide_completed,
                uncompleted: !self.hide_uncompleted,
                started: !self.hide_started,
                not_started: !self.hide_not_started,
                before_due_date: !self.hide_before_due_date,
                overdue: !self.hide_overdue,
            },
            sort: self.sort,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DateFormat {
    /// DD-MM-YYYY -> YYYY-MM-DD
    #[default]
    Storage,
    /// YYYY-MM-DD -> "D Mon, YYYY"
    Readable,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Date to convert
    #[arg(value_name = "DATE")]
    pub value: String,

    /// Target format
    #[arg(long, value_enum, default_value_t = DateFormat::Storage)]
    pub to: DateFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Start,
    Due,
}

#[derive(Args, Debug, Clone)]
pub struct RemainingArgs {
    /// Date in storage format (YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: String,

    /// Whether DATE is a start date or a due date
    #[arg(long, value_enum, default_value_t = KindArg::Due)]
    pub kind: KindArg,

    /// Measure from local midnight of this date instead of now (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_unfiltered_list() {
        let cli = Cli::parse_from(["taskview"]);
        match cli.command_or_default() {
            CliCommand::List(args) => {
                assert_eq!(args.criteria(), ViewCriteria::default());
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn hide_flags_switch_filters_off() {
        let cli = Cli::parse_from([
            "taskview",
            "list",
            "--hide-completed",
            "--hide-before-due",
            "--sort",
            "due-date",
            "--search",
            "report",
        ]);
        let Some(CliCommand::List(args)) = cli.command else {
            panic!("expected list command");
        };
        let criteria = args.criteria();
        assert!(!criteria.filter.completed);
        assert!(!criteria.filter.before_due_date);
        assert!(criteria.filter.overdue);
        assert_eq!(criteria.sort, SortField::DueDate);
        assert_eq!(criteria.search, "report");
    }

    #[test]
    fn accepts_camel_case_sort_alias() {
        let cli = Cli::parse_from(["taskview", "list", "--sort", "startDate"]);
        let Some(CliCommand::List(args)) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.sort, SortField::StartDate);
    }
}
