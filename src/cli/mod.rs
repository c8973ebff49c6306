pub mod commands;
pub mod limits;
pub mod output;
pub mod system_clock;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use expense_config::ConfigKey;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::utils::build_info;

pub use commands::AppContext;
pub use limits::parse_category_limits;

/// Expense Tracker CLI
#[derive(Debug, Parser)]
#[command(
    name = "expense-tracker",
    about = "Track expenses, monthly budgets and category spending",
    version,
    long_version = build_info::LONG_VERSION
)]
pub struct Cli {
    /// Directory holding expenses.json and budgets.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Add a new expense
    Add {
        /// Expense description
        #[arg(long)]
        description: String,
        /// Expense amount
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
        /// Expense category
        #[arg(long)]
        category: String,
        /// Expense date, defaults to today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },
    /// Delete an expense by id
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// List expenses, optionally filtered
    List {
        /// Month (1-12), requires --year
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Set monthly budget
    SetBudget {
        /// Month (1-12)
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
        /// Budget amount
        #[arg(long, allow_negative_numbers = true)]
        amount: Decimal,
        /// Category limits in format "category1:amount1,category2:amount2"
        #[arg(long)]
        category_limits: Option<String>,
    },
    /// Show the budget set for a month
    ShowBudget {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
    /// Remove the budget set for a month
    RemoveBudget {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
    /// Show category summary
    CategorySummary {
        /// Category name
        #[arg(long)]
        category: String,
        /// Month (1-12), requires --year
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Category-wise spending for a month compared against its budget
    Report {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
    /// List the accepted categories
    Categories,
    /// Export expenses to CSV
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
    /// Show or change stored preferences
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum ConfigAction {
    /// Print the current preferences
    Show,
    /// Change one preference
    Set {
        #[arg(value_enum)]
        key: ConfigField,
        /// New value. Categories are comma separated; "none" clears, "default" restores
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigField {
    CurrencySymbol,
    Categories,
    DataDir,
}

impl From<ConfigField> for ConfigKey {
    fn from(field: ConfigField) -> Self {
        match field {
            ConfigField::CurrencySymbol => ConfigKey::CurrencySymbol,
            ConfigField::Categories => ConfigKey::Categories,
            ConfigField::DataDir => ConfigKey::DataDir,
        }
    }
}

/// Parses process arguments and runs the selected command against stdout.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

/// Runs a parsed command line, writing user-facing output to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let context = AppContext::open(cli.data_dir.as_deref())?;
    commands::dispatch(&context, cli.command, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn all_commands_are_registered() {
        let command = Cli::command();
        let names: Vec<&str> = command.get_subcommands().map(|sub| sub.get_name()).collect();
        for expected in ["add", "set-budget", "category-summary", "export", "delete", "report"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn add_expense_command() {
        let cli = Cli::try_parse_from([
            "expense-tracker",
            "add",
            "--description",
            "Test expense",
            "--amount",
            "50.00",
            "--category",
            "groceries",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Add {
                description: "Test expense".into(),
                amount: dec!(50.00),
                category: "groceries".into(),
                date: None,
            }
        );
    }

    #[test]
    fn set_budget_command() {
        let cli = Cli::try_parse_from([
            "expense-tracker",
            "--data-dir",
            "/tmp/expenses",
            "set-budget",
            "--month",
            "1",
            "--year",
            "2024",
            "--amount",
            "1000.00",
            "--category-limits",
            "groceries:500.00,utilities:200.00",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/expenses")));
        assert_eq!(
            cli.command,
            Command::SetBudget {
                month: 1,
                year: 2024,
                amount: dec!(1000.00),
                category_limits: Some("groceries:500.00,utilities:200.00".into()),
            }
        );
    }

    #[test]
    fn category_summary_command() {
        let cli = Cli::try_parse_from([
            "expense-tracker",
            "category-summary",
            "--category",
            "groceries",
            "--month",
            "1",
            "--year",
            "2024",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::CategorySummary {
                category: "groceries".into(),
                month: Some(1),
                year: Some(2024),
            }
        );
    }

    #[test]
    fn export_command() {
        let cli =
            Cli::try_parse_from(["expense-tracker", "export", "--output", "expenses.csv"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Export {
                output: PathBuf::from("expenses.csv")
            }
        );
    }

    #[test]
    fn config_set_command() {
        let cli = Cli::try_parse_from([
            "expense-tracker",
            "config",
            "set",
            "currency-symbol",
            "€",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Config {
                action: Some(ConfigAction::Set {
                    key: ConfigField::CurrencySymbol,
                    value: "€".into(),
                })
            }
        );

        let cli = Cli::try_parse_from(["expense-tracker", "config"]).unwrap();
        assert_eq!(cli.command, Command::Config { action: None });
        assert!(Cli::try_parse_from(["expense-tracker", "config", "set", "theme", "dark"]).is_err());
    }

    #[test]
    fn invalid_command_and_amount_are_rejected() {
        assert!(Cli::try_parse_from(["expense-tracker", "invalid-command"]).is_err());
        assert!(Cli::try_parse_from([
            "expense-tracker",
            "add",
            "--description",
            "x",
            "--amount",
            "fifty",
            "--category",
            "groceries",
        ])
        .is_err());
    }

    #[test]
    fn negative_amount_reaches_validation() {
        let cli = Cli::try_parse_from([
            "expense-tracker",
            "add",
            "--description",
            "Refund",
            "--amount",
            "-5",
            "--category",
            "groceries",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Add { amount, .. } if amount == dec!(-5)));
    }
}
