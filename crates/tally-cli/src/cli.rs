use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use rust_decimal::Decimal;

use tally_core::VERSION;

/// Tally - A small, file-backed personal bookkeeping ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger file
    #[arg(short, long, global = true, env = "TALLY_FILE", value_name = "PATH")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Transaction kind (income or expense)
    #[arg(value_name = "KIND")]
    pub kind: String,

    /// Amount, greater than zero
    #[arg(value_name = "AMOUNT", allow_negative_numbers = true)]
    pub amount: Decimal,

    /// Category label
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Description
    #[arg(value_name = "DESCRIPTION")]
    pub description: String,

    /// Transaction date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Date and category filters shared by `list` and `summary`
#[derive(Args)]
pub struct FilterArgs {
    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Category filter (case-insensitive)
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `balance` command
#[derive(Args)]
pub struct BalanceArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record an income or expense
    Add(AddArgs),

    /// List transactions
    List(ListArgs),

    /// Show the current balance
    Balance(BalanceArgs),

    /// Show totals per category
    Summary(SummaryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_date() {
        let cli = Cli::try_parse_from([
            "tally", "--file", "books.json", "add", "expense", "30", "market", "Weekly shopping",
            "--date", "2024-04-02",
        ])
        .unwrap();

        assert_eq!(cli.file.as_deref(), Some("books.json"));
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.kind, "expense");
                assert_eq!(args.amount, Decimal::from(30));
                assert_eq!(args.category, "market");
                assert_eq!(args.date.as_deref(), Some("2024-04-02"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_negative_amount_reaches_validation() {
        let cli = Cli::try_parse_from(["tally", "add", "income", "-5", "x", "y"]).unwrap();
        match cli.command {
            Some(Commands::Add(args)) => assert!(args.amount.is_sign_negative()),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_non_numeric_amount_is_a_parse_error() {
        assert!(Cli::try_parse_from(["tally", "add", "income", "ten", "x", "y"]).is_err());
    }

    #[test]
    fn test_summary_filters() {
        let cli = Cli::try_parse_from([
            "tally", "summary", "--start", "2024-01-01", "--category", "Market",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Summary(args)) => {
                assert_eq!(args.filter.start.as_deref(), Some("2024-01-01"));
                assert!(args.filter.end.is_none());
                assert_eq!(args.filter.category.as_deref(), Some("Market"));
            }
            _ => panic!("expected summary"),
        }
    }
}
