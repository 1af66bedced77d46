//! Tally CLI - A small, file-backed personal bookkeeping ledger
//!
//! This is the command-line interface for Tally. It records income and
//! expenses through the core library and prints balances and reports.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use tally_core::VERSION;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{misc, reports, transactions};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        debug!(error = ?e, "command failed");
        let ui_ctx = UiContext::for_errors(cli.no_color);
        print_error(&ui_ctx, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Add(args)) => {
            transactions::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            transactions::handle_list(ctx, args)?;
        }
        Some(Commands::Balance(args)) => {
            reports::handle_balance(ctx, args)?;
        }
        Some(Commands::Summary(args)) => {
            reports::handle_summary(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Tally v{}", VERSION);
            println!("\nQuickstart:");
            println!("  tally add income 100 salary \"April salary\" --date 2024-04-01");
            println!("  tally add expense 30 market \"Weekly shopping\"");
            println!("  tally list --start 2024-04-01");
            println!("  tally balance");
            println!("  tally summary");
            println!("\nRun `tally --help` for full usage.");
        }
    }

    Ok(())
}
