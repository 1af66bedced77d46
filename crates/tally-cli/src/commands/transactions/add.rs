//! Add command handler.

use tally_core::NewTransaction;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::output::print_saved;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;

    let mut new = NewTransaction::new(
        args.kind.as_str(),
        args.amount,
        args.category.as_str(),
        args.description.as_str(),
    );
    if let Some(ref date) = args.date {
        new = new.with_date(date.as_str());
    }

    let transaction = ledger.add(new)?;
    debug!(id = transaction.id, total = ledger.len(), "add complete");

    if ctx.quiet() {
        println!("{}", transaction.id);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    print_saved(&ui_ctx, &transaction);
    Ok(())
}
