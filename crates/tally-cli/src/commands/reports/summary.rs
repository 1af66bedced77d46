use tally_core::summarize;

use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::output::print_summary;

/// Totals per category over the filtered view of the ledger.
pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let currency = ctx.currency()?;

    let transactions = ledger.list_matching(
        args.filter.start.as_deref(),
        args.filter.end.as_deref(),
        args.filter.category.as_deref(),
    )?;
    let summary = summarize(transactions.iter().copied())?;

    let ui_ctx = ctx.ui_context(args.json, None);
    print_summary(&ui_ctx, &summary, currency)
}
