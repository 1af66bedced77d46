use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::print_transaction_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ledger = ctx.open_ledger()?;

    let transactions = ledger.list_matching(
        args.filter.start.as_deref(),
        args.filter.end.as_deref(),
        args.filter.category.as_deref(),
    )?;

    let ui_ctx = ctx.ui_context(args.json, format);
    print_transaction_list(&ui_ctx, &transactions)
}
