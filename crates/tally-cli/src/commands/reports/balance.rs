use crate::app::AppContext;
use crate::cli::BalanceArgs;
use crate::output::print_balance;

pub fn handle_balance(ctx: &AppContext, args: &BalanceArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let currency = ctx.currency()?;

    let ui_ctx = ctx.ui_context(args.json, None);
    print_balance(&ui_ctx, ledger.balance()?, currency)
}
