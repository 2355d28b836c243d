//! Open a storefront path.

use anyhow::Result;

use super::OpenArgs;
use crate::context::Context;
use crate::router::Route;
use crate::views;

/// Run the open command.
pub async fn run(args: OpenArgs, ctx: &mut Context) -> Result<()> {
    let route = Route::parse(&args.path, ctx.config.store.basename.as_deref());
    ctx.output.debug(&format!("{} -> {:?}", args.path, route));

    match route {
        Route::Home => super::products::show(ctx).await,
        Route::Product(id) => super::product::show(id, ctx).await.map(|_| ()),
        Route::Cart => super::cart::show(ctx),
        Route::Checkout => {
            ctx.output.view(&views::header(ctx.store.state()));
            ctx.output.view(&views::checkout(ctx.store.state(), ctx.currency())?);
            Ok(())
        }
        Route::NotFound(path) => {
            ctx.output.view(&views::not_found(&path));
            Ok(())
        }
    }
}
