use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let customers = match search {
        Some(query) => ctx.service.search_customers(query, limit).await?,
        None => ctx.service.list_customers(limit).await?,
    };
    output(&customers, flags.format)
}
