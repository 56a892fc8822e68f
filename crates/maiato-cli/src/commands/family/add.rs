use maiato_core::entities::NewCustomer;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_relationship;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    owner: &str,
    relative: &NewCustomer,
    relationship: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_relationship(relationship)?;
    let response = ctx.service.link_new_relative(owner, relative, kind).await?;
    output(&response, flags.format)
}
