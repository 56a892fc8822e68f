use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_relationship;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    owner: &str,
    target: &str,
    relationship: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_relationship(relationship)?;
    let pair = ctx
        .service
        .link_existing_customer(owner, target, kind)
        .await?;
    output(&pair, flags.format)
}
