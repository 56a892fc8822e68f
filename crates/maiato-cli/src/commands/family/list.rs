use maiato_core::responses::FamilyListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(customer: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let members = ctx.service.list_family_members(customer).await?;
    output(
        &FamilyListResponse {
            customer_id: customer.to_string(),
            members,
        },
        flags.format,
    )
}
