use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, Deleted};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entry = ctx.service.delete_historial(id).await?;
    output(
        &Deleted {
            deleted: "historial",
            id: entry.id,
            label: entry.historial_number,
        },
        flags.format,
    )
}
