use maiato_db::updates::historial::HistorialUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{clearable, parse_date};
use crate::context::AppContext;
use crate::output::output;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    id: &str,
    occurrence: Option<&str>,
    date: Option<&str>,
    response: Option<&str>,
    urgent: Option<bool>,
    viewed: Option<bool>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = HistorialUpdateBuilder::new();
    if let Some(occurrence) = occurrence {
        builder = builder.occurrence(occurrence);
    }
    if let Some(date) = parse_date(date, "date")? {
        builder = builder.occurrence_date(date);
    }
    if let Some(response) = clearable(response) {
        builder = builder.response(response);
    }
    if let Some(urgent) = urgent {
        builder = builder.urgent(urgent);
    }
    if let Some(viewed) = viewed {
        builder = builder.viewed(viewed);
    }

    let entry = ctx.service.update_historial(id, builder.build()).await?;
    output(&entry, flags.format)
}
