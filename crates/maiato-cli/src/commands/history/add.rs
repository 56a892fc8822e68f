use chrono::Local;
use maiato_core::entities::NewHistorial;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    customer: &str,
    occurrence: &str,
    date: Option<&str>,
    response: Option<&str>,
    urgent: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let occurrence_date = parse_date(date, "date")?.unwrap_or_else(|| Local::now().date_naive());
    let new = NewHistorial {
        occurrence: occurrence.to_string(),
        occurrence_date,
        response: response.map(String::from),
        urgent,
    };
    let entry = ctx.service.add_historial(customer, &new).await?;
    output(&entry, flags.format)
}
