use maiato_db::updates::customer::CustomerUpdate;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

/// Raw `customer update` flag values.
pub struct Fields<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub nif: Option<&'a str>,
    pub address: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl Fields<'_> {
    fn to_update(&self) -> CustomerUpdate {
        CustomerUpdate {
            name: self.name.map(String::from),
            email: clearable(self.email),
            phone: clearable(self.phone),
            nif: clearable(self.nif),
            address: clearable(self.address),
            notes: clearable(self.notes),
        }
    }
}

pub async fn run(
    id: &str,
    fields: &Fields<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = fields.to_update();
    if update.is_empty() {
        anyhow::bail!(
            "nothing to update: pass at least one of --name, --email, --phone, --nif, --address, --notes"
        );
    }
    let customer = ctx.service.update_customer(id, update).await?;
    output(&customer, flags.format)
}
