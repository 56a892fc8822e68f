use maiato_core::enums::RelationshipKind;
use maiato_core::responses::ReciprocalResponse;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Unknown labels resolve to `outro`, matching how stored labels are read.
pub fn run(label: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&resolve(label), flags.format)
}

fn resolve(label: &str) -> ReciprocalResponse {
    let reciprocal = RelationshipKind::reciprocal_label(label);
    ReciprocalResponse {
        relationship: label.to_string(),
        reciprocal,
        label: reciprocal.display_label().to_string(),
    }
}
