use careplan_core::{Attestation, Block, Paragraph, TextStyle};

use super::section_start;
use crate::format::format_datetime;

const ATTESTATION_STATEMENT: &str = "By finalizing this care plan, the RN attested that all \
information has been reviewed for accuracy, clinical guidelines have been appropriately \
referenced, client-specific overlays have been considered, and this care plan reflects \
appropriate clinical judgment.";

pub fn attestation_section(attestation: Option<&Attestation>) -> Vec<Block> {
    let mut blocks = section_start("Care Plan Attestation");

    let Some(attestation) = attestation else {
        blocks.push(Paragraph::body("This care plan has not been finalized.").into());
        return blocks;
    };

    let attested_at = format_datetime(attestation.attested_at.as_deref().unwrap_or_default());
    blocks.push(Paragraph::body("✓ Care Plan Finalized").emphasized().into());
    blocks.push(Paragraph::body(format!("Attested on {attested_at}")).into());
    blocks.push(Block::spacer(10.0));

    if !attestation.skipped_sections.is_empty() {
        blocks.push(
            Paragraph::labeled(
                "Sections marked N/A:",
                attestation.skipped_sections.join(", "),
            )
            .into(),
        );
        if let Some(justification) = &attestation.skipped_justification {
            blocks.push(Paragraph::labeled("Justification:", justification.as_str()).into());
        }
    }

    blocks.push(Block::spacer(15.0));
    blocks.push(
        Paragraph::body(ATTESTATION_STATEMENT)
            .with_style(TextStyle::Small)
            .into(),
    );
    blocks
}
