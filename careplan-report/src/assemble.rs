//! Fixed document order and the per-page footer.

use careplan_core::{Block, PageContext, PageFooter, ReportConfig, ReportSnapshot};
use chrono::{DateTime, Local, SecondsFormat};
use tracing::debug;

use crate::sections::{
    attestation_section, checklist_section, guidelines_section, header_section,
    medications_section, overlays_section, sdoh_section, wellness_section,
};

const SECTION_GAP: f32 = 15.0;

/// Build the complete block sequence for a loaded snapshot.
///
/// The order and the two page breaks are fixed:
/// header, wellness, SDOH | overlays, guidelines, checklist | medications, attestation.
pub fn assemble(snapshot: &ReportSnapshot, config: &ReportConfig) -> Vec<Block> {
    let mut blocks = header_section(config, &snapshot.care_plan, snapshot.case.as_ref());

    blocks.extend(wellness_section(snapshot.wellness.as_ref()));
    blocks.push(Block::spacer(SECTION_GAP));
    blocks.extend(sdoh_section(snapshot.sdoh.as_ref()));
    blocks.push(Block::PageBreak);

    blocks.extend(overlays_section(&snapshot.overlays));
    blocks.push(Block::spacer(SECTION_GAP));
    blocks.extend(guidelines_section(&snapshot.guidelines));
    blocks.push(Block::spacer(SECTION_GAP));
    blocks.extend(checklist_section(&snapshot.checklist));
    blocks.push(Block::PageBreak);

    blocks.extend(medications_section(&snapshot.medications));
    blocks.push(Block::spacer(SECTION_GAP));
    blocks.extend(attestation_section(snapshot.attestation.as_ref()));

    debug!(
        care_plan_id = %snapshot.care_plan.id,
        blocks = blocks.len(),
        "report assembled"
    );
    blocks
}

/// Footer text for every page of one render run.
///
/// The generation time is fixed when the footer is created, so all pages of
/// a run carry the same value.
#[derive(Debug, Clone)]
pub struct ReportFooter {
    notice: String,
    generated: String,
    generated_at: String,
}

impl ReportFooter {
    pub fn new(config: &ReportConfig, generated_at: DateTime<Local>) -> Self {
        Self {
            notice: config.confidentiality_notice.clone(),
            generated: generated_at.format("%B %d, %Y at %I:%M %p").to_string(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }

    pub fn page(&self, context: &PageContext) -> PageFooter {
        PageFooter {
            left: self.notice.clone(),
            center: format!("Generated: {}", self.generated),
            right: format!("Page {}", context.page_number),
            generated_at: self.generated_at.clone(),
        }
    }
}
