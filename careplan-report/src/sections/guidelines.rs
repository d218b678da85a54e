use careplan_core::{Block, GuidelineReference, Paragraph};

use super::section_start;
use crate::format::label_for;

pub fn guidelines_section(guidelines: &[GuidelineReference]) -> Vec<Block> {
    let mut blocks = section_start("Clinical Guidelines Reference");

    if guidelines.is_empty() {
        blocks.push(Paragraph::body("No clinical guidelines referenced.").into());
        return blocks;
    }

    for guideline in guidelines {
        blocks.push(Block::sub_heading(format!(
            "[{}] {}",
            label_for(&guideline.category),
            guideline.name
        )));

        if let Some(recommendation) = &guideline.recommendation {
            blocks.push(Paragraph::body(recommendation.as_str()).into());
        }

        // A justification only exists alongside a reason.
        if let Some(deviation) = &guideline.deviation {
            blocks.push(Paragraph::labeled("⚠ Deviation:", deviation.reason.as_str()).into());
            if let Some(justification) = &deviation.justification {
                blocks.push(Paragraph::labeled("Justification:", justification.as_str()).into());
            }
        }

        blocks.push(Block::spacer(10.0));
    }

    blocks
}
