use careplan_core::{Block, Paragraph, WellnessAssessment, WellnessDomain};

use super::{score_table, section_start};

pub fn wellness_section(assessment: Option<&WellnessAssessment>) -> Vec<Block> {
    let mut blocks = section_start("4Ps Wellness Assessment");

    let Some(assessment) = assessment else {
        blocks.push(Paragraph::body("No 4Ps assessment data available.").into());
        return blocks;
    };

    let scores = WellnessDomain::ALL
        .iter()
        .map(|domain| (domain.label(), assessment.score(*domain)));
    match score_table(scores) {
        Some(table) => {
            blocks.push(table.into());
            blocks.push(Block::spacer(15.0));
        }
        None => blocks.push(Paragraph::body("No 4Ps scores recorded.").into()),
    }

    for domain in WellnessDomain::ALL {
        if let Some(notes) = assessment.notes(domain) {
            blocks.push(Block::sub_heading(format!("{} Notes:", domain.label())));
            blocks.push(Paragraph::body(notes).into());
            blocks.push(Block::spacer(5.0));
        }
    }

    blocks
}
