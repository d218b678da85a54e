use careplan_core::{Block, Paragraph, SdohAssessment, SdohDomain};

use super::{score_table, section_start};

pub fn sdoh_section(assessment: Option<&SdohAssessment>) -> Vec<Block> {
    let mut blocks = section_start("Social Determinants of Health (SDOH)");

    let Some(assessment) = assessment else {
        blocks.push(Paragraph::body("No SDOH assessment data available.").into());
        return blocks;
    };

    let scores = SdohDomain::ALL
        .iter()
        .map(|domain| (domain.label(), assessment.score(*domain)));
    match score_table(scores) {
        Some(table) => {
            blocks.push(table.into());
            blocks.push(Block::spacer(15.0));
        }
        None => blocks.push(Paragraph::body("No SDOH scores recorded.").into()),
    }

    let barriers = assessment.barriers();
    if barriers.is_empty() {
        blocks.push(Paragraph::body("No significant SDOH barriers identified.").into());
    } else {
        blocks.push(Block::sub_heading("Identified Barriers:"));
        for barrier in barriers {
            blocks.push(Paragraph::body(format!("⚠ {}", barrier.label())).into());
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{only_fallback, paragraphs, tables};

    #[test]
    fn absent_assessment_is_a_single_fallback() {
        assert_eq!(
            only_fallback(&sdoh_section(None)),
            "No SDOH assessment data available."
        );
    }

    #[test]
    fn barrier_lines_in_fixed_flag_order() {
        let assessment = SdohAssessment {
            economic: Some(2),
            social: Some(5),
            social_isolation: true,
            housing_insecurity: true,
            ..SdohAssessment::default()
        };
        let blocks = sdoh_section(Some(&assessment));

        assert_eq!(tables(&blocks)[0].rows.len(), 2);
        let lines: Vec<&str> = paragraphs(&blocks).iter().map(|p| p.text.as_str()).collect();
        assert_eq!(lines, vec!["⚠ Housing Insecurity", "⚠ Social Isolation"]);
    }

    #[test]
    fn no_flags_yield_single_no_barriers_paragraph() {
        let assessment = SdohAssessment {
            healthcare: Some(4),
            ..SdohAssessment::default()
        };
        let blocks = sdoh_section(Some(&assessment));
        let lines: Vec<&str> = paragraphs(&blocks).iter().map(|p| p.text.as_str()).collect();
        assert_eq!(lines, vec!["No significant SDOH barriers identified."]);
    }
}
