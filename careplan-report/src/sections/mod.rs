//! One builder per report section.
//!
//! Each builder is a pure function from the loaded entities it needs to an
//! ordered list of blocks, and always yields at least a fallback paragraph.

mod attestation;
mod checklist;
mod guidelines;
mod header;
mod medications;
mod overlays;
mod sdoh;
mod wellness;

pub use attestation::attestation_section;
pub use checklist::checklist_section;
pub use guidelines::guidelines_section;
pub use header::header_section;
pub use medications::medications_section;
pub use overlays::overlays_section;
pub use sdoh::sdoh_section;
pub use wellness::wellness_section;

use careplan_core::{Block, ScoreLevel, Table, TableRow};

const SCORE_TABLE_HEADER: [&str; 3] = ["Domain", "Score", "Status"];
const SCORE_TABLE_WIDTHS: [f32; 3] = [216.0, 72.0, 108.0];

/// Heading, rule and spacing that open every section.
pub(crate) fn section_start(title: &str) -> Vec<Block> {
    vec![Block::section_heading(title), Block::Rule, Block::spacer(10.0)]
}

/// Domain/score/status table. Scores outside 1..=5 get no row.
///
/// Returns `None` when no row survives.
pub(crate) fn score_table<'a>(
    scores: impl IntoIterator<Item = (&'a str, Option<i64>)>,
) -> Option<Table> {
    let rows: Vec<TableRow> = scores
        .into_iter()
        .filter_map(|(label, score)| {
            let level = score.and_then(ScoreLevel::from_score)?;
            Some(TableRow {
                cells: vec![
                    label.to_string(),
                    level.score().to_string(),
                    level.label().to_string(),
                ],
                tone: Some(level),
            })
        })
        .collect();

    if rows.is_empty() {
        return None;
    }

    Some(Table {
        header: SCORE_TABLE_HEADER.iter().map(|h| h.to_string()).collect(),
        rows,
        column_widths: SCORE_TABLE_WIDTHS.to_vec(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use careplan_core::{Block, HeadingLevel, Paragraph};

    pub fn paragraphs(blocks: &[Block]) -> Vec<&Paragraph> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(paragraph) => Some(paragraph),
                _ => None,
            })
            .collect()
    }

    pub fn sub_headings(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading {
                    text,
                    level: HeadingLevel::Sub,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn tables(blocks: &[Block]) -> Vec<&careplan_core::Table> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }

    /// The single paragraph after the section opening.
    pub fn only_fallback(blocks: &[Block]) -> &str {
        assert_eq!(blocks.len(), 4, "heading, rule, spacer, fallback: {blocks:?}");
        match &blocks[3] {
            Block::Paragraph(paragraph) => paragraph.text.as_str(),
            other => panic!("expected fallback paragraph, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table_skips_absent_and_out_of_range_scores() {
        let table = score_table([
            ("A", Some(1)),
            ("B", None),
            ("C", Some(0)),
            ("D", Some(6)),
            ("E", Some(5)),
        ])
        .expect("two valid rows");

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cells, vec!["A", "1", "Crisis"]);
        assert_eq!(table.rows[0].tone, Some(ScoreLevel::Crisis));
        assert_eq!(table.rows[1].cells, vec!["E", "5", "Thriving"]);
        assert_eq!(table.column_widths.len(), table.header.len());
    }

    #[test]
    fn score_table_without_rows_is_omitted() {
        assert!(score_table([("A", None), ("B", Some(0))]).is_none());
    }
}
