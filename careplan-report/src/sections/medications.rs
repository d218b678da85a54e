use careplan_core::{Block, MedicationItem, Paragraph, Table, TableRow};

use super::section_start;
use crate::format::or_dash;

const HEADER: [&str; 4] = ["Medication", "Dosage", "Frequency", "Prescriber"];
const COLUMN_WIDTHS: [f32; 4] = [144.0, 86.4, 108.0, 129.6];

pub fn medications_section(medications: &[MedicationItem]) -> Vec<Block> {
    let mut blocks = section_start("Current Medications");

    if medications.is_empty() {
        blocks.push(Paragraph::body("No medications on file.").into());
        return blocks;
    }

    let rows = medications
        .iter()
        .map(|item| TableRow {
            cells: vec![
                item.name.clone(),
                or_dash(item.dosage.as_deref()),
                or_dash(item.frequency.as_deref()),
                or_dash(item.prescriber.as_deref()),
            ],
            tone: None,
        })
        .collect();

    blocks.push(
        Table {
            header: HEADER.iter().map(|h| h.to_string()).collect(),
            rows,
            column_widths: COLUMN_WIDTHS.to_vec(),
        }
        .into(),
    );
    blocks
}
