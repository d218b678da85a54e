use careplan_core::{Block, ChecklistItem, Paragraph};

use super::section_start;

pub fn checklist_section(items: &[ChecklistItem]) -> Vec<Block> {
    let mut blocks = section_start("10-Vs of Care Management");

    if items.is_empty() {
        blocks.push(Paragraph::body("No 10-Vs data available.").into());
        return blocks;
    }

    let mut ordered: Vec<&ChecklistItem> = items.iter().collect();
    ordered.sort_by_key(|item| item.key);

    for item in ordered {
        let marker = if item.status.is_completed() { '✓' } else { '○' };
        blocks.push(Block::sub_heading(format!(
            "{marker} V{} – {} ({})",
            item.key.number(),
            item.key.name(),
            item.status.as_str()
        )));

        if let Some(findings) = &item.findings {
            blocks.push(Paragraph::labeled("Findings:", findings.as_str()).into());
        }
        if let Some(recommendations) = &item.recommendations {
            blocks.push(Paragraph::labeled("Recommendations:", recommendations.as_str()).into());
        }
        blocks.push(Block::spacer(8.0));
    }

    blocks
}
