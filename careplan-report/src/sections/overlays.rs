use careplan_core::{Block, OverlaySelection, Paragraph, TextStyle};

use super::section_start;
use crate::format::label_for;

/// One bold line per overlay, in store order, with its notes indented below.
pub fn overlays_section(overlays: &[OverlaySelection]) -> Vec<Block> {
    let mut blocks = section_start("Applied Condition Overlays");

    if overlays.is_empty() {
        blocks.push(Paragraph::body("No condition overlays applied.").into());
        return blocks;
    }

    for overlay in overlays {
        let mut title = label_for(&overlay.category);
        if let Some(subtype) = &overlay.subtype {
            title.push_str(&format!(" ({subtype})"));
        }
        blocks.push(Paragraph::body(format!("• {title}")).emphasized().into());

        if let Some(notes) = &overlay.notes {
            blocks.push(
                Paragraph::body(notes.as_str())
                    .with_style(TextStyle::Small)
                    .indented(1)
                    .into(),
            );
        }
        blocks.push(Block::spacer(5.0));
    }

    blocks
}
