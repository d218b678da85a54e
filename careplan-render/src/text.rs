//! Paginated monospace text rendering on a fixed page geometry.

use std::path::Path;

use careplan_core::{
    Block, FooterFn, PageContext, PageFooter, PageGeometry, RenderEngine, ReportError,
};
use tracing::debug;

use crate::layout::{center, layout_block};
use crate::write_artifact;

/// 10 pt monospace: 6 pt per character, 12 pt per line.
const CHAR_ADVANCE: f32 = 6.0;
const LINE_HEIGHT: f32 = 12.0;
const FOOTER_LINES: usize = 3;
const PAGE_SEPARATOR: &str = "\u{000C}";

#[derive(Debug, Clone, Default)]
pub struct TextPageRenderer {
    geometry: PageGeometry,
}

impl TextPageRenderer {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    fn line_width(&self) -> usize {
        (self.geometry.content_width() / CHAR_ADVANCE).floor().max(0.0) as usize
    }

    fn body_lines(&self) -> usize {
        let total = (self.geometry.content_height() / LINE_HEIGHT).floor().max(0.0) as usize;
        total.saturating_sub(FOOTER_LINES)
    }

    /// Lay out every block and return the finished pages, footers included.
    pub fn paginate(
        &self,
        blocks: &[Block],
        footer: &FooterFn<'_>,
    ) -> Result<Vec<String>, ReportError> {
        let width = self.line_width();
        let capacity = self.body_lines();
        if width < 20 || capacity == 0 {
            return Err(ReportError::Render(format!(
                "page geometry leaves no room for text ({width} columns, {capacity} lines)"
            )));
        }

        let mut pager = Pager::new(capacity);
        for block in blocks {
            if block.is_page_break() {
                pager.break_page();
                continue;
            }
            let laid_out = layout_block(block, width, CHAR_ADVANCE, LINE_HEIGHT);
            if laid_out.is_spacing {
                pager.push_spacing(laid_out.lines.len());
            } else {
                pager.push_content(laid_out.lines);
            }
        }

        let pages = pager.finish();
        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(idx, body)| {
                let context = PageContext {
                    page_number: idx as u32 + 1,
                };
                compose_page(body, capacity, &footer(&context), width)
            })
            .collect())
    }
}

impl RenderEngine for TextPageRenderer {
    fn render(
        &self,
        blocks: &[Block],
        footer: &FooterFn<'_>,
        output: &Path,
    ) -> Result<(), ReportError> {
        let pages = self.paginate(blocks, footer)?;
        let document = pages.join(PAGE_SEPARATOR);
        write_artifact(output, document.as_bytes())?;
        debug!(pages = pages.len(), output = %output.display(), "text report written");
        Ok(())
    }
}

/// Collects body lines into pages of a fixed height.
struct Pager {
    capacity: usize,
    pages: Vec<Vec<String>>,
    current: Vec<String>,
}

impl Pager {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pages: Vec::new(),
            current: Vec::new(),
        }
    }

    fn remaining(&self) -> usize {
        self.capacity - self.current.len()
    }

    /// Forced breaks on an empty page are ignored.
    fn break_page(&mut self) {
        if !self.current.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        }
    }

    fn push_spacing(&mut self, lines: usize) {
        if self.current.is_empty() {
            return;
        }
        let lines = lines.min(self.remaining());
        self.current.extend(std::iter::repeat(String::new()).take(lines));
        if self.remaining() == 0 {
            self.break_page();
        }
    }

    /// Blocks that fit on a page are kept together; taller ones flow across pages.
    fn push_content(&mut self, lines: Vec<String>) {
        if lines.len() > self.remaining() && lines.len() <= self.capacity {
            self.break_page();
        }
        for line in lines {
            if self.remaining() == 0 {
                self.break_page();
            }
            self.current.push(line);
        }
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        self.break_page();
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        self.pages
    }
}

fn compose_page(mut body: Vec<String>, capacity: usize, footer: &PageFooter, width: usize) -> String {
    while body.last().is_some_and(|line| line.is_empty()) {
        body.pop();
    }
    body.resize(capacity, String::new());

    let left_room = width.saturating_sub(footer.right.chars().count() + 1);
    let left: String = footer.left.chars().take(left_room).collect();
    let gap = width.saturating_sub(left.chars().count() + footer.right.chars().count());

    body.push("_".repeat(width));
    body.push(format!("{left}{}{}", " ".repeat(gap), footer.right));
    body.push(center(&footer.center, width));

    let mut page = body.join("\n");
    page.push('\n');
    page
}

#[cfg(test)]
mod tests {
    use careplan_core::Paragraph;

    use super::*;

    fn footer(context: &PageContext) -> PageFooter {
        PageFooter {
            left: "Confidential".into(),
            center: "Generated: now".into(),
            right: format!("Page {}", context.page_number),
            ..PageFooter::default()
        }
    }

    fn small_page() -> TextPageRenderer {
        // 20 columns, 8 lines of which 5 are body.
        TextPageRenderer::new(PageGeometry {
            width: 140.0,
            height: 116.0,
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 10.0,
            margin_left: 10.0,
        })
    }

    fn line(text: &str) -> Block {
        Paragraph::body(text).into()
    }

    #[test]
    fn default_geometry_fits_eighty_four_columns() {
        let renderer = TextPageRenderer::default();
        assert_eq!(renderer.line_width(), 84);
        assert_eq!(renderer.body_lines(), 54);
    }

    #[test]
    fn forced_breaks_start_new_pages_without_blank_ones() {
        let blocks = vec![
            line("one"),
            Block::PageBreak,
            Block::PageBreak,
            line("two"),
        ];
        let pages = small_page().paginate(&blocks, &footer).expect("paginate");
        assert_eq!(pages.len(), 2);
        assert!(pages[0].starts_with("one\n"));
        assert!(pages[1].starts_with("two\n"));
    }

    #[test]
    fn overflow_moves_blocks_to_the_next_page() {
        let blocks: Vec<Block> = (1..=7).map(|n| line(&format!("line {n}"))).collect();
        let pages = small_page().paginate(&blocks, &footer).expect("paginate");
        assert_eq!(pages.len(), 2);
        assert!(pages[1].starts_with("line 6\nline 7\n"));
    }

    #[test]
    fn every_page_ends_with_three_footer_lines() {
        let blocks = vec![line("a"), Block::PageBreak, line("b")];
        let pages = small_page().paginate(&blocks, &footer).expect("paginate");

        for (idx, page) in pages.iter().enumerate() {
            let lines: Vec<&str> = page.lines().collect();
            assert_eq!(lines.len(), 8);
            assert_eq!(lines[5], "_".repeat(20));
            assert!(lines[6].starts_with("Confidential"));
            assert!(lines[6].ends_with(&format!("Page {}", idx + 1)));
            assert_eq!(lines[6].chars().count(), 20);
            assert_eq!(lines[7].trim(), "Generated: now");
        }
    }

    #[test]
    fn spacing_at_page_top_is_dropped() {
        let blocks = vec![Block::spacer(36.0), line("first")];
        let pages = small_page().paginate(&blocks, &footer).expect("paginate");
        assert!(pages[0].starts_with("first\n"));
    }

    #[test]
    fn tiny_geometry_is_a_render_error() {
        let renderer = TextPageRenderer::new(PageGeometry {
            width: 100.0,
            height: 100.0,
            ..PageGeometry::default()
        });
        let result = renderer.paginate(&[line("x")], &footer);
        assert!(matches!(result, Err(ReportError::Render(_))));
    }
}
