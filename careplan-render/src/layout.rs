//! Turns single blocks into fixed-width text lines.

use careplan_core::{Block, HeadingLevel, KeyValue, Paragraph, Table, TextStyle};

const INDENT_WIDTH: usize = 4;
const COLUMN_GAP: usize = 2;

/// Lines produced for one block.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct BlockLines {
    pub lines: Vec<String>,
    /// Vertical space only; dropped at the top of a page.
    pub is_spacing: bool,
}

pub(crate) fn layout_block(
    block: &Block,
    width: usize,
    char_advance: f32,
    line_height: f32,
) -> BlockLines {
    match block {
        Block::Title { text } => BlockLines {
            lines: wrap(&text.to_uppercase(), width)
                .into_iter()
                .map(|line| center(&line, width))
                .collect(),
            is_spacing: false,
        },
        Block::Heading { text, level } => {
            let text = match level {
                HeadingLevel::Section => text.to_uppercase(),
                HeadingLevel::Sub => text.clone(),
            };
            content(wrap(&text, width))
        }
        Block::Paragraph(paragraph) => content(layout_paragraph(paragraph, width)),
        Block::Rule => content(vec!["-".repeat(width)]),
        Block::Spacer { points } => {
            let count = (points / line_height).round().max(0.0) as usize;
            BlockLines {
                lines: vec![String::new(); count],
                is_spacing: true,
            }
        }
        Block::KeyValueGrid { rows } => content(layout_grid(rows, width)),
        Block::Table(table) => content(layout_table(table, width, char_advance)),
        Block::PageBreak => BlockLines::default(),
    }
}

fn content(lines: Vec<String>) -> BlockLines {
    BlockLines {
        lines,
        is_spacing: false,
    }
}

fn layout_paragraph(paragraph: &Paragraph, width: usize) -> Vec<String> {
    let indent = usize::from(paragraph.indent) * INDENT_WIDTH;
    let text = match &paragraph.label {
        Some(label) => format!("{label} {}", paragraph.text),
        None => paragraph.text.clone(),
    };
    let available = width.saturating_sub(indent).max(1);

    wrap(&text, available)
        .into_iter()
        .map(|line| match paragraph.style {
            TextStyle::Centered => center(&line, width),
            TextStyle::Body | TextStyle::Small => format!("{}{line}", " ".repeat(indent)),
        })
        .collect()
}

fn layout_grid(rows: &[Vec<KeyValue>], width: usize) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return Vec::new();
    }
    let gaps = COLUMN_GAP * (columns - 1);
    let cell_width = (width.saturating_sub(gaps) / columns).max(1);
    let widths = vec![cell_width; columns];

    rows.iter()
        .flat_map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|pair| {
                    if pair.key.is_empty() {
                        pair.value.clone()
                    } else {
                        format!("{} {}", pair.key, pair.value)
                    }
                })
                .collect();
            layout_row(&cells, &widths)
        })
        .collect()
}

fn layout_table(table: &Table, width: usize, char_advance: f32) -> Vec<String> {
    let widths = fit_columns(&table.column_widths, table.header.len(), width, char_advance);
    if widths.is_empty() {
        return Vec::new();
    }

    let mut lines = layout_row(&table.header, &widths);
    let ruled: usize = widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1);
    lines.push("=".repeat(ruled));
    for row in &table.rows {
        lines.extend(layout_row(&row.cells, &widths));
    }
    lines
}

/// Column widths in characters, scaled down proportionally when the
/// requested widths do not fit.
pub(crate) fn fit_columns(
    requested: &[f32],
    columns: usize,
    width: usize,
    char_advance: f32,
) -> Vec<usize> {
    if columns == 0 {
        return Vec::new();
    }
    let gaps = COLUMN_GAP * (columns - 1);
    let available = width.saturating_sub(gaps).max(columns);

    let mut chars: Vec<f32> = (0..columns)
        .map(|idx| {
            requested
                .get(idx)
                .map(|points| points / char_advance)
                .unwrap_or(available as f32 / columns as f32)
        })
        .collect();

    let total: f32 = chars.iter().sum();
    if total > available as f32 {
        let scale = available as f32 / total;
        chars.iter_mut().for_each(|c| *c *= scale);
    }

    chars
        .into_iter()
        .map(|c| (c.floor() as usize).max(1))
        .collect()
}

/// One table or grid row; cells wrap inside their column.
fn layout_row(cells: &[String], widths: &[usize]) -> Vec<String> {
    let wrapped: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(idx, width)| wrap(cells.get(idx).map(String::as_str).unwrap_or(""), *width))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|line_idx| {
            let parts: Vec<String> = wrapped
                .iter()
                .zip(widths)
                .map(|(lines, width)| {
                    let text = lines.get(line_idx).map(String::as_str).unwrap_or("");
                    pad(text, *width)
                })
                .collect();
            parts.join(" ".repeat(COLUMN_GAP).as_str()).trim_end().to_string()
        })
        .collect()
}

/// Greedy word wrap; words longer than `width` are split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in source_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }
        lines.push(current);
    }

    lines
}

pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{text}", " ".repeat((width - len) / 2))
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
