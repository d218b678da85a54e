use std::fs;

use careplan_core::{
    Block, KeyValue, PageContext, PageFooter, PageGeometry, Paragraph, RenderEngine,
    ReportError, ScoreLevel, Table, TableRow,
};
use careplan_render::{JsonBlockRenderer, TextPageRenderer};
use serde_json::Value;

fn footer(context: &PageContext) -> PageFooter {
    PageFooter {
        left: "Reconcile C.A.R.E. – Confidential Health Information".into(),
        center: "Generated: March 15, 2024 at 02:30 PM".into(),
        right: format!("Page {}", context.page_number),
        generated_at: "2024-03-15T14:30:00-05:00".into(),
    }
}

fn sample_blocks() -> Vec<Block> {
    vec![
        Block::title("Care Plan #2"),
        Block::KeyValueGrid {
            rows: vec![vec![
                KeyValue::new("Client Name:", "Maria Lopez"),
                KeyValue::new("Case Number:", "RC-2024-0042"),
            ]],
        },
        Block::section_heading("4Ps Wellness Assessment"),
        Block::Rule,
        Table {
            header: vec!["Domain".into(), "Score".into(), "Status".into()],
            rows: vec![TableRow {
                cells: vec!["P1 - Physical Wellness".into(), "2".into(), "At Risk".into()],
                tone: Some(ScoreLevel::AtRisk),
            }],
            column_widths: vec![216.0, 72.0, 108.0],
        }
        .into(),
        Block::PageBreak,
        Block::section_heading("Current Medications"),
        Paragraph::body("No medications on file.").into(),
    ]
}

#[test]
fn text_report_has_one_form_feed_per_page_boundary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("care_plan_cp-1.txt");

    TextPageRenderer::default()
        .render(&sample_blocks(), &footer, &output)
        .expect("render");

    let text = fs::read_to_string(&output).expect("read output");
    let pages: Vec<&str> = text.split('\u{000C}').collect();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("CARE PLAN #2"));
    assert!(pages[0].contains("Client Name: Maria Lopez"));
    assert!(pages[0].contains("P1 - Physical Wellness"));
    assert!(pages[1].contains("CURRENT MEDICATIONS"));
    assert!(pages[0].contains("Page 1"));
    assert!(pages[1].contains("Page 2"));
    for page in pages {
        assert!(page.contains("Generated: March 15, 2024 at 02:30 PM"));
    }
}

#[test]
fn failed_render_leaves_no_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("report.txt");
    let cramped = TextPageRenderer::new(PageGeometry {
        width: 100.0,
        ..PageGeometry::default()
    });

    let result = cramped.render(&sample_blocks(), &footer, &output);

    assert!(matches!(result, Err(ReportError::Render(_))));
    assert!(!output.exists());
    assert_eq!(fs::read_dir(dir.path()).expect("list dir").count(), 0);
}

#[test]
fn json_export_carries_blocks_and_first_page_footer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("care_plan_cp-1.json");

    JsonBlockRenderer
        .render(&sample_blocks(), &footer, &output)
        .expect("render");

    let value: Value =
        serde_json::from_str(&fs::read_to_string(&output).expect("read")).expect("json");
    assert_eq!(value["generated_at"], "2024-03-15T14:30:00-05:00");
    assert_eq!(value["generated_at"], value["footer"]["generated_at"]);
    assert_eq!(value["footer"]["right"], "Page 1");
    let blocks = value["blocks"].as_array().expect("blocks array");
    assert_eq!(blocks.len(), 8);
    assert_eq!(blocks[0]["kind"], "title");
    assert_eq!(blocks[4]["kind"], "table");
    assert_eq!(blocks[4]["rows"][0]["tone"], "at_risk");
    assert_eq!(blocks[5]["kind"], "page_break");
}
