use std::cell::RefCell;
use std::fs;
use std::path::Path;

use careplan_core::{
    Block, FooterFn, HeadingLevel, PageContext, PageFooter, RenderEngine, ReportConfig,
    ReportError,
};
use careplan_report::generate;
use careplan_store::InMemoryRecordStore;

fn fixture_store() -> InMemoryRecordStore {
    let path = format!(
        "{}/tests/data/full_plan_records.json",
        env!("CARGO_MANIFEST_DIR")
    );
    let dump = fs::read_to_string(path).expect("read fixture");
    InMemoryRecordStore::from_json_str(&dump).expect("parse fixture")
}

/// Keeps the blocks and the footers of three pages instead of writing a file.
#[derive(Default)]
struct CapturingEngine {
    blocks: RefCell<Option<Vec<Block>>>,
    footers: RefCell<Vec<PageFooter>>,
}

impl RenderEngine for CapturingEngine {
    fn render(
        &self,
        blocks: &[Block],
        footer: &FooterFn<'_>,
        _output: &Path,
    ) -> Result<(), ReportError> {
        *self.blocks.borrow_mut() = Some(blocks.to_vec());
        for page_number in 1..=3 {
            self.footers
                .borrow_mut()
                .push(footer(&PageContext { page_number }));
        }
        Ok(())
    }
}

fn headings(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .filter_map(|block| match block {
            Block::Title { text } => Some(text.clone()),
            Block::Heading {
                text,
                level: HeadingLevel::Section,
            } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn full_record_set_has_two_page_breaks_and_all_headings_in_order() {
    let engine = CapturingEngine::default();
    generate(
        &fixture_store(),
        &engine,
        "cp-100",
        Path::new("unused.txt"),
        &ReportConfig::default(),
    )
    .expect("report generated");

    let blocks = engine.blocks.into_inner().expect("engine invoked");
    assert_eq!(blocks.iter().filter(|b| b.is_page_break()).count(), 2);
    assert_eq!(
        headings(&blocks),
        vec![
            "Care Plan #3",
            "4Ps Wellness Assessment",
            "Social Determinants of Health (SDOH)",
            "Applied Condition Overlays",
            "Clinical Guidelines Reference",
            "10-Vs of Care Management",
            "Current Medications",
            "Care Plan Attestation",
        ]
    );

    let grid = blocks
        .iter()
        .find_map(|block| match block {
            Block::KeyValueGrid { rows } => Some(rows),
            _ => None,
        })
        .expect("header grid");
    assert_eq!(grid[0][0].value, "Maria Lopez");
    assert_eq!(grid[0][1].value, "RC-2024-0042");
    assert_eq!(grid[1][0].value, "November 02, 2023");
}

#[test]
fn footer_timestamp_is_shared_by_every_page() {
    let engine = CapturingEngine::default();
    generate(
        &fixture_store(),
        &engine,
        "cp-100",
        Path::new("unused.txt"),
        &ReportConfig::default(),
    )
    .expect("report generated");

    let footers = engine.footers.into_inner();
    assert_eq!(footers.len(), 3);
    assert!(footers.iter().all(|f| f.center == footers[0].center));
    assert!(footers[0].center.starts_with("Generated: "));
    assert!(!footers[0].generated_at.is_empty());
    assert!(footers.iter().all(|f| f.generated_at == footers[0].generated_at));
    let pages: Vec<&str> = footers.iter().map(|f| f.right.as_str()).collect();
    assert_eq!(pages, vec!["Page 1", "Page 2", "Page 3"]);
}

#[test]
fn unresolvable_plan_never_reaches_the_engine() {
    let engine = CapturingEngine::default();
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("care_plan_cp-missing.txt");

    let result = generate(
        &fixture_store(),
        &engine,
        "cp-missing",
        &output,
        &ReportConfig::default(),
    );

    assert!(matches!(result, Err(ReportError::NotFound(id)) if id == "cp-missing"));
    assert!(engine.blocks.into_inner().is_none());
    assert!(!output.exists());
}
