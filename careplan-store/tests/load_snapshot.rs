use std::cell::RefCell;
use std::fs;

use careplan_core::{CareV, ChecklistStatus, PlanType, ReportError};
use careplan_store::{load_snapshot, InMemoryRecordStore, RecordStore, ResourceQuery};
use serde_json::{json, Value};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn fixture_store() -> InMemoryRecordStore {
    let dump = fs::read_to_string(fixture_path("full_plan_records.json"))
        .expect("Không đọc được bộ bản ghi mẫu");
    InMemoryRecordStore::from_json_str(&dump).expect("Bộ bản ghi mẫu không hợp lệ")
}

#[test]
fn full_record_set_loads_every_entity() {
    let snapshot = load_snapshot(&fixture_store(), "cp-100").expect("snapshot");

    assert_eq!(snapshot.care_plan.plan_type, PlanType::Routine60Day);
    assert_eq!(snapshot.care_plan.plan_number, 3);

    let case = snapshot.case.expect("case");
    assert_eq!(case.case_number.as_deref(), Some("RC-2024-0042"));
    let client = case.client.expect("client");
    assert_eq!(client.display_name().as_deref(), Some("Maria Lopez"));

    let wellness = snapshot.wellness.expect("wellness");
    assert_eq!(wellness.physical, Some(2), "latest assessment wins");
    assert_eq!(wellness.psychosocial, None);

    let sdoh = snapshot.sdoh.expect("sdoh");
    assert!(sdoh.food_insecurity && sdoh.transportation_barrier);

    assert_eq!(snapshot.overlays.len(), 2);
    assert_eq!(snapshot.guidelines.len(), 2);
    assert!(snapshot.guidelines[0].deviation.is_some());
    assert!(snapshot.guidelines[1].deviation.is_none());

    let keys: Vec<CareV> = snapshot.checklist.iter().map(|item| item.key).collect();
    assert_eq!(keys, vec![CareV::Validate, CareV::Vitals, CareV::Verify]);
    assert_eq!(
        snapshot.checklist[1].status,
        ChecklistStatus::Other("in_progress".to_string())
    );

    let names: Vec<&str> = snapshot
        .medications
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ibuprofen", "Cyclobenzaprine"]);
    assert_eq!(snapshot.medications[1].dosage, None);

    let attestation = snapshot.attestation.expect("attestation");
    assert_eq!(attestation.skipped_sections, vec!["Overlays", "Medications"]);
}

#[test]
fn missing_care_plan_is_not_found() {
    let result = load_snapshot(&fixture_store(), "cp-missing");
    assert!(matches!(result, Err(ReportError::NotFound(id)) if id == "cp-missing"));
}

#[test]
fn care_plan_alone_yields_sparse_snapshot() {
    let store = InMemoryRecordStore::new()
        .with_table("rc_care_plans", vec![json!({"id": "cp-1", "case_id": "c-1"})]);

    let snapshot = load_snapshot(&store, "cp-1").expect("snapshot");
    assert!(snapshot.case.is_none());
    assert!(snapshot.wellness.is_none());
    assert!(snapshot.sdoh.is_none());
    assert!(snapshot.overlays.is_empty());
    assert!(snapshot.guidelines.is_empty());
    assert!(snapshot.checklist.is_empty());
    assert!(snapshot.medications.is_empty());
    assert!(snapshot.attestation.is_none());
}

#[test]
fn untyped_overlay_rows_are_kept() {
    let store = InMemoryRecordStore::new()
        .with_table("rc_care_plans", vec![json!({"id": "cp-1"})])
        .with_table(
            "rc_overlay_selections",
            vec![json!({"care_plan_id": "cp-1", "overlay_type": null})],
        );

    let snapshot = load_snapshot(&store, "cp-1").expect("snapshot");
    assert_eq!(snapshot.overlays.len(), 1);
}

/// Records every path it is asked for and answers only the care plan.
struct RecordingStore {
    paths: RefCell<Vec<String>>,
}

impl RecordStore for RecordingStore {
    fn fetch(&self, query: &ResourceQuery) -> Option<Vec<Value>> {
        self.paths.borrow_mut().push(query.to_path());
        if query.resource() == "rc_care_plans" {
            Some(vec![json!({"id": "cp-1"})])
        } else {
            None
        }
    }
}

#[test]
fn skips_case_lookup_without_case_id_and_medication_items_without_reconciliation() {
    let store = RecordingStore {
        paths: RefCell::new(Vec::new()),
    };
    load_snapshot(&store, "cp-1").expect("snapshot");

    let paths = store.paths.into_inner();
    assert!(paths.iter().all(|path| !path.starts_with("rc_cases")));
    assert!(paths.iter().all(|path| !path.starts_with("rc_medication_items")));
    assert_eq!(paths.len(), 8);
}
