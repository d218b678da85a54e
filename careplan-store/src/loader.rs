//! Loads every record a care plan report needs into one immutable snapshot.

use careplan_core::{ReportError, ReportSnapshot};
use serde_json::Value;
use tracing::debug;

use crate::records::{self, text_field};
use crate::{RecordStore, ResourceQuery};

/// Fetch the care plan and all of its related records.
///
/// Only the care plan itself is required: if it resolves to zero records the
/// load fails with `ReportError::NotFound`. Every other fetch is independent
/// and leaves its entity empty when nothing comes back.
pub fn load_snapshot<S: RecordStore + ?Sized>(
    store: &S,
    care_plan_id: &str,
) -> Result<ReportSnapshot, ReportError> {
    let plan_record = fetch_first(store, &care_plan_query(care_plan_id))
        .ok_or_else(|| ReportError::NotFound(care_plan_id.to_string()))?;
    let care_plan = records::parse_care_plan(&plan_record)?;

    let case = care_plan
        .case_id
        .as_deref()
        .and_then(|case_id| fetch_first(store, &case_query(case_id)))
        .map(|record| records::parse_case(&record));

    let wellness = fetch_first(store, &latest_for_plan("rc_fourps_assessments", care_plan_id))
        .map(|record| records::parse_wellness(&record));

    let sdoh = fetch_first(store, &latest_for_plan("rc_sdoh_assessments", care_plan_id))
        .map(|record| records::parse_sdoh(&record));

    let overlays = fetch_all(store, &for_plan("rc_overlay_selections", care_plan_id))
        .iter()
        .map(records::parse_overlay)
        .collect();

    let guidelines = fetch_all(store, &for_plan("rc_guideline_references", care_plan_id))
        .iter()
        .map(records::parse_guideline)
        .collect();

    let mut checklist: Vec<_> = fetch_all(
        store,
        &for_plan("rc_care_plan_vs", care_plan_id).order_asc("v_number"),
    )
    .iter()
    .filter_map(records::parse_checklist_item)
    .collect();
    // The store orders by v_number already; keep the invariant even if it doesn't.
    checklist.sort_by_key(|item| item.key);

    let attestation = fetch_first(
        store,
        &latest_for_plan("rc_care_plan_attestations", care_plan_id),
    )
    .map(|record| records::parse_attestation(&record));

    let medications = load_medications(store, care_plan_id);

    let snapshot = ReportSnapshot {
        care_plan,
        case,
        wellness,
        sdoh,
        overlays,
        guidelines,
        checklist,
        medications,
        attestation,
    };

    debug!(
        care_plan_id,
        has_case = snapshot.case.is_some(),
        overlays = snapshot.overlays.len(),
        guidelines = snapshot.guidelines.len(),
        checklist = snapshot.checklist.len(),
        medications = snapshot.medications.len(),
        "care plan snapshot loaded"
    );

    Ok(snapshot)
}

/// Still-taking items of the latest submitted reconciliation.
fn load_medications<S: RecordStore + ?Sized>(
    store: &S,
    care_plan_id: &str,
) -> Vec<careplan_core::MedicationItem> {
    let reconciliation = fetch_first(
        store,
        &latest_for_plan("rc_medication_reconciliations", care_plan_id).eq("status", "submitted"),
    );
    let Some(reconciliation_id) = reconciliation
        .as_ref()
        .and_then(|record| text_field(record, "id"))
    else {
        return Vec::new();
    };

    let items = ResourceQuery::new("rc_medication_items")
        .eq("med_rec_id", reconciliation_id)
        .eq("still_taking", true);

    fetch_all(store, &items)
        .iter()
        .map(records::parse_medication)
        .collect()
}

fn care_plan_query(care_plan_id: &str) -> ResourceQuery {
    ResourceQuery::new("rc_care_plans").eq("id", care_plan_id)
}

fn case_query(case_id: &str) -> ResourceQuery {
    ResourceQuery::new("rc_cases")
        .eq("id", case_id)
        .eq("is_superseded", false)
        .select("*,rc_clients(*)")
}

fn for_plan(resource: &str, care_plan_id: &str) -> ResourceQuery {
    ResourceQuery::new(resource).eq("care_plan_id", care_plan_id)
}

fn latest_for_plan(resource: &str, care_plan_id: &str) -> ResourceQuery {
    for_plan(resource, care_plan_id)
        .order_desc("created_at")
        .limit(1)
}

fn fetch_all<S: RecordStore + ?Sized>(store: &S, query: &ResourceQuery) -> Vec<Value> {
    store.fetch(query).unwrap_or_default()
}

fn fetch_first<S: RecordStore + ?Sized>(store: &S, query: &ResourceQuery) -> Option<Value> {
    store.fetch(query)?.into_iter().next()
}
