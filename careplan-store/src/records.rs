//! Conversion of loosely-typed store records into typed entities.

use careplan_core::{
    Attestation, CarePlan, CareV, Case, ChecklistItem, ChecklistStatus, Client, CodedValue,
    Deviation, GuidelineCategory, GuidelineReference, MedicationItem, OverlayCategory,
    OverlaySelection, PlanType, ReportError, SdohAssessment, WellnessAssessment,
};
use serde_json::Value;
use tracing::warn;

/// The care plan record is the only one whose shape is enforced.
pub fn parse_care_plan(record: &Value) -> Result<CarePlan, ReportError> {
    let id = text_field(record, "id")
        .ok_or_else(|| ReportError::Parse("care plan record has no id".to_string()))?;

    let plan_type = text_field(record, "care_plan_type")
        .map(|code| PlanType::from_code(&code))
        .unwrap_or_default();

    let plan_number = int_field(record, "plan_number")
        .and_then(|number| u32::try_from(number).ok())
        .unwrap_or(1);

    Ok(CarePlan {
        id,
        case_id: text_field(record, "case_id"),
        plan_type,
        plan_number,
        created_at: text_field(record, "created_at"),
    })
}

pub fn parse_case(record: &Value) -> Case {
    // The embedded client arrives as an object, or as a one-row array for
    // to-many relations.
    let client = record.get("rc_clients").and_then(|embedded| match embedded {
        Value::Array(rows) => rows.first(),
        Value::Object(_) => Some(embedded),
        _ => None,
    });

    Case {
        case_number: text_field(record, "case_number"),
        date_of_injury: text_field(record, "date_of_injury"),
        injury_type: text_field(record, "injury_type"),
        client: client.map(|client| Client {
            first_name: text_field(client, "first_name"),
            last_name: text_field(client, "last_name"),
        }),
    }
}

pub fn parse_wellness(record: &Value) -> WellnessAssessment {
    WellnessAssessment {
        physical: int_field(record, "p1_physical"),
        psychological: int_field(record, "p2_psychological"),
        psychosocial: int_field(record, "p3_psychosocial"),
        professional: int_field(record, "p4_professional"),
        physical_notes: text_field(record, "p1_notes"),
        psychological_notes: text_field(record, "p2_notes"),
        psychosocial_notes: text_field(record, "p3_notes"),
        professional_notes: text_field(record, "p4_notes"),
    }
}

pub fn parse_sdoh(record: &Value) -> SdohAssessment {
    SdohAssessment {
        economic: int_field(record, "economic_score"),
        education: int_field(record, "education_score"),
        healthcare: int_field(record, "healthcare_score"),
        neighborhood: int_field(record, "neighborhood_score"),
        social: int_field(record, "social_score"),
        housing_insecurity: bool_field(record, "housing_insecurity"),
        food_insecurity: bool_field(record, "food_insecurity"),
        transportation_barrier: bool_field(record, "transportation_barrier"),
        financial_hardship: bool_field(record, "financial_hardship"),
        social_isolation: bool_field(record, "social_isolation"),
    }
}

/// A row without `overlay_type` is kept with an empty code, so it still prints.
pub fn parse_overlay(record: &Value) -> OverlaySelection {
    let code = text_field(record, "overlay_type").unwrap_or_default();

    OverlaySelection {
        category: OverlayCategory::from_code(&code),
        subtype: text_field(record, "overlay_subtype"),
        notes: text_field(record, "application_notes"),
    }
}

pub fn parse_guideline(record: &Value) -> GuidelineReference {
    let category = GuidelineCategory::from_code(
        text_field(record, "guideline_type")
            .as_deref()
            .unwrap_or_default(),
    );

    let deviation = text_field(record, "deviation_reason").map(|reason| Deviation {
        reason,
        justification: text_field(record, "deviation_justification"),
    });

    GuidelineReference {
        category,
        name: text_field(record, "guideline_name").unwrap_or_default(),
        recommendation: text_field(record, "recommendation"),
        deviation,
    }
}

/// Returns `None` for rows whose `v_number` is outside 1..=10.
pub fn parse_checklist_item(record: &Value) -> Option<ChecklistItem> {
    let number = int_field(record, "v_number");
    let Some(key) = number.and_then(CareV::from_number) else {
        warn!(?number, "skipping checklist item with unknown v_number");
        return None;
    };

    let status = text_field(record, "status")
        .map(|raw| ChecklistStatus::parse(&raw))
        .unwrap_or_default();

    Some(ChecklistItem {
        key,
        status,
        findings: text_field(record, "findings"),
        recommendations: text_field(record, "recommendations"),
    })
}

pub fn parse_medication(record: &Value) -> MedicationItem {
    MedicationItem {
        name: text_field(record, "medication_name").unwrap_or_default(),
        dosage: text_field(record, "dosage"),
        frequency: text_field(record, "frequency"),
        prescriber: text_field(record, "prescriber"),
    }
}

pub fn parse_attestation(record: &Value) -> Attestation {
    let skipped_sections = record
        .get("skipped_sections")
        .and_then(Value::as_array)
        .map(|sections| {
            sections
                .iter()
                .filter_map(Value::as_str)
                .filter(|name| !name.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Attestation {
        attested_at: text_field(record, "attested_at"),
        skipped_sections,
        skipped_justification: text_field(record, "skipped_justification"),
    }
}

/// Strings (non-empty) and numbers; everything else counts as absent.
pub(crate) fn text_field(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn int_field(record: &Value, key: &str) -> Option<i64> {
    match record.get(key)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn bool_field(record: &Value, key: &str) -> bool {
    match record.get(key) {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => text.eq_ignore_ascii_case("true"),
        _ => false,
    }
}
