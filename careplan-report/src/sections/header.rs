use careplan_core::{Block, CarePlan, Case, KeyValue, Paragraph, ReportConfig, TextStyle};

use crate::format::{format_date, label_for, or_not_available};

const UNKNOWN_CLIENT: &str = "Unknown Client";

/// Organization line, title, plan type and the client/case grid.
pub fn header_section(
    config: &ReportConfig,
    care_plan: &CarePlan,
    case: Option<&Case>,
) -> Vec<Block> {
    let client_name = case
        .and_then(|case| case.client.as_ref())
        .and_then(|client| client.display_name())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

    let case_number = or_not_available(case.and_then(|case| case.case_number.as_deref()));
    let date_of_injury =
        format_date(case.and_then(|case| case.date_of_injury.as_deref()).unwrap_or_default());
    let injury_type = or_not_available(case.and_then(|case| case.injury_type.as_deref()));
    let plan_date = format_date(care_plan.created_at.as_deref().unwrap_or_default());

    vec![
        Paragraph::body(config.organization.as_str())
            .with_style(TextStyle::Centered)
            .emphasized()
            .into(),
        Block::spacer(5.0),
        Block::title(format!("Care Plan #{}", care_plan.plan_number)),
        Paragraph::body(label_for(&care_plan.plan_type))
            .with_style(TextStyle::Centered)
            .into(),
        Block::spacer(20.0),
        Block::KeyValueGrid {
            rows: vec![
                vec![
                    KeyValue::new("Client Name:", client_name),
                    KeyValue::new("Case Number:", case_number),
                ],
                vec![
                    KeyValue::new("Date of Injury:", date_of_injury),
                    KeyValue::new("Injury Type:", injury_type),
                ],
                vec![
                    KeyValue::new("Care Plan Date:", plan_date),
                    KeyValue::new("", ""),
                ],
            ],
        },
        Block::spacer(20.0),
    ]
}
