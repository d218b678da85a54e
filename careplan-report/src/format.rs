//! Display formatting for raw record values.

use careplan_core::CodedValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const NOT_AVAILABLE: &str = "N/A";

const DATE_FORMAT: &str = "%B %d, %Y";
const DATE_TIME_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// `"2024-03-15T00:00:00Z"` -> `"March 15, 2024"`.
///
/// Empty input renders as `N/A`; input that does not parse is returned as-is.
pub fn format_date(raw: &str) -> String {
    format_with(raw, DATE_FORMAT)
}

/// `"2024-03-15T14:30:00Z"` -> `"March 15, 2024 at 02:30 PM"`, same fallbacks
/// as [`format_date`].
pub fn format_datetime(raw: &str) -> String {
    format_with(raw, DATE_TIME_FORMAT)
}

fn format_with(raw: &str, pattern: &str) -> String {
    if raw.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

/// Parse an ISO-8601 date or date-time into its wall-clock value.
///
/// A trailing `Z` is read as `+00:00` and a short `±HH` offset as `±HH:00`.
/// Offsets are kept, not converted.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = normalize_iso(raw.trim());

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(parsed.naive_local());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"] {
        if let Ok(parsed) = DateTime::parse_from_str(&normalized, pattern) {
            return Some(parsed.naive_local());
        }
    }

    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&normalized, pattern) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Rewrite the shorthand ISO forms into ones the patterns above accept:
/// `Z` suffix, `±HH` offset, hour-only time and basic `YYYYMMDD` date.
fn normalize_iso(raw: &str) -> String {
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..]);
    }

    let mut text = match raw.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => raw.to_string(),
    };

    // Only a value with a time part can carry an offset; "2024-03-15" ends in "-15".
    let has_time = matches!(text.as_bytes().get(10), Some(b'T' | b' '));
    if has_time && text.len() > 13 {
        let bytes = text.as_bytes();
        let sign = bytes[text.len() - 3];
        let short_offset = (sign == b'+' || sign == b'-')
            && bytes[text.len() - 4].is_ascii_digit()
            && bytes[text.len() - 2..].iter().all(u8::is_ascii_digit);
        if short_offset {
            text.push_str(":00");
        }
    }

    if has_time && text.len() == 13 && text.as_bytes()[11..].iter().all(u8::is_ascii_digit) {
        text.push_str(":00");
    }

    text
}

/// Display label from the fixed table, or the humanized raw code.
pub fn label_for<T: CodedValue>(value: &T) -> String {
    match value.known_label() {
        Some(label) => label.to_string(),
        None => humanize_code(value.code()),
    }
}

/// `"event_based"` -> `"Event Based"`.
pub fn humanize_code(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut after_letter = false;
    for ch in code.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    out
}

pub fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use careplan_core::{GuidelineCategory, OverlayCategory, PlanType};

    use super::*;

    #[test]
    fn formats_dates() {
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("2024-03-15T00:00:00Z"), "March 15, 2024");
        assert_eq!(format_date("2023-11-02"), "November 02, 2023");
        assert_eq!(format_date("20231102"), "November 02, 2023");
        assert_eq!(format_date("2024-03-15 00:00:00+00"), "March 15, 2024");
        assert_eq!(format_date("2024-03-15T23:30:00.123456+00:00"), "March 15, 2024");
    }

    #[test]
    fn unparsable_date_passes_through() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_datetime("03/15/2024"), "03/15/2024");
    }

    #[test]
    fn formats_date_times_in_twelve_hour_clock() {
        assert_eq!(
            format_datetime("2024-03-15T14:30:00Z"),
            "March 15, 2024 at 02:30 PM"
        );
        assert_eq!(format_datetime("2024-03-15T09:05:00"), "March 15, 2024 at 09:05 AM");
        assert_eq!(
            format_datetime("2024-03-15T14:30:00+00"),
            "March 15, 2024 at 02:30 PM"
        );
        assert_eq!(
            format_datetime("2024-03-15 14:30:00+00"),
            "March 15, 2024 at 02:30 PM"
        );
        assert_eq!(
            format_datetime("2024-03-15 14:30:00.5-05"),
            "March 15, 2024 at 02:30 PM"
        );
        assert_eq!(format_datetime("2024-03-15T14"), "March 15, 2024 at 02:00 PM");
        assert_eq!(format_datetime("20240315"), "March 15, 2024 at 12:00 AM");
        assert_eq!(format_datetime(""), "N/A");
    }

    #[test]
    fn keeps_offset_wall_clock() {
        assert_eq!(
            format_datetime("2024-03-15T14:30:00-05:00"),
            "March 15, 2024 at 02:30 PM"
        );
    }

    #[test]
    fn labels_fall_back_to_humanized_code() {
        assert_eq!(label_for(&PlanType::AttorneyRequest), "Attorney-Requested Review");
        assert_eq!(label_for(&PlanType::Other("quarterly_check".into())), "Quarterly Check");
        assert_eq!(label_for(&OverlayCategory::Child3To12), "Child Lens");
        assert_eq!(
            label_for(&OverlayCategory::Other("chronic_pain".into())),
            "Chronic Pain"
        );
        assert_eq!(label_for(&GuidelineCategory::Odg), "ODG");
        assert_eq!(label_for(&GuidelineCategory::Other("state_fee".into())), "State Fee");
    }

    #[test]
    fn humanize_matches_title_case_rules() {
        assert_eq!(humanize_code("geriatric_60_plus"), "Geriatric 60 Plus");
        assert_eq!(humanize_code("HIGH_risk"), "High Risk");
        assert_eq!(humanize_code(""), "");
    }

    #[test]
    fn dash_for_blank_optional_values() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("400 mg")), "400 mg");
    }
}
