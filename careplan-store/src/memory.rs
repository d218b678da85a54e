//! In-memory record store evaluating the same query language over JSON tables.

use std::cmp::Ordering;
use std::collections::HashMap;

use careplan_core::ReportError;
use serde_json::Value;

use crate::{RecordStore, ResourceQuery};

/// Tables of JSON records keyed by resource name.
///
/// Embedded selections (`select=*,rc_clients(*)`) are not resolved: records
/// are expected to carry their embedded rows already, as the REST store
/// returns them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    tables: HashMap<String, Vec<Value>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, resource: impl Into<String>, records: Vec<Value>) -> Self {
        self.tables.insert(resource.into(), records);
        self
    }

    /// Build from a JSON object of `{ "resource": [records...] }`.
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        let value: Value =
            serde_json::from_str(json).map_err(|err| ReportError::Parse(err.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ReportError> {
        let Value::Object(map) = value else {
            return Err(ReportError::Parse(
                "record dump must be an object of resource tables".to_string(),
            ));
        };

        let mut store = Self::new();
        for (resource, records) in map {
            let Value::Array(records) = records else {
                return Err(ReportError::Parse(format!(
                    "table {resource} must be an array of records"
                )));
            };
            store.tables.insert(resource, records);
        }
        Ok(store)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn fetch(&self, query: &ResourceQuery) -> Option<Vec<Value>> {
        let table = self.tables.get(query.resource())?;

        let mut rows: Vec<Value> = table
            .iter()
            .filter(|record| {
                query
                    .filters()
                    .iter()
                    .all(|(field, expected)| field_equals(record, field, expected))
            })
            .cloned()
            .collect();

        if let Some(order) = query.ordering() {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.field), b.get(&order.field));
                if order.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        if let Some(limit) = query.max_rows() {
            rows.truncate(limit);
        }

        Some(rows)
    }
}

fn field_equals(record: &Value, field: &str, expected: &str) -> bool {
    match record.get(field) {
        Some(Value::String(text)) => text == expected,
        Some(Value::Bool(flag)) => flag.to_string() == expected,
        Some(Value::Number(number)) => number.to_string() == expected,
        Some(Value::Null) | None => expected == "null",
        Some(_) => false,
    }
}

// Nulls sort after every value ascending, before every value descending.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => match (a.as_str(), b.as_str()) {
                (Some(x), Some(y)) => x.cmp(y),
                _ => a.to_string().cmp(&b.to_string()),
            },
        },
    }
}
