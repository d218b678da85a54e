//! Record store access and conversion of loose JSON records into a `ReportSnapshot`.

mod loader;
mod memory;
mod query;
mod records;
mod rest;

use serde_json::Value;

pub use loader::load_snapshot;
pub use memory::InMemoryRecordStore;
pub use query::{Order, ResourceQuery};
pub use records::{
    parse_attestation, parse_care_plan, parse_case, parse_checklist_item, parse_guideline,
    parse_medication, parse_overlay, parse_sdoh, parse_wellness,
};
pub use rest::{RestRecordStore, StoreConfig, StoreError};

/// A source of loosely-typed records addressed by resource queries.
///
/// Implementations never surface transport failures: a failed or rejected
/// request is reported as `None`, exactly like a resource with no rows.
pub trait RecordStore {
    fn fetch(&self, query: &ResourceQuery) -> Option<Vec<Value>>;
}
