use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One scraper-produced object, keyed by scraper-internal class names.
pub type RawRecord = Map<String, Value>;

/// A store record with the fixed output schema.
///
/// Field order is the serialized key order. Every field serializes, `None`
/// as `null`, so the key set is the same for every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub name: Option<Value>,
    pub url: Option<Value>,
    pub image_url: Option<Value>,
    pub rating: Option<Value>,
    pub review_count: Option<Value>,
    pub store_type: Option<Value>,
    pub status: Option<Value>,
    pub description: Option<Value>,
    pub phone_number: Option<Value>,
    pub address: Option<Value>,
    pub website: Option<Value>,
    pub main_image_url_field5: Option<Value>,
}

impl StoreRecord {
    pub const FIELDS: [&'static str; 12] = [
        "name",
        "url",
        "image_url",
        "rating",
        "review_count",
        "store_type",
        "status",
        "description",
        "phone_number",
        "address",
        "website",
        "main_image_url_field5",
    ];
}

/// Ordered raw records of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub records: Vec<RawRecord>,
    /// The input root was a single object promoted to a one-element batch.
    pub coerced_from_object: bool,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<StoreRecord>,
    pub coerced_from_object: bool,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub input_path: String,
    pub output_path: String,
    pub record_count: usize,
    pub coerced_from_object: bool,
    pub bytes_written: usize,
}
