use crate::domain::model::{RawRecord, StoreRecord};
use crate::utils::error::{json_type_name, EtlError, Result};
use serde_json::Value;

const PHONE_PREFIX: &str = "tel:";

/// Maps one scraped record onto the fixed store schema.
///
/// Keys outside the mapping table are dropped; table keys that are missing
/// or `null` yield `None`. Fails only when `flex4` or `Number` holds a
/// non-empty value that is not a string.
pub fn normalize_record(raw: &RawRecord) -> Result<StoreRecord> {
    Ok(StoreRecord {
        name: field(raw, "Title"),
        url: field(raw, "Title_URL"),
        image_url: field(raw, "Image"),
        rating: field(raw, "mr1"),
        review_count: review_count(raw)?,
        store_type: field(raw, "lineclamp1"),
        status: field(raw, "flex1"),
        description: field(raw, "textgray800"),
        phone_number: phone_number(raw)?,
        address: field(raw, "fontnormal"),
        website: field(raw, "Field2"),
        main_image_url_field5: field(raw, "Field5"),
    })
}

pub fn normalize_all(records: &[RawRecord]) -> Result<Vec<StoreRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            normalize_record(raw).inspect_err(|e| {
                tracing::debug!("Record {} rejected: {}", index, e);
            })
        })
        .collect()
}

fn field(raw: &RawRecord, key: &str) -> Option<Value> {
    raw.get(key).filter(|v| !v.is_null()).cloned()
}

/// Truthy value for `key`, or `None` when it is missing, null or empty.
fn truthy<'a>(raw: &'a RawRecord, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|v| is_truthy(v))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn expect_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| EtlError::StrictType {
        field,
        found: json_type_name(value),
    })
}

fn review_count(raw: &RawRecord) -> Result<Option<Value>> {
    let Some(value) = truthy(raw, "flex4") else {
        return Ok(None);
    };
    let cleaned: String = expect_str(value, "flex4")?
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .collect();
    Ok(Some(Value::String(cleaned)))
}

fn phone_number(raw: &RawRecord) -> Result<Option<Value>> {
    match truthy(raw, "Number") {
        Some(value) => {
            let number = expect_str(value, "Number")?;
            let stripped = number.strip_prefix(PHONE_PREFIX).unwrap_or(number);
            Ok(Some(Value::String(stripped.to_string())))
        }
        // Fallback is taken verbatim
        None => Ok(field(raw, "Number3")),
    }
}
