//! List response summarization.
//!
//! List endpoints can return large records (resume text, nested
//! applications, ...). For context-constrained callers the summarizer keeps a
//! small set of fields per item and adds pagination hints, while full detail
//! stays reachable through the matching `get_*` tool.
//!
//! Summarization never fails: irregular shapes degrade to an empty item list
//! or pass items through unchanged.

use serde_json::{json, Map, Value};

/// Fallbacks used for the pagination comparison when the response omits them.
const DEFAULT_PAGE: u64 = 1;
const DEFAULT_PER_PAGE: u64 = 25;

/// Default summary fields for an entity type.
///
/// Unknown entity types have no defaults, which disables trimming.
pub fn summary_fields(entity_type: &str) -> &'static [&'static str] {
    match entity_type {
        "candidates" => &["id", "first_name", "last_name", "email", "status", "created_date"],
        "jobs" => &["id", "title", "status", "department", "location", "created_date"],
        "companies" => &["id", "name", "website", "city", "state", "phone"],
        "contacts" => &["id", "first_name", "last_name", "email", "title", "company_id"],
        "activities" => &["id", "type", "subject", "date", "created_by"],
        _ => &[],
    }
}

/// Summarize a raw list response.
///
/// `fields` is a comma-separated field list overriding the defaults for
/// `entity_type`. A missing response yields
/// `{"error": "No response from API", "items": [], "total": 0}`.
pub fn summarize_list_response(raw: Option<&Value>, entity_type: &str, fields: Option<&str>) -> Value {
    let Some(raw) = raw.filter(|raw| !raw.is_null()) else {
        return json!({
            "error": "No response from API",
            "items": [],
            "total": 0
        });
    };

    let selected: Vec<&str> = match fields.filter(|f| !f.is_empty()) {
        Some(fields) => fields.split(',').map(str::trim).collect(),
        None => summary_fields(entity_type).to_vec(),
    };

    let items = extract_items(raw, entity_type);
    let items: Vec<Value> = if selected.is_empty() {
        items.to_vec()
    } else {
        items.iter().map(|item| trim_item(item, &selected)).collect()
    };

    let count = items.len();
    let total = raw
        .get("total")
        .or_else(|| raw.get("total_count"))
        .cloned()
        .unwrap_or_else(|| json!(count));
    let page = raw.get("page").cloned().unwrap_or(Value::Null);
    let per_page = raw.get("per_page").cloned().unwrap_or(Value::Null);

    let mut result = Map::new();
    result.insert(entity_type.to_string(), Value::Array(items));
    result.insert("count".to_string(), json!(count));
    result.insert("total".to_string(), total.clone());
    result.insert("page".to_string(), page.clone());
    result.insert("per_page".to_string(), per_page.clone());

    let page = positive(&page).unwrap_or(DEFAULT_PAGE);
    let per_page = positive(&per_page).unwrap_or(DEFAULT_PER_PAGE);

    match total.as_f64() {
        Some(total_value) if total_value > page.saturating_mul(per_page) as f64 => {
            let next_page = page.saturating_add(1);
            result.insert("has_more".to_string(), json!(true));
            result.insert("next_page".to_string(), json!(next_page));
            result.insert(
                "hint".to_string(),
                json!(format!(
                    "Showing {} of {} {}. Use page={} to fetch more. Use get_{}(id) for full details.",
                    count,
                    total,
                    entity_type,
                    next_page,
                    singular(entity_type)
                )),
            );
        }
        _ => {
            result.insert("has_more".to_string(), json!(false));
        }
    }

    Value::Object(result)
}

/// Locate the item array: `_embedded.<entity>`, then a bare array, then `<entity>`.
fn extract_items<'a>(raw: &'a Value, entity_type: &str) -> &'a [Value] {
    let found = raw
        .get("_embedded")
        .and_then(|embedded| embedded.get(entity_type))
        .or_else(|| raw.is_array().then_some(raw))
        .or_else(|| raw.get(entity_type));

    found
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Keep the selected fields present on an object item, plus `id`.
fn trim_item(item: &Value, selected: &[&str]) -> Value {
    let Some(object) = item.as_object() else {
        return item.clone();
    };

    let mut summary: Map<String, Value> = selected
        .iter()
        .filter_map(|field| object.get(*field).map(|v| (field.to_string(), v.clone())))
        .collect();

    if let Some(id) = object.get("id") {
        summary.entry("id").or_insert_with(|| id.clone());
    }

    Value::Object(summary)
}

/// Positive integer value, or `None` for absent, zero or non-numeric input.
fn positive(value: &Value) -> Option<u64> {
    value.as_u64().filter(|n| *n > 0)
}

/// Naive singular form: drops the last character ("companies" -> "companie").
fn singular(entity_type: &str) -> &str {
    match entity_type.char_indices().last() {
        Some((idx, _)) => &entity_type[..idx],
        None => entity_type,
    }
}
