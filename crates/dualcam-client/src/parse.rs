//! Parse API payloads into domain records
//!
//! The APIs are loose about shapes: fields go missing, numbers arrive as
//! strings, a one-review feed sends an object instead of a list. Parsing here
//! is lenient field by field, so one odd record never costs the whole page.

use dualcam_domain::{AppId, AppRecord, DiscussionPost, ReviewRecord};
use serde_json::Value;
use tracing::warn;

/// Parse a search or lookup body (`{"results": [...]}`)
///
/// A missing or non-list `results` is an empty result set.
pub fn parse_app_results(body: &Value) -> Vec<AppRecord> {
    let Some(results) = body.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| {
            let app = parse_app(item);
            if app.is_none() {
                warn!("Skipping search result {}: not a JSON object", idx);
            }
            app
        })
        .collect()
}

/// Parse a single app object
pub fn parse_app(item: &Value) -> Option<AppRecord> {
    let obj = item.as_object()?;

    let text = |key: &str| obj.get(key).and_then(value_as_text);

    Some(AppRecord {
        name: text("trackName"),
        developer: text("artistName"),
        formatted_price: text("formattedPrice"),
        rating: obj.get("averageUserRating").and_then(Value::as_f64),
        rating_count: obj.get("userRatingCount").and_then(Value::as_u64).unwrap_or(0),
        version: text("version"),
        release_date: text("currentVersionReleaseDate"),
        description: text("description").unwrap_or_default(),
        numeric_id: obj.get("trackId").and_then(Value::as_u64).map(AppId),
        bundle_id: text("bundleId"),
        size: text("fileSizeBytes"),
        minimum_os_version: text("minimumOsVersion"),
        categories: obj
            .get("genres")
            .and_then(Value::as_array)
            .map(|genres| genres.iter().filter_map(value_as_text).collect())
            .unwrap_or_default(),
    })
}

/// Parse a customer-reviews feed page (`{"feed": {"entry": ...}}`)
///
/// `entry` may be a list, a single object, or absent.
pub fn parse_review_feed(body: &Value) -> Vec<ReviewRecord> {
    let entries = body.get("feed").and_then(|feed| feed.get("entry"));

    match entries {
        Some(Value::Array(items)) => items.iter().map(parse_review).collect(),
        Some(entry @ Value::Object(_)) => vec![parse_review(entry)],
        _ => Vec::new(),
    }
}

/// Parse one feed entry; missing labels become empty strings
pub fn parse_review(entry: &Value) -> ReviewRecord {
    ReviewRecord {
        rating_label: label(entry, "im:rating"),
        title: label(entry, "title"),
        content: label(entry, "content"),
    }
}

/// Parse a discussion search listing (`{"data": {"children": [{"data": {...}}]}}`)
pub fn parse_discussion_listing(body: &Value) -> Vec<DiscussionPost> {
    body.get("data")
        .and_then(|data| data.get("children"))
        .and_then(Value::as_array)
        .map(|children| {
            children
                .iter()
                .map(|child| {
                    let data = child.get("data");
                    let field = |key: &str| {
                        data.and_then(|d| d.get(key))
                            .and_then(value_as_text)
                            .unwrap_or_default()
                    };
                    DiscussionPost {
                        title: field("title"),
                        selftext: field("selftext"),
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `entry[key].label` as text
fn label(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(|field| field.get("label"))
        .and_then(value_as_text)
        .unwrap_or_default()
}

/// Strings as-is, numbers and booleans rendered; everything else is absent
fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
