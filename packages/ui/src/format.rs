//! Date rendering for cards.
//!
//! The backend sends ISO 8601 strings, sometimes without an offset. On the web they are
//! shown with the browser's locale; native builds use `M/D/YYYY`. Anything that does not
//! parse renders as [`UNKNOWN_DATE`] instead of failing the whole card.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub const UNKNOWN_DATE: &str = "Unknown date";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Calendar date of an ISO 8601 timestamp, in the timestamp's own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Localized date for display. Never panics.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => locale_date(raw.trim(), date),
        None => UNKNOWN_DATE.to_string(),
    }
}

fn numeric_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(target_arch = "wasm32")]
fn locale_date(raw: &str, date: NaiveDate) -> String {
    use wasm_bindgen::JsValue;

    let js_date = js_sys::Date::new(&JsValue::from_str(raw));
    if js_date.get_time().is_nan() {
        return numeric_date(date);
    }
    js_date
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_date(_raw: &str, date: NaiveDate) -> String {
    numeric_date(date)
}
