//! Lenient decoding of persisted state
//!
//! Every field is optional on read. Missing or malformed values fall back to
//! defaults instead of failing the load.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::domain::{ChallengeState, PendingChar};

/// Decode a state document, repairing whatever can be repaired.
///
/// Returns `None` only when the text is not a JSON object at all. A field
/// with the wrong type is treated as missing.
pub fn decode_state(content: &str, today: NaiveDate) -> Option<ChallengeState> {
    let stored: Map<String, Value> = match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!("Discarding challenge state: not a JSON object");
            return None;
        }
        Err(e) => {
            tracing::warn!("Discarding unreadable challenge state: {}", e);
            return None;
        }
    };

    let mut state = ChallengeState::new(today);
    if let Some(goal) = stored.get("goal").map(non_negative) {
        state.goal = goal;
    }
    if let Some(name) = stored
        .get("challengeName")
        .and_then(Value::as_str)
        .filter(|n| !n.trim().is_empty())
    {
        state.challenge_name = name.to_string();
    }
    if let Some(count) = stored.get("dailyCount").map(non_negative) {
        state.daily_count = count;
    }
    if let Some(date) = stored
        .get("lastUpdateDate")
        .and_then(Value::as_str)
        .and_then(parse_date)
    {
        state.last_update_date = date;
    }
    state.tracking_paused = stored.get("trackingPaused").is_some_and(truthy);

    // Last entry wins for duplicate dates; zero days are dropped
    for entry in array_field(&stored, "history") {
        let date = entry.get("date").and_then(Value::as_str).and_then(parse_date);
        let count = entry.get("count").map(non_negative).unwrap_or(0);
        if let Some(date) = date {
            state.upsert_history(date, count);
        }
    }
    state.history.sort_by_key(|h| h.date);

    state.pending_chars = array_field(&stored, "pendingChars")
        .iter()
        .filter_map(|entry| {
            let count = entry.get("count").map(non_negative).unwrap_or(0);
            let timestamp = entry.get("timestamp").and_then(parse_instant)?;
            (count > 0).then_some(PendingChar { count, timestamp })
        })
        .collect();
    state.pending_chars.sort_by_key(|p| p.timestamp);

    Some(state)
}

fn array_field<'a>(stored: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    stored
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Booleans and "true"/"false" strings
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Numbers and numeric strings, clamped at zero
fn non_negative(value: &Value) -> u64 {
    let n = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    n.max(0) as u64
}

/// ISO dates, with a fallback for "Mon Jan 01 2024" style strings
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%a %b %d %Y"))
        .ok()
}

/// RFC 3339 strings or Unix milliseconds
fn parse_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
