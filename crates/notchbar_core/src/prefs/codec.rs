//! Text encoding of stored preference values.
//!
//! Decoders return `None` for anything they do not fully understand; the
//! caller treats that as "absent" and keeps the UI renderable.

use crate::model::side::Side;
use crate::prefs::{PrefsError, PrefsResult};
use std::collections::{BTreeMap, HashSet};

pub fn encode_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn decode_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Decodes a finite number.
pub fn decode_f64(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn encode_order(key: &str, ids: &[String]) -> PrefsResult<String> {
    serde_json::to_string(ids).map_err(|source| PrefsError::Encode {
        key: key.to_string(),
        source,
    })
}

/// Decodes an order array; arrays holding duplicate ids are rejected whole.
pub fn decode_order(raw: &str) -> Option<Vec<String>> {
    let ids: Vec<String> = serde_json::from_str(raw).ok()?;
    let mut seen = HashSet::with_capacity(ids.len());
    if ids.iter().all(|id| seen.insert(id.as_str())) {
        Some(ids)
    } else {
        None
    }
}

pub fn encode_side_map(key: &str, assignments: &BTreeMap<String, Side>) -> PrefsResult<String> {
    serde_json::to_string(assignments).map_err(|source| PrefsError::Encode {
        key: key.to_string(),
        source,
    })
}

/// Decodes the side-assignment map; any unknown side value rejects the map.
pub fn decode_side_map(raw: &str) -> Option<BTreeMap<String, Side>> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::{decode_bool, decode_f64, decode_order, decode_side_map, encode_side_map};
    use crate::model::side::Side;
    use std::collections::BTreeMap;

    #[test]
    fn decode_order_rejects_garbage_and_duplicates() {
        assert_eq!(
            decode_order(r#"["calendar","media"]"#),
            Some(vec!["calendar".to_string(), "media".to_string()])
        );
        assert_eq!(decode_order(r#"["calendar","calendar"]"#), None);
        assert_eq!(decode_order("calendar,media"), None);
        assert_eq!(decode_order(r#"{"calendar":1}"#), None);
    }

    #[test]
    fn side_map_uses_lowercase_side_names() {
        let mut map = BTreeMap::new();
        map.insert("todolist".to_string(), Side::Right);
        let raw = encode_side_map("layout.side_assignments", &map).expect("encode");
        assert_eq!(raw, r#"{"todolist":"right"}"#);
        assert_eq!(decode_side_map(&raw), Some(map));

        assert_eq!(decode_side_map(r#"{"todolist":"middle"}"#), None);
    }

    #[test]
    fn scalar_decoders_are_strict() {
        assert_eq!(decode_bool("true"), Some(true));
        assert_eq!(decode_bool("0"), Some(false));
        assert_eq!(decode_bool("yes"), None);
        assert_eq!(decode_f64(" 310 "), Some(310.0));
        assert_eq!(decode_f64("NaN"), None);
        assert_eq!(decode_f64("wide"), None);
    }
}
