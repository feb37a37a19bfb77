//! Parse-or-default decoding of persisted values.

use serde::de::DeserializeOwned;

/// Decodes a raw persisted value, falling back to the canonical default.
///
/// Read-side corruption is recovered locally and never surfaced as an
/// error: a missing value, unparsable JSON, or JSON of the wrong shape all
/// yield `T::default()` (the empty map for a cart, the empty list for an
/// order history). Corrupt input is logged so the overwrite that follows
/// the next mutation is at least visible.
pub fn parse_or_default<T: DeserializeOwned + Default>(raw: Option<&str>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "discarding corrupt persisted value");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn missing_value_yields_default() {
        let map: BTreeMap<u64, u32> = parse_or_default(None);
        assert!(map.is_empty());
        let list: Vec<u32> = parse_or_default(None);
        assert!(list.is_empty());
    }

    #[test]
    fn unparsable_json_yields_default() {
        let map: BTreeMap<u64, u32> = parse_or_default(Some("{not json"));
        assert!(map.is_empty());
    }

    #[test]
    fn wrong_shape_yields_default() {
        // An array where an object is expected.
        let map: BTreeMap<u64, u32> = parse_or_default(Some("[1,2,3]"));
        assert!(map.is_empty());
        // An object where an array is expected.
        let list: Vec<u32> = parse_or_default(Some(r#"{"a":1}"#));
        assert!(list.is_empty());
    }

    #[test]
    fn valid_json_parses() {
        let map: BTreeMap<u64, u32> = parse_or_default(Some(r#"{"1":2,"5":1}"#));
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], 2);
        assert_eq!(map[&5], 1);
    }
}
