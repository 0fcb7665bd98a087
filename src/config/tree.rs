use serde_json::{Map, Value};

/// Looks up the node at `path`, descending through object keys only.
///
/// Returns `None` if a segment is missing or an intermediate node is not an
/// object. The empty path returns `root`.
pub fn lookup_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, segment| node.as_object()?.get(*segment))
}

/// Replaces the node at `path` with `value`, creating intermediate objects.
///
/// Any node standing where an object is needed (missing, null, scalar or
/// array) is replaced by an empty object before descending. The value at the
/// end of the path is overwritten entirely.
pub fn set_at_path(node: &mut Value, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        *node = value;
        return;
    };

    if !node.is_object() {
        *node = Value::Object(Map::new());
    }

    if let Value::Object(map) = node {
        let child = map.entry(*first).or_insert(Value::Null);
        set_at_path(child, rest, value);
    }
}

/// Overlays the top-level entries of `overlay_value` onto `base`.
///
/// When both are objects each key of `overlay_value` replaces the same key of
/// `base` as a whole; nested values are never merged. Any other pairing
/// replaces `base`.
pub fn overlay(base: &mut Value, overlay_value: Value) {
    match (base, overlay_value) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            base_map.extend(overlay_map);
        }
        (base, value) => *base = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_root() {
        let doc = json!({"a": 1});
        assert_eq!(lookup_path(&doc, &[]), Some(&doc));
    }

    #[test]
    fn test_lookup_nested() {
        let doc = json!({"server": {"tls": {"port": 443}}});
        assert_eq!(
            lookup_path(&doc, &["server", "tls", "port"]),
            Some(&json!(443))
        );
    }

    #[test]
    fn test_lookup_missing_key() {
        let doc = json!({"server": {}});
        assert_eq!(lookup_path(&doc, &["server", "host"]), None);
        assert_eq!(lookup_path(&doc, &["client"]), None);
    }

    #[test]
    fn test_lookup_through_scalar_or_array() {
        let doc = json!({"port": 80, "list": [{"a": 1}]});
        assert_eq!(lookup_path(&doc, &["port", "value"]), None);
        assert_eq!(lookup_path(&doc, &["list", "0"]), None);
    }

    #[test]
    fn test_set_creates_intermediates() {
        let mut doc = json!({});
        set_at_path(&mut doc, &["a", "b", "c"], json!(1));
        assert_eq!(doc, json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_set_keeps_siblings_along_path() {
        let mut doc = json!({"a": {"keep": true, "b": {"old": 1}}, "other": "x"});
        set_at_path(&mut doc, &["a", "b"], json!({"new": 2}));
        assert_eq!(
            doc,
            json!({"a": {"keep": true, "b": {"new": 2}}, "other": "x"})
        );
    }

    #[test]
    fn test_set_replaces_scalar_intermediate() {
        let mut doc = json!({"a": 5});
        set_at_path(&mut doc, &["a", "b"], json!("v"));
        assert_eq!(doc, json!({"a": {"b": "v"}}));
    }

    #[test]
    fn test_set_at_root_replaces_document() {
        let mut doc = json!({"a": 1});
        set_at_path(&mut doc, &[], json!([1, 2, 3]));
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn test_set_empty_segment_is_literal_key() {
        let mut doc = json!({});
        set_at_path(&mut doc, &["a", "", "b"], json!(true));
        assert_eq!(doc, json!({"a": {"": {"b": true}}}));
    }

    #[test]
    fn test_overlay_replaces_top_level_keys_whole() {
        let mut base = json!({"x": 1, "nested": {"keep": "k", "replace": 1}});
        overlay(&mut base, json!({"y": 2, "nested": {"replace": 2}}));
        assert_eq!(base, json!({"x": 1, "y": 2, "nested": {"replace": 2}}));
    }

    #[test]
    fn test_overlay_replaces_arrays() {
        let mut base = json!({"list": [1, 2, 3]});
        overlay(&mut base, json!({"list": [9]}));
        assert_eq!(base, json!({"list": [9]}));
    }

    #[test]
    fn test_overlay_non_object_replaces_base() {
        let mut base = json!({"a": 1});
        overlay(&mut base, json!("text"));
        assert_eq!(base, json!("text"));
    }
}
