//! Read-only display projection.
//!
//! Maps a selection back through the option map to a human-readable label
//! string. Returns raw text; HTML-escaping is the caller's job.

use crate::options::OptionMap;
use crate::value::Selection;

/// Marker shown when no selected key resolves to a label
pub const NONE_MARKER: &str = "(none)";

/// Project selected keys to their labels, joined with `", "`.
///
/// Keys absent from the source are stale and dropped silently; the
/// selection itself stays intact for round-trip persistence. An empty
/// result yields [`NONE_MARKER`].
pub fn project(source: &OptionMap, selection: &Selection) -> String {
    let labels: Vec<&str> = selection
        .iter()
        .filter_map(|key| source.get(key).map(String::as_str))
        .collect();
    if labels.is_empty() {
        NONE_MARKER.to_string()
    } else {
        labels.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> OptionMap {
        let mut map = OptionMap::new();
        map.insert("1".to_string(), "Technology".to_string());
        map.insert("2".to_string(), "Gardening".to_string());
        map
    }

    #[test]
    fn labels_join_in_selection_order() {
        let selection = Selection::from_keys(["2", "1"]);
        assert_eq!(project(&source(), &selection), "Gardening, Technology");
    }

    #[test]
    fn stale_keys_are_dropped() {
        let with_stale = Selection::from_keys(["1", "99"]);
        let without = Selection::from_keys(["1"]);
        assert_eq!(
            project(&source(), &with_stale),
            project(&source(), &without)
        );
    }

    #[test]
    fn empty_selection_yields_none_marker() {
        assert_eq!(project(&source(), &Selection::new()), "(none)");
    }

    #[test]
    fn all_stale_yields_none_marker() {
        let selection = Selection::from_keys(["98", "99"]);
        assert_eq!(project(&source(), &selection), NONE_MARKER);
    }
}
