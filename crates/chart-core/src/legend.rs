//! Legend descriptors

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute identifier with its display label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attr {
    pub value: String,
    pub view_value: String,
}

impl Attr {
    pub fn new(value: impl Into<String>, view_value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            view_value: view_value.into(),
        }
    }
}

/// One legend entry: the attribute and its marker color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendInfo {
    pub attr: Attr,
    pub color: String,
}

impl LegendInfo {
    pub fn new(attr: Attr, color: impl Into<String>) -> Self {
        Self {
            attr,
            color: color.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.attr.view_value
    }
}

/// Insertion-ordered legend map (key -> entry).
///
/// Serializes as a JSON object; key order is kept on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegendInfoMap(IndexMap<String, LegendInfo>);

impl LegendInfoMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, info: LegendInfo) -> Option<LegendInfo> {
        self.0.insert(key.into(), info)
    }

    pub fn get(&self, key: &str) -> Option<&LegendInfo> {
        self.0.get(key)
    }

    /// Remove `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<LegendInfo> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &LegendInfo> + ExactSizeIterator {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LegendInfo)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, LegendInfo)> for LegendInfoMap {
    fn from_iter<I: IntoIterator<Item = (K, LegendInfo)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, info)| (key.into(), info)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(value: &str, label: &str, color: &str) -> LegendInfo {
        LegendInfo::new(Attr::new(value, label), color)
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut map = LegendInfoMap::new();
        map.insert("zeta", info("zeta", "Zeta", "#000"));
        map.insert("alpha", info("alpha", "Alpha", "#111"));

        let labels: Vec<_> = map.values().map(LegendInfo::label).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = LegendInfoMap::new();
        map.insert("a", info("a", "A", "#000"));
        map.insert("b", info("b", "B", "#111"));
        let old = map.insert("a", info("a", "A2", "#222"));

        assert_eq!(old.map(|o| o.color), Some("#000".to_string()));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a").map(LegendInfo::label), Some("A2"));
    }

    #[test]
    fn test_json_object_order() {
        let json = r##"{
            "reads": {"attr": {"value": "reads", "viewValue": "Reads"}, "color": "#1f77b4"},
            "bases": {"attr": {"value": "bases", "viewValue": "Bases"}, "color": "#ff7f0e"}
        }"##;
        let map: LegendInfoMap = serde_json::from_str(json).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["reads", "bases"]);
        assert_eq!(map.get("bases").map(|i| i.color.as_str()), Some("#ff7f0e"));

        let out = serde_json::to_string(&map).unwrap();
        assert!(out.find("reads").unwrap() < out.find("bases").unwrap());
        assert!(out.contains("\"viewValue\":\"Reads\""));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut map: LegendInfoMap = ["a", "b", "c"]
            .iter()
            .map(|k| (*k, info(k, k, "#000")))
            .collect();
        map.remove("a");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_remove() {
        let mut map: LegendInfoMap = vec![("a", info("a", "A", "#000"))].into_iter().collect();
        assert!(map.remove("a").is_some());
        assert!(map.is_empty());
        assert!(map.remove("a").is_none());
    }
}
