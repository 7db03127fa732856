use reluctance_core::model::tag::{OptionalTag, TagValue};
use std::collections::HashMap;

/// the tags of one OSM way. keys are matched case-insensitively and blank
/// values are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsmTags {
    tags: HashMap<String, String>,
}

impl OsmTags {
    pub fn insert(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let _ = self.tags.insert(key.trim().to_lowercase(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(&key.to_lowercase()).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// `yes`, `true` or `1`.
    pub fn is_tag_true(&self, key: &str) -> bool {
        self.flag(key) == OptionalTag::Present(true)
    }

    /// `no`, `false` or `0`.
    pub fn is_tag_false(&self, key: &str) -> bool {
        self.flag(key) == OptionalTag::Present(false)
    }

    fn flag(&self, key: &str) -> OptionalTag<bool> {
        match self.get(key) {
            Some(raw) => bool::parse_tag(raw).ok().flatten().into(),
            None => OptionalTag::Absent,
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OsmTags
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tags = OsmTags::default();
        for (k, v) in iter {
            tags.insert(k.as_ref(), v.as_ref());
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::OsmTags;

    #[test]
    fn keys_ignore_case() {
        let tags = OsmTags::from_iter([("Surface", "asphalt"), ("WGT:Ressaut_Max", "0.02")]);
        assert_eq!(tags.get("surface"), Some("asphalt"));
        assert_eq!(tags.get("wgt:ressaut_max"), Some("0.02"));
        assert!(!tags.has("width"));
    }

    #[test]
    fn blank_values_are_dropped() {
        let tags = OsmTags::from_iter([("width", "  "), ("lit", "yes")]);
        assert_eq!(tags.len(), 1);
        assert!(!tags.has("width"));
    }

    #[test]
    fn truthiness() {
        let tags = OsmTags::from_iter([("lit", "1"), ("wheelchair", "no"), ("foot", "designated")]);
        assert!(tags.is_tag_true("lit"));
        assert!(tags.is_tag_false("wheelchair"));
        assert!(!tags.is_tag_true("foot"));
        assert!(!tags.is_tag_false("foot"));
        assert!(!tags.is_tag_false("missing"));
    }
}
