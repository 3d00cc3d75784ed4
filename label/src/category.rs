use crate::{common::*, Detection};

/// Numeric id and confidence threshold for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: i64,
    pub threshold: f64,
}

/// The category allow-list, keyed by label name in configured order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(IndexMap<String, CategoryInfo>);

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, info: CategoryInfo) {
        self.0.insert(name.into(), info);
    }

    pub fn get(&self, name: &str) -> Option<&CategoryInfo> {
        self.0.get(name)
    }

    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, info)| info.id == id)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryInfo)> {
        self.0.iter().map(|(name, info)| (name.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the category entry a detection matches, if any.
    ///
    /// A detection matches when its label is registered and its confidence
    /// reaches the label's threshold (inclusive). Unregistered labels never
    /// match; dropping them is policy, not an error.
    pub fn matching(&self, detection: &Detection) -> Option<&CategoryInfo> {
        self.get(&detection.label)
            .filter(|info| detection.confidence >= info.threshold)
    }

    /// The keep/drop predicate over [`matching`](Self::matching).
    pub fn keep(&self, detection: &Detection) -> bool {
        self.matching(detection).is_some()
    }
}

impl FromIterator<(String, CategoryInfo)> for CategoryMap {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (String, CategoryInfo)>,
    {
        Self(iter.into_iter().collect())
    }
}
