//! Feature schema carried by the model artifact.
//!
//! The artifact, not the code, owns the feature order and the categorical
//! encoding tables. The validator and preparer both read from here, so a
//! retrained artifact with a different column order or category set needs no
//! code change.

use std::collections::HashMap;

/// Ordered feature layout plus categorical code tables and sentinel defaults.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    /// Feature names in the exact order the model was trained with.
    feature_names: Vec<String>,
    /// Categorical feature → (category label → numeric code).
    encodings: HashMap<String, HashMap<String, f64>>,
    /// Feature → sentinel value substituted when the input omits it.
    defaults: HashMap<String, f64>,
}

impl FeatureSchema {
    pub fn new(
        feature_names: Vec<String>,
        encodings: HashMap<String, HashMap<String, f64>>,
        defaults: HashMap<String, f64>,
    ) -> Self {
        Self { feature_names, encodings, defaults }
    }

    /// Number of features the model expects.
    pub fn len(&self) -> usize {
        self.feature_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feature_names.is_empty()
    }

    /// Feature names in trained order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Whether a feature is encoded through a categorical table.
    pub fn is_categorical(&self, feature: &str) -> bool {
        self.encodings.contains_key(feature)
    }

    /// Numeric code for a categorical value, if the category is known.
    pub fn encode(&self, feature: &str, value: &str) -> Option<f64> {
        self.encodings.get(feature)?.get(value).copied()
    }

    /// Legal category labels for a categorical feature, sorted for stable
    /// error messages.
    pub fn categories(&self, feature: &str) -> Option<Vec<&str>> {
        let table = self.encodings.get(feature)?;
        let mut labels: Vec<&str> = table.keys().map(String::as_str).collect();
        labels.sort_unstable();
        Some(labels)
    }

    /// Sentinel default for a feature absent from the input record.
    pub fn default_for(&self, feature: &str) -> Option<f64> {
        self.defaults.get(feature).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> FeatureSchema {
        let mut encodings = HashMap::new();
        encodings.insert(
            "st_type".to_string(),
            HashMap::from([("G".to_string(), 4.0), ("K".to_string(), 5.0), ("M".to_string(), 6.0)]),
        );
        let defaults = HashMap::from([("disc_year".to_string(), 0.0)]);
        FeatureSchema::new(
            vec!["pl_orbper".to_string(), "st_type".to_string(), "disc_year".to_string()],
            encodings,
            defaults,
        )
    }

    #[test]
    fn test_encode_known_category() {
        let schema = sample_schema();
        assert_eq!(schema.encode("st_type", "K"), Some(5.0));
        assert_eq!(schema.encode("st_type", "X"), None);
        assert_eq!(schema.encode("pl_orbper", "K"), None);
    }

    #[test]
    fn test_categories_sorted() {
        let schema = sample_schema();
        assert_eq!(schema.categories("st_type"), Some(vec!["G", "K", "M"]));
        assert_eq!(schema.categories("pl_orbper"), None);
    }

    #[test]
    fn test_default_sentinel() {
        let schema = sample_schema();
        assert_eq!(schema.default_for("disc_year"), Some(0.0));
        assert_eq!(schema.default_for("pl_orbper"), None);
    }
}
