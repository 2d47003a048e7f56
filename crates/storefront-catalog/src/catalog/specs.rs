//! Product spec sheets (attribute name to scalar value).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single spec value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for SpecValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for SpecValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for SpecValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Ordered spec sheet.
///
/// Entries keep the order they had in the source JSON object so a product
/// page lists them the way the catalog author wrote them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specs(IndexMap<String, SpecValue>);

impl Specs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SpecValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SpecValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<SpecValue>> FromIterator<(K, V)> for Specs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_preserve_source_order() {
        let json = r#"{"Longueur": "5 m", "Puissance": 24, "Étanche": true, "Angle": 120.5}"#;
        let specs: Specs = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = specs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["Longueur", "Puissance", "Étanche", "Angle"]);
    }

    #[test]
    fn test_spec_value_kinds() {
        let json = r#"{"a": "texte", "b": 12, "c": false}"#;
        let specs: Specs = serde_json::from_str(json).unwrap();

        assert_eq!(specs.get("a"), Some(&SpecValue::Text("texte".into())));
        assert_eq!(specs.get("b"), Some(&SpecValue::Number(12.0)));
        assert_eq!(specs.get("c"), Some(&SpecValue::Bool(false)));
    }

    #[test]
    fn test_spec_value_display() {
        assert_eq!(SpecValue::from(12_i64).to_string(), "12");
        assert_eq!(SpecValue::from(1.5).to_string(), "1.5");
        assert_eq!(SpecValue::from(true).to_string(), "true");
        assert_eq!(SpecValue::from("12V").to_string(), "12V");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut specs: Specs = [("a", 1_i64), ("b", 2_i64)].into_iter().collect();
        specs.insert("a", 3_i64);

        let entries: Vec<String> = specs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        assert_eq!(entries, vec!["a=3", "b=2"]);
    }

    #[test]
    fn test_collect_keeps_first_position() {
        let specs: Specs = [("Puissance", 24_i64), ("Ports", 2_i64), ("Puissance", 45_i64)]
            .into_iter()
            .collect();

        let entries: Vec<String> = specs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        assert_eq!(entries, vec!["Puissance=45", "Ports=2"]);
        assert_eq!(specs.len(), 2);
    }

    #[test]
    fn test_serialize_keeps_order() {
        let specs: Specs = [("z", "last"), ("a", "first")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&specs).unwrap(),
            r#"{"z":"last","a":"first"}"#
        );
    }
}
