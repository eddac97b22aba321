//! Builder inputs that accept more than one shape
//!
//! Labels arrive either as a key/value mapping or as a list of tags. Loosely
//! typed callers (JSON payloads) go through the `serde_json::Value`
//! conversions here, which is where type errors are reported.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::error::BuilderError;

/// Labels to merge into an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Labels {
    /// Key/value pairs, merged as given
    Map(BTreeMap<String, String>),
    /// Tags; each becomes both key and value
    List(Vec<String>),
}

impl Labels {
    /// Whether there is nothing to merge
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Map(map) => map.is_empty(),
            Self::List(list) => list.is_empty(),
        }
    }

    /// Flatten into key/value pairs
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            Self::Map(map) => map.into_iter().collect(),
            Self::List(list) => list.into_iter().map(|tag| (tag.clone(), tag)).collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Labels {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self::Map(map)
    }
}

impl From<HashMap<String, String>> for Labels {
    fn from(map: HashMap<String, String>) -> Self {
        Self::Map(map.into_iter().collect())
    }
}

impl From<Vec<String>> for Labels {
    fn from(list: Vec<String>) -> Self {
        Self::List(list)
    }
}

impl From<Vec<&str>> for Labels {
    fn from(list: Vec<&str>) -> Self {
        Self::List(list.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Labels {
    fn from(list: &[&str]) -> Self {
        Self::List(list.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Labels {
    fn from(list: [&str; N]) -> Self {
        Self::List(list.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Labels {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Map(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for Labels {
    type Error = BuilderError;

    /// Falsy values (`null`, `false`, `0`, `""`) yield empty labels.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        const EXPECTED: &str = "an object of strings or an array of strings";

        if is_falsy(&value) {
            return Ok(Self::List(Vec::new()));
        }
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| match v {
                    Value::String(s) => Ok((k, s)),
                    other => Err(BuilderError::InvalidType {
                        field: "labels",
                        expected: EXPECTED,
                        found: value_kind(&other),
                    }),
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Map),
            Value::Array(items) => strings_from_values("labels", &items).map(Self::List),
            other => Err(BuilderError::InvalidType {
                field: "labels",
                expected: EXPECTED,
                found: value_kind(&other),
            }),
        }
    }
}

/// Convert loosely typed values into strings, rejecting anything else
///
/// # Errors
/// Returns [`BuilderError::InvalidType`] naming `field` on the first non-string
pub(crate) fn strings_from_values(
    field: &'static str,
    values: &[Value],
) -> Result<Vec<String>, BuilderError> {
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => Ok(s.clone()),
            other => Err(BuilderError::InvalidType {
                field,
                expected: "string",
                found: value_kind(other),
            }),
        })
        .collect()
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_pairs_repeat_tag() {
        let labels = Labels::from(["vip", "urgent"]);
        assert_eq!(
            labels.into_pairs(),
            vec![
                ("vip".to_string(), "vip".to_string()),
                ("urgent".to_string(), "urgent".to_string()),
            ]
        );
    }

    #[test]
    fn empty_inputs_are_empty() {
        assert!(Labels::from(Vec::<String>::new()).is_empty());
        assert!(Labels::from(BTreeMap::new()).is_empty());
        assert!(!Labels::from([("a", "1")]).is_empty());
    }

    #[test]
    fn value_object_becomes_map() {
        let labels = Labels::try_from(json!({"team": "travel"})).unwrap();
        assert_eq!(labels, Labels::from([("team", "travel")]));
    }

    #[test]
    fn value_array_becomes_list() {
        let labels = Labels::try_from(json!(["vip"])).unwrap();
        assert_eq!(labels, Labels::List(vec!["vip".to_string()]));
    }

    #[test]
    fn falsy_values_are_empty() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            let labels = Labels::try_from(value).unwrap();
            assert!(labels.is_empty());
        }
    }

    #[test]
    fn scalar_value_is_rejected() {
        let result = Labels::try_from(json!(42));
        assert!(matches!(
            result,
            Err(BuilderError::InvalidType {
                field: "labels",
                found: "number",
                ..
            })
        ));
    }

    #[test]
    fn non_string_elements_are_rejected() {
        assert!(Labels::try_from(json!(["vip", 1])).is_err());
        assert!(Labels::try_from(json!({"a": true})).is_err());
    }

    #[test]
    fn strings_from_values_names_field() {
        let err = strings_from_values("phrase", &[json!("a"), json!(null)]).unwrap_err();
        assert!(matches!(
            err,
            BuilderError::InvalidType {
                field: "phrase",
                found: "null",
                ..
            }
        ));
    }
}
