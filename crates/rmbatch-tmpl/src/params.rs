//! Parameter sets supplied to a rendering pass.
//!
//! Values are always strings; numeric values such as node counts are
//! formatted by the caller (or coerced by the file loaders below, which
//! accept YAML/JSON scalars and reject anything structured).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TmplError, TmplResult};

/// A mapping from placeholder name to replacement string for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet {
    values: BTreeMap<String, String>,
}

impl ParamSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from name/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a parameter set from a YAML or JSON file, dispatching on the
    /// file extension.
    pub fn from_file(path: &Path) -> TmplResult<Self> {
        let source = fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml(&source),
            "json" => Self::from_json(&source),
            other => Err(TmplError::InvalidParams(format!(
                "unsupported parameter file extension '{other}' (expected yaml, yml or json)"
            ))),
        }
    }

    /// Parse a YAML mapping of scalars into a parameter set.
    pub fn from_yaml(source: &str) -> TmplResult<Self> {
        let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(source)?;
        let mapping = match value {
            serde_yaml_ng::Value::Mapping(m) => m,
            _ => {
                return Err(TmplError::InvalidParams(
                    "parameter file must be a mapping of name to scalar value".to_string(),
                ));
            }
        };

        let mut params = Self::new();
        for (key, value) in mapping {
            let name = match key {
                serde_yaml_ng::Value::String(s) => s,
                other => {
                    return Err(TmplError::InvalidParams(format!(
                        "parameter name must be a string, got: {other:?}"
                    )));
                }
            };
            let rendered = match value {
                serde_yaml_ng::Value::String(s) => s,
                serde_yaml_ng::Value::Number(n) => n.to_string(),
                serde_yaml_ng::Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(TmplError::InvalidParams(format!(
                        "value for '{name}' must be a scalar"
                    )));
                }
            };
            params.values.insert(name, rendered);
        }
        Ok(params)
    }

    /// Parse a JSON object of scalars into a parameter set.
    pub fn from_json(source: &str) -> TmplResult<Self> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        let object = match value {
            serde_json::Value::Object(o) => o,
            _ => {
                return Err(TmplError::InvalidParams(
                    "parameter file must be an object of name to scalar value".to_string(),
                ));
            }
        };

        let mut params = Self::new();
        for (name, value) in object {
            let rendered = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(TmplError::InvalidParams(format!(
                        "value for '{name}' must be a scalar"
                    )));
                }
            };
            params.values.insert(name, rendered);
        }
        Ok(params)
    }

    /// Parse a `key=value` assignment (the CLI `--set` form).
    pub fn parse_assignment(assignment: &str) -> TmplResult<(String, String)> {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(TmplError::InvalidParams(format!(
                "expected key=value, got: {assignment}"
            )));
        };
        let key = key.trim();
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(TmplError::InvalidParams(format!(
                "invalid parameter name: '{key}'"
            )));
        }
        Ok((key.to_string(), value.to_string()))
    }

    /// Insert a value, replacing any existing entry for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a value by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether the set supplies a value for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Remove an entry, returning its value if present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Merge `other` into `self`; entries in `other` win on collision.
    pub fn merge(&mut self, other: ParamSet) {
        self.values.extend(other.values);
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_yaml_coerces_scalars() {
        let params = ParamSet::from_yaml(
            "n_nodes: 4\nprocesses_per_node: 8\npartition: high\nuse_mpi: true\n",
        )
        .unwrap();
        assert_eq!(params.get("n_nodes"), Some("4"));
        assert_eq!(params.get("processes_per_node"), Some("8"));
        assert_eq!(params.get("partition"), Some("high"));
        assert_eq!(params.get("use_mpi"), Some("true"));
    }

    #[test]
    fn test_from_yaml_rejects_structured_values() {
        let err = ParamSet::from_yaml("partition:\n  - milan\n  - a64fx\n").unwrap_err();
        assert!(err.to_string().contains("must be a scalar"));

        let err = ParamSet::from_yaml("- milan\n- a64fx\n").unwrap_err();
        assert!(err.to_string().contains("must be a mapping"));
    }

    #[test]
    fn test_from_json() {
        let params =
            ParamSet::from_json(r#"{"command": "./run.sh", "n_nodes": 16}"#).unwrap();
        assert_eq!(params.get("command"), Some("./run.sh"));
        assert_eq!(params.get("n_nodes"), Some("16"));
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml_path = dir.path().join("params.yaml");
        let mut f = std::fs::File::create(&yaml_path).unwrap();
        writeln!(f, "partition: milan").unwrap();
        let params = ParamSet::from_file(&yaml_path).unwrap();
        assert_eq!(params.get("partition"), Some("milan"));

        let txt_path = dir.path().join("params.txt");
        std::fs::write(&txt_path, "partition: milan\n").unwrap();
        assert!(ParamSet::from_file(&txt_path).is_err());
    }

    #[test]
    fn test_parse_assignment() {
        let (k, v) = ParamSet::parse_assignment("command=./run.sh --fast").unwrap();
        assert_eq!(k, "command");
        assert_eq!(v, "./run.sh --fast");

        // Values may contain '='
        let (k, v) = ParamSet::parse_assignment("command=A=B").unwrap();
        assert_eq!(k, "command");
        assert_eq!(v, "A=B");

        assert!(ParamSet::parse_assignment("no_equals_sign").is_err());
        assert!(ParamSet::parse_assignment("=value").is_err());
        assert!(ParamSet::parse_assignment("bad-name=x").is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = ParamSet::from_pairs([("partition", "milan"), ("n_nodes", "1")]);
        base.merge(ParamSet::from_pairs([("partition", "a64fx")]));
        assert_eq!(base.get("partition"), Some("a64fx"));
        assert_eq!(base.get("n_nodes"), Some("1"));
    }
}
