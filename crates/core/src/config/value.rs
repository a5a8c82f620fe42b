//! Dot-accessible view over a parsed YAML document.
//!
//! [`ConfigBox`] is a tree of string-keyed mappings. Values can be read by
//! name (`get`), by index (`box["key"]`), by dotted path (`lookup("a.b")`),
//! or deserialized into a typed struct (`section::<T>("a")`).

use super::error::ConfigError;
use super::error::ConfigResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Mapping;
use serde_yaml::Number;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::ops::Index;

static NULL: ConfigValue = ConfigValue::Null;

/// A single node of a loaded configuration document.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<ConfigValue>),
    Box(ConfigBox),
}

impl ConfigValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_box(&self) -> Option<&ConfigBox> {
        match self {
            ConfigValue::Box(b) => Some(b),
            _ => None,
        }
    }

    /// Deserialize this node into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        Ok(serde_yaml::from_value(Value::from(self))?)
    }
}

impl Index<&str> for ConfigValue {
    type Output = ConfigValue;

    /// Missing keys, and indexing into anything but a box, yield `Null`.
    fn index(&self, key: &str) -> &ConfigValue {
        match self {
            ConfigValue::Box(b) => &b[key],
            _ => &NULL,
        }
    }
}

impl Index<usize> for ConfigValue {
    type Output = ConfigValue;

    fn index(&self, index: usize) -> &ConfigValue {
        match self {
            ConfigValue::List(items) => items.get(index).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl TryFrom<Value> for ConfigValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => ConfigValue::Null,
            Value::Bool(b) => ConfigValue::Bool(b),
            Value::Number(n) => ConfigValue::Number(n),
            Value::String(s) => ConfigValue::String(s),
            Value::Sequence(items) => ConfigValue::List(
                items
                    .into_iter()
                    .map(ConfigValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(mapping) => ConfigValue::Box(ConfigBox::try_from(mapping)?),
            Value::Tagged(tagged) => ConfigValue::try_from(tagged.value)?,
        })
    }
}

impl From<&ConfigValue> for Value {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::Null => Value::Null,
            ConfigValue::Bool(b) => Value::Bool(*b),
            ConfigValue::Number(n) => Value::Number(n.clone()),
            ConfigValue::String(s) => Value::String(s.clone()),
            ConfigValue::List(items) => Value::Sequence(items.iter().map(Value::from).collect()),
            ConfigValue::Box(b) => Value::Mapping(Mapping::from(b)),
        }
    }
}

/// String-keyed mapping with nested mappings exposed as nested boxes.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ConfigBox {
    entries: BTreeMap<String, ConfigValue>,
}

impl ConfigBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name-based access to a top-level key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Walk nested boxes along a dotted path such as `data_ingestion.root_dir`.
    pub fn lookup(&self, dotted_key: &str) -> Option<&ConfigValue> {
        let mut segments = dotted_key.split('.');
        let first = segments.next()?;
        let mut current = self.get(first)?;
        for segment in segments {
            current = current.as_box()?.get(segment)?;
        }
        Some(current)
    }

    /// Deserialize the sub-tree at `dotted_key` into `T`.
    pub fn section<T: DeserializeOwned>(&self, dotted_key: &str) -> ConfigResult<T> {
        self.lookup(dotted_key)
            .ok_or_else(|| ConfigError::MissingKey {
                key: dotted_key.to_string(),
            })?
            .deserialize()
    }

    /// Deserialize the whole box into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        Ok(serde_yaml::from_value(Value::Mapping(Mapping::from(self)))?)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) -> Option<ConfigValue> {
        self.entries.insert(key.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for ConfigBox {
    type Output = ConfigValue;

    /// Missing keys yield `ConfigValue::Null` rather than panicking.
    fn index(&self, key: &str) -> &ConfigValue {
        self.entries.get(key).unwrap_or(&NULL)
    }
}

impl TryFrom<Mapping> for ConfigBox {
    type Error = String;

    fn try_from(mapping: Mapping) -> Result<Self, Self::Error> {
        let mut entries = BTreeMap::new();
        for (key, value) in mapping {
            let key = match key {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => return Err(format!("unsupported mapping key: {other:?}")),
            };
            let value = ConfigValue::try_from(value)?;
            if entries.contains_key(&key) {
                return Err(format!("duplicate mapping key: {key}"));
            }
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }
}

impl TryFrom<Value> for ConfigBox {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Mapping(mapping) => ConfigBox::try_from(mapping),
            Value::Tagged(tagged) => ConfigBox::try_from(tagged.value),
            Value::Null => Err("document is null".to_string()),
            Value::Bool(_) => Err("document root is a boolean, expected a mapping".to_string()),
            Value::Number(_) => Err("document root is a number, expected a mapping".to_string()),
            Value::String(_) => Err("document root is a string, expected a mapping".to_string()),
            Value::Sequence(_) => Err("document root is a list, expected a mapping".to_string()),
        }
    }
}

impl From<&ConfigBox> for Mapping {
    fn from(b: &ConfigBox) -> Self {
        b.entries
            .iter()
            .map(|(k, v)| (Value::String(k.clone()), Value::from(v)))
            .collect()
    }
}
