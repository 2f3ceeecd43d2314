//! [`SchemaNode`] binding over the JSON introspection tree of a compiled
//! schema (the output of Joi's `describe()`).
//!
//! Both describe layouts are accepted:
//! - current: `type`, `flags.{presence,label,description}`, `keys`, `items`, `allow`
//! - legacy:  `type`, `flags.presence`, top-level `label`/`description`, `children`, `items`, `valids`
//!
//! Reading never fails. A field that is missing, empty, or of the wrong JSON
//! type reads as absent, so the mapper reports it as unresolved instead.
//! Labels are the exception: an empty label is kept as `Some("")`.
use std::borrow::Cow;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::node::SchemaNode;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct CompiledSchema {
    pub kind: Option<String>,
    pub flags: Flags,
    pub keys: IndexMap<String, CompiledSchema>,
    pub items: Vec<CompiledSchema>,
    pub allow: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    pub presence: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
}

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTION
// ————————————————————————————————————————————————————————————————————————————

impl From<Value> for CompiledSchema {
    fn from(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let mut flags = match map.remove("flags") {
            Some(Value::Object(f)) => Flags::from_map(f),
            _ => Flags::default(),
        };
        // legacy layout keeps these next to `flags`
        if flags.label.is_none() {
            flags.label = take_string(&mut map, "label");
        }
        if flags.description.is_none() {
            flags.description = take_str(&mut map, "description");
        }

        let keys = match map.remove("keys").or_else(|| map.remove("children")) {
            Some(Value::Object(props)) => props
                .into_iter()
                .map(|(k, v)| (k, Self::from(v)))
                .collect(),
            _ => IndexMap::new(),
        };

        let items = match map.remove("items") {
            Some(Value::Array(xs)) => xs.into_iter().map(Self::from).collect(),
            _ => Vec::new(),
        };

        let allow = match map.remove("allow").or_else(|| map.remove("valids")) {
            Some(Value::Array(xs)) => xs,
            _ => Vec::new(),
        };

        Self {
            kind: take_str(&mut map, "type"),
            flags,
            keys,
            items,
            allow,
        }
    }
}

impl Flags {
    fn from_map(mut map: Map<String, Value>) -> Self {
        Self {
            presence: take_str(&mut map, "presence"),
            label: take_string(&mut map, "label"),
            description: take_str(&mut map, "description"),
        }
    }
}

fn take_str(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    take_string(map, key).filter(|s| !s.is_empty())
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Builders for assembling trees by hand (tests, synthetic input).
impl CompiledSchema {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: Some(kind.into()), ..Self::default() }
    }
    pub fn with_presence(mut self, presence: impl Into<String>) -> Self {
        self.flags.presence = Some(presence.into());
        self
    }
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.flags.label = Some(label.into());
        self
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.flags.description = Some(description.into());
        self
    }
    pub fn with_key(mut self, key: impl Into<String>, node: CompiledSchema) -> Self {
        self.keys.insert(key.into(), node);
        self
    }
    pub fn with_item(mut self, node: CompiledSchema) -> Self {
        self.items.push(node);
        self
    }
    pub fn with_allowed<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allow.extend(values.into_iter().map(Into::into));
        self
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ADAPTER
// ————————————————————————————————————————————————————————————————————————————

impl SchemaNode for CompiledSchema {
    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
    fn presence(&self) -> Option<&str> {
        self.flags.presence.as_deref()
    }
    fn label(&self) -> Option<&str> {
        self.flags.label.as_deref()
    }
    fn description(&self) -> Option<&str> {
        self.flags.description.as_deref()
    }
    fn properties(&self) -> Vec<(&str, &Self)> {
        self.keys.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
    fn array_item(&self) -> Option<&Self> {
        // only the first item rule names the element type
        self.items.first()
    }
    fn allowed_values(&self) -> Vec<Cow<'_, str>> {
        self.allow
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(Cow::Borrowed(s.as_str())),
                Value::Number(n) => Some(Cow::Owned(n.to_string())),
                Value::Bool(b) => Some(Cow::Owned(b.to_string())),
                Value::Null => Some(Cow::Borrowed("null")),
                // `{ "override": true }`, `{ "ref": … }`
                Value::Array(_) | Value::Object(_) => None,
            })
            .collect()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
