//! Parameters: values deferred to bind time instead of inlined as text.
//!
//! A parameter reachable from a built tree appears in the final table
//! exactly once under its assigned key. Two parameter instances wrapping
//! equal values are independent bindings; memoization is per instance,
//! never by value.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, TimeZone};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::CypherBuilderError;

/// Instance identity of a parameter, used for per-instance memoization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(Uuid);

impl ParamId {
    fn new() -> Self {
        ParamId(Uuid::new_v4())
    }
}

/// A value bound at execution time, or one of the two inline variants.
#[derive(Debug, Clone)]
pub enum Parameter {
    /// Binding under a caller-requested key.
    Named {
        id: ParamId,
        name: String,
        value: Value,
    },
    /// Binding under an auto-generated `{prefix}param{n}` key.
    Anonymous { id: ParamId, value: Value },
    /// Renders the literal `NULL`, contributes no binding.
    Null,
    /// Inlines the value as Cypher literal text instead of binding it.
    Literal { value: Value },
}

impl Parameter {
    /// Anonymous parameter; key assigned during rendering.
    pub fn new(value: impl Into<Value>) -> Self {
        Parameter::Anonymous {
            id: ParamId::new(),
            value: value.into(),
        }
    }

    /// Parameter with a caller-requested key. The first instance gets
    /// the key verbatim; later distinct instances requesting the same
    /// key are suffixed.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Parameter::Named {
            id: ParamId::new(),
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn null() -> Self {
        Parameter::Null
    }

    /// Embed the value as literal query text. Only for values the caller
    /// fully controls; anything user-supplied belongs in a binding.
    pub fn literal(value: impl Into<Value>) -> Self {
        Parameter::Literal {
            value: value.into(),
        }
    }

    /// Convert a host value into a parameter node. JSON null becomes the
    /// null singleton; nested maps and lists stay inside one binding.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Parameter::Null,
            other => Parameter::new(other),
        }
    }

    /// The wrapped value. `None` only for the null singleton.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Parameter::Named { value, .. }
            | Parameter::Anonymous { value, .. }
            | Parameter::Literal { value } => Some(value),
            Parameter::Null => None,
        }
    }
}

/// Convert a host-language map into `(key, parameter)` pairs, one per
/// top-level entry, preserving entry order.
pub fn to_cypher_params(map: Map<String, Value>) -> Vec<(String, Parameter)> {
    map.into_iter()
        .map(|(key, value)| (key, Parameter::from_value(value)))
        .collect()
}

impl From<Value> for Parameter {
    fn from(value: Value) -> Self {
        Parameter::from_value(value)
    }
}

impl From<&str> for Parameter {
    fn from(value: &str) -> Self {
        Parameter::new(value)
    }
}

impl From<String> for Parameter {
    fn from(value: String) -> Self {
        Parameter::new(value)
    }
}

impl From<i64> for Parameter {
    fn from(value: i64) -> Self {
        Parameter::new(value)
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::new(value)
    }
}

impl From<bool> for Parameter {
    fn from(value: bool) -> Self {
        Parameter::new(value)
    }
}

impl From<Vec<Value>> for Parameter {
    fn from(value: Vec<Value>) -> Self {
        Parameter::new(Value::Array(value))
    }
}

impl From<Map<String, Value>> for Parameter {
    fn from(value: Map<String, Value>) -> Self {
        Parameter::new(Value::Object(value))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Parameter
where
    Tz::Offset: fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        Parameter::new(Value::String(value.to_rfc3339()))
    }
}

/// Parameter accumulator for one build invocation.
///
/// Keys auto-generated for anonymous parameters carry the build prefix,
/// which is how an outer caller concatenating several independently
/// built statements avoids key collisions between them.
#[derive(Debug)]
pub struct ParameterTable {
    prefix: String,
    counter: usize,
    assigned: HashMap<ParamId, String>,
    entries: Map<String, Value>,
}

impl ParameterTable {
    pub fn new(prefix: &str) -> Self {
        ParameterTable {
            prefix: prefix.to_string(),
            counter: 0,
            assigned: HashMap::new(),
            entries: Map::new(),
        }
    }

    /// Resolve the binding key for a parameter, registering its value on
    /// first encounter. Inline variants (`Null`, `Literal`) have no key.
    pub fn key_for(&mut self, param: &Parameter) -> Option<String> {
        let (id, name, value) = match param {
            Parameter::Named { id, name, value } => (*id, Some(name.as_str()), value),
            Parameter::Anonymous { id, value } => (*id, None, value),
            Parameter::Null | Parameter::Literal { .. } => return None,
        };
        if let Some(key) = self.assigned.get(&id) {
            return Some(key.clone());
        }
        let key = match name {
            Some(requested) => self.allocate_named(requested),
            None => self.allocate_auto(),
        };
        self.entries.insert(key.clone(), value.clone());
        self.assigned.insert(id, key.clone());
        Some(key)
    }

    /// Merge a raw-fragment binding verbatim. Rebinding an existing key
    /// to a different value is a conflict; an equal value is idempotent.
    pub fn merge_raw(&mut self, key: &str, value: Value) -> Result<(), CypherBuilderError> {
        if let Some(existing) = self.entries.get(key) {
            if *existing != value {
                return Err(CypherBuilderError::ConflictingParameter(key.to_string()));
            }
            return Ok(());
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    pub fn into_entries(self) -> Map<String, Value> {
        self.entries
    }

    fn allocate_named(&mut self, requested: &str) -> String {
        if !self.entries.contains_key(requested) {
            return requested.to_string();
        }
        let mut suffix = 0usize;
        loop {
            let candidate = format!("{}{}", requested, suffix);
            if !self.entries.contains_key(&candidate) {
                break candidate;
            }
            suffix += 1;
        }
    }

    fn allocate_auto(&mut self) -> String {
        loop {
            let candidate = format!("{}param{}", self.prefix, self.counter);
            self.counter += 1;
            if !self.entries.contains_key(&candidate) {
                break candidate;
            }
        }
    }
}
