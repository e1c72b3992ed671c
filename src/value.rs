// src/value.rs
//! Dynamic values produced by the generator.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::types::TypeId;

/// A generated value. Absent values are represented by `Option<Value>` at
/// the use site, never by a variant here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Byte(u8),
    I16(i16),
    Char(char),
    Str(String),
    List(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::Bool(_) => "bool",
            Value::Byte(_) => "byte",
            Value::I16(_) => "i16",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::I32(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of any float or integer variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(v) => Some(*v),
            Value::F32(v) => Some(f64::from(*v)),
            Value::I32(v) => Some(f64::from(*v)),
            Value::I16(v) => Some(f64::from(*v)),
            Value::Byte(v) => Some(f64::from(*v)),
            Value::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v:.3}"),
            Value::F64(v) => write!(f, "{v:.3}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::Char(c) => write!(f, "'{c}'"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write!(f, "{obj}"),
        }
    }
}

/// An instance of a catalog class: its type plus named fields in
/// constructor order.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub ty: TypeId,
    pub type_name: String,
    fields: Vec<(String, Option<Value>)>,
}

impl Object {
    pub fn new(ty: TypeId, type_name: impl Into<String>) -> Self {
        Self {
            ty,
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, name: impl Into<String>, value: Option<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing an existing one with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: Option<Value>) {
        let name = name.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Value of a present field. `None` both for unknown and absent fields;
    /// use [`has_field`](Object::has_field) to tell them apart.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    /// True when the field exists but holds no value.
    pub fn is_absent(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, v)| n == name && v.is_none())
    }

    /// Nested object held in a field.
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.field(name).and_then(Value::as_object)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_name)?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            match value {
                Some(v) => write!(f, "{sep}{name}: {v}")?,
                None => write!(f, "{sep}{name}: null")?,
            }
        }
        if self.fields.is_empty() {
            write!(f, "}}")
        } else {
            write!(f, " }}")
        }
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("$type", &self.type_name)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
