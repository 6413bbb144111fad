//! The normalized value model the diff engine operates on.
//!
//! Arbitrary Rust values are lowered into this closed set of variants
//! by the adapter layer (see [`crate::adapt`] and [`crate::json`]).
//! The engine itself never inspects host types, only these variants.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use time::OffsetDateTime;

/// One field of a [`Value::Record`].
///
/// `private` marks fields the comparator skips unless explicitly told
/// to visit them, mirroring non-exported struct fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub private: bool,
    pub value: Value,
}

impl Field {
    /// A visible (exported) field.
    pub fn new(name: impl Into<String>, value: Value) -> Field {
        Field {
            name: name.into(),
            private: false,
            value,
        }
    }

    /// A private field, skipped by default during comparison.
    pub fn private(name: impl Into<String>, value: Value) -> Field {
        Field {
            name: name.into(),
            private: true,
            value,
        }
    }
}

/// A value normalized for structural comparison.
///
/// `Map`, `List`, and `Pointer` wrap `Option` so that the nil
/// container / nil pointer states survive normalization; the engine
/// reports them asymmetrically rather than descending.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    /// Compared through fixed-point rendering at the configured
    /// precision, not by raw bit equality.
    Float(f64),
    /// Compared by `Decimal` equality: 1.0 == 1.00.
    Decimal(Decimal),
    Text(String),
    /// Compared by instant: 09:00+01:00 == 08:00 UTC.
    Timestamp(OffsetDateTime),
    Record {
        type_name: String,
        fields: Vec<Field>,
    },
    Map(Option<BTreeMap<String, Value>>),
    List(Option<Vec<Value>>),
    Pointer(Option<Box<Value>>),
    /// A host-type shape with no comparison rule (function, channel,
    /// raw pointer). Always judged equal; diagnostic only.
    Unsupported(String),
}

impl Value {
    /// A record with a named type and declaration-ordered fields.
    pub fn record(type_name: impl Into<String>, fields: Vec<Field>) -> Value {
        Value::Record {
            type_name: type_name.into(),
            fields,
        }
    }

    /// A present map from rendered keys to values.
    pub fn map<I>(entries: I) -> Value
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Value::Map(Some(entries.into_iter().collect()))
    }

    /// The nil-map state (distinct from an empty map).
    pub fn nil_map() -> Value {
        Value::Map(None)
    }

    /// A present list.
    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(Some(items.into_iter().collect()))
    }

    /// The nil-list state (distinct from an empty list).
    pub fn nil_list() -> Value {
        Value::List(None)
    }

    /// A present pointer to `inner`.
    pub fn pointer(inner: Value) -> Value {
        Value::Pointer(Some(Box::new(inner)))
    }

    /// The nil pointer / absent state.
    pub fn null() -> Value {
        Value::Pointer(None)
    }

    /// A leaf the engine has no rule for, labeled by host kind.
    pub fn unsupported(kind: impl Into<String>) -> Value {
        Value::Unsupported(kind.into())
    }

    /// Returns the variant name, used in type labels and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Uint(_) => "Uint",
            Value::Float(_) => "Float",
            Value::Decimal(_) => "Decimal",
            Value::Text(_) => "Text",
            Value::Timestamp(_) => "Timestamp",
            Value::Record { .. } => "Record",
            Value::Map(_) => "Map",
            Value::List(_) => "List",
            Value::Pointer(_) => "Pointer",
            Value::Unsupported(_) => "Unsupported",
        }
    }

    /// The dynamic-type label rendered in type-mismatch diffs.
    ///
    /// Records are labeled by their declared type name; pointers by
    /// `*` plus the pointee's label.
    pub fn type_label(&self) -> String {
        match self {
            Value::Record { type_name, .. } => type_name.clone(),
            Value::Pointer(Some(inner)) => format!("*{}", inner.type_label()),
            Value::Pointer(None) => "*nil".to_string(),
            Value::Unsupported(kind) => format!("Unsupported({})", kind),
            other => other.kind().to_string(),
        }
    }

    /// Whether two values are of the same dynamic type.
    ///
    /// Variant identity, except records which must also agree on the
    /// declared type name and unsupported leaves which must agree on
    /// the kind label. Pointers match regardless of pointee; the
    /// engine re-checks after unwrapping.
    pub fn same_type(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Record { type_name: a, .. }, Value::Record { type_name: b, .. }) => a == b,
            (Value::Unsupported(a), Value::Unsupported(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl fmt::Display for Value {
    /// Default value-to-text rendering used in difference strings.
    /// Text prints bare (no quotes); absent states print `<nil>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Text(s) => write!(f, "{}", s),
            Value::Timestamp(t) => write!(f, "{}", t),
            Value::Record { type_name, fields } => {
                write!(f, "{}{{", type_name)?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                write!(f, "}}")
            }
            Value::Map(Some(entries)) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::List(Some(items)) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Pointer(Some(inner)) => write!(f, "{}", inner),
            Value::Map(None) | Value::List(None) | Value::Pointer(None) => write!(f, "<nil>"),
            Value::Unsupported(kind) => write!(f, "<{}>", kind),
        }
    }
}
