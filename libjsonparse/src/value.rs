//! JSON value representation.

use indexmap::IndexMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::fmt;
use std::mem;

/// Object members in insertion order.
pub type Map = IndexMap<String, Value>;

/// A parsed JSON value.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Whole number, including any numeral whose value has no fractional part.
    Integer(BigInt),
    /// 64-bit floating-point number with a fractional part (or non-finite).
    Float(f64),
    /// Decoded string.
    String(String),
    /// Array of values.
    Array(Vec<Value>),
    /// Object with members in document order.
    Object(Map),
}

impl Value {
    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns a reference to the integer if this is an `Integer`.
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the integer as `i64` if it is an `Integer` that fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(ToPrimitive::to_i64)
    }

    /// Returns the float value if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns any number as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => n.to_f64(),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the array if this is an `Array`.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns a reference to the object if this is an `Object`.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Short name of the value's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

// Children are moved onto a heap worklist so that dropping a deeply nested
// tree never recurses.
impl Drop for Value {
    fn drop(&mut self) {
        let mut pending: Vec<Value> = match self {
            Value::Array(items) if !items.is_empty() => mem::take(items),
            Value::Object(members) if !members.is_empty() => {
                members.drain(..).map(|(_, v)| v).collect()
            }
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            match &mut value {
                Value::Array(items) => pending.append(items),
                Value::Object(members) => pending.extend(members.drain(..).map(|(_, v)| v)),
                _ => {}
            }
        }
    }
}

// Rendered with an explicit stack of open containers so that printing a
// deeply nested tree never recurses.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<Open<'_>> = Vec::new();
        let mut next = Some(self);
        loop {
            if let Some(value) = next.take() {
                match value {
                    Value::Array(items) => {
                        f.write_str("[")?;
                        stack.push(Open::new(Entries::Array(items.iter())));
                    }
                    Value::Object(members) => {
                        f.write_str("{")?;
                        stack.push(Open::new(Entries::Object(members.iter())));
                    }
                    scalar => write_scalar(scalar, f)?,
                }
            }

            let Some(open) = stack.last_mut() else {
                return Ok(());
            };
            let entry = match &mut open.entries {
                Entries::Array(items) => items.next().map(|v| (None, v)),
                Entries::Object(members) => members.next().map(|(k, v)| (Some(k), v)),
            };
            match entry {
                Some((key, value)) => {
                    if !open.first {
                        f.write_str(", ")?;
                    }
                    open.first = false;
                    if let Some(key) = key {
                        write!(f, "{:?}: ", key)?;
                    }
                    next = Some(value);
                }
                None => {
                    f.write_str(open.entries.close())?;
                    stack.pop();
                }
            }
        }
    }
}

/// A container being rendered.
struct Open<'a> {
    entries: Entries<'a>,
    first: bool,
}

impl<'a> Open<'a> {
    fn new(entries: Entries<'a>) -> Self {
        Open {
            entries,
            first: true,
        }
    }
}

enum Entries<'a> {
    Array(std::slice::Iter<'a, Value>),
    Object(indexmap::map::Iter<'a, String, Value>),
}

impl Entries<'_> {
    fn close(&self) -> &'static str {
        match self {
            Entries::Array(_) => "]",
            Entries::Object(_) => "}",
        }
    }
}

fn write_scalar(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Integer(n) => write!(f, "{}", n),
        Value::Float(n) if n.is_nan() => write!(f, "NaN"),
        Value::Float(n) if n.is_infinite() => {
            write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
        }
        Value::Float(n) => write!(f, "{}", n),
        Value::String(s) => write!(f, "{:?}", s),
        Value::Array(_) | Value::Object(_) => Ok(()),
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Integer(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Map> for Value {
    fn from(obj: Map) -> Self {
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_rendering() {
        let mut obj = Map::new();
        obj.insert("b".to_string(), Value::from(vec![Value::Null, Value::from(true)]));
        obj.insert("a".to_string(), Value::from(1.5));
        let value = Value::from(obj);
        assert_eq!(format!("{:?}", value), r#"{"b": [null, true], "a": 1.5}"#);
    }

    #[test]
    fn test_debug_rendering_empty_and_nested() {
        let mut inner = Map::new();
        inner.insert("k".to_string(), Value::from(Vec::new()));
        let value = Value::from(vec![
            Value::from(Map::new()),
            Value::from(inner),
            Value::from("s"),
            Value::from(f64::NEG_INFINITY),
        ]);
        assert_eq!(format!("{:?}", value), r#"[{}, {"k": []}, "s", -Infinity]"#);
    }

    #[test]
    fn test_debug_deep_tree() {
        let depth = 200_000;
        let mut value = Value::from(1i64);
        for _ in 0..depth {
            value = Value::Array(vec![value]);
        }
        let rendered = format!("{:?}", value);
        assert_eq!(rendered, format!("{}1{}", "[".repeat(depth), "]".repeat(depth)));
    }

    #[test]
    fn test_accessors() {
        let n = Value::from(42i64);
        assert_eq!(n.as_i64(), Some(42));
        assert_eq!(n.as_f64(), Some(42.0));
        assert_eq!(n.as_float(), None);
        assert_eq!(n.kind(), "number");
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_drop_deep_tree() {
        let mut value = Value::Array(vec![]);
        for _ in 0..200_000 {
            value = Value::Array(vec![value]);
        }
        drop(value);
    }
}
