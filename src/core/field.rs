//! Field value types and their ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value read from an entity snapshot
///
/// Sorting compares these values rather than raw JSON so that entity types
/// can expose typed attributes (timestamps, UUIDs) through
/// [`Entity::field_value`](crate::core::entity::Entity::field_value).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Convert a JSON snapshot value
    ///
    /// Arrays and objects have no natural ordering and map to `Null`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => FieldValue::String(s.clone()),
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null),
            },
            Value::Null | Value::Array(_) | Value::Object(_) => FieldValue::Null,
        }
    }

    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Compare two values for sorting
    ///
    /// Strings compare case-insensitively, numbers numerically (integers and
    /// floats mix, compared exactly), the remaining kinds by their natural order. Values of
    /// different kinds order by kind so the result stays a total order.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => compare_floats(*a, *b),
            (FieldValue::Integer(a), FieldValue::Float(b)) => compare_integer_float(*a, *b),
            (FieldValue::Float(a), FieldValue::Integer(b)) => {
                compare_integer_float(*b, *a).reverse()
            }
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::String(_) => 3,
            FieldValue::Uuid(_) => 4,
            FieldValue::DateTime(_) => 5,
        }
    }
}

/// `-0.0 == 0.0`; NaN sorts above every number when positive, below when negative
fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Exact comparison of an integer against a float, no rounding through `f64`
fn compare_integer_float(int: i64, float: f64) -> Ordering {
    // 2^63, exactly representable
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= BOUND {
        return Ordering::Less;
    }
    if float < -BOUND {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        FieldValue::from_json(value)
    }
}
