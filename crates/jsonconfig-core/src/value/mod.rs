//! The closed set of values a configuration key can hold.
//!
//! JSON decoding only ever produces [`Value::String`], [`Value::Bool`],
//! [`Value::Float64`] and [`Value::Null`].  The remaining cases exist for
//! values injected programmatically through
//! [`ConfigStore::set_value`](crate::ConfigStore::set_value): integers of any
//! width, 32-bit floats, durations and timestamps.
//!
//! # Why a closed enum?
//!
//! Every typed getter on the store has to decide what to do with each kind of
//! value.  With an enum the compiler checks that every case is handled, so a
//! new case cannot silently fall through to "unsupported".

pub mod format;

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};

/// A point in time with a fixed UTC offset, as stored in [`Value::Timestamp`].
pub type Timestamp = DateTime<FixedOffset>;

/// A single configuration datum.
///
/// A missing section or key is *not* a `Value`: lookups return
/// `Option<Value>` and use `None` for "absent".  [`Value::Null`] is a present
/// key whose JSON value was `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text.
    String(String),
    /// `true` / `false`.
    Bool(bool),
    /// Any signed integer width, widened to 64 bits.
    Int(i64),
    /// Any unsigned integer width, widened to 64 bits.
    UInt(u64),
    /// A 32-bit float, kept at its original precision.
    Float32(f32),
    /// A 64-bit float.  Every JSON number decodes to this case.
    Float64(f64),
    /// A non-negative span of time.
    Duration(Duration),
    /// An instant with a UTC offset.
    Timestamp(Timestamp),
    /// JSON `null`, or a nested array/object that is not a scalar.
    Null,
}

impl Value {
    /// Short tag naming the case; `set_value` logs it as the `kind` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::Duration(_) => "duration",
            Value::Timestamp(_) => "timestamp",
            Value::Null => "null",
        }
    }

    /// Canonical string form of the value.
    ///
    /// This never fails: `Null` renders as an empty string.  See
    /// [`format`] for the exact float, duration and timestamp layouts.
    pub fn to_canonical_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::UInt(u) => u.to_string(),
            Value::Float32(f) => format::format_float(f64::from(*f)),
            Value::Float64(f) => format::format_float(*f),
            Value::Duration(d) => format::format_duration(*d),
            Value::Timestamp(t) => format::format_timestamp(t),
            Value::Null => String::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

// ── Conversions into Value ────────────────────────────────────────────────────

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(i64::from(v))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(u64::from(v))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Value::Duration(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v.fixed_offset())
    }
}

/// JSON scalars map onto the decoded cases; every number becomes `Float64`.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Float64),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Value::Null,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
