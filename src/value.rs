//! Entry types accepted by a probability table.
//!
//! Strongly typed tables (`(i64, f64)` pairs and the like) are numeric by
//! construction, apart from a NaN outcome. [`Value`] covers tables that come from a
//! loosely typed source, where an entry may turn out to be text.

/// Something a sampler can return.
pub trait Outcome: Clone {
    fn is_numeric(&self) -> bool;
}

/// Something that can stand in for a probability.
pub trait Probability {
    /// Machine epsilon of the type the probability is written in, used as the
    /// floor of the sum check.
    const EPSILON: f64 = f64::EPSILON;

    /// `None` if the entry is not numeric. NaN is numeric here and is
    /// rejected by the range check instead.
    fn probability(&self) -> Option<f64>;
}

macro_rules! integer_outcome {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Outcome for $ty {
                #[inline]
                fn is_numeric(&self) -> bool {
                    true
                }
            }
        )*
    };
}

integer_outcome!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Outcome for f32 {
    #[inline]
    fn is_numeric(&self) -> bool {
        !self.is_nan()
    }
}

impl Outcome for f64 {
    #[inline]
    fn is_numeric(&self) -> bool {
        !self.is_nan()
    }
}

impl Probability for f32 {
    const EPSILON: f64 = f32::EPSILON as f64;

    #[inline]
    fn probability(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl Probability for f64 {
    #[inline]
    fn probability(&self) -> Option<f64> {
        Some(*self)
    }
}

/// Integers and floats compare by numeric value, so `Int(1) == Float(1.0)`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(int) => Some(*int as f64),
            Value::Float(float) => Some(*float).filter(|float| !float.is_nan()),
            Value::Text(_) => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(int), Value::Float(float)) | (Value::Float(float), Value::Int(int)) => {
                *int as f64 == *float
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Outcome for Value {
    #[inline]
    fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }
}

impl Probability for Value {
    #[inline]
    fn probability(&self) -> Option<f64> {
        match self {
            Value::Int(int) => Some(*int as f64),
            Value::Float(float) => Some(*float),
            Value::Text(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Int(int)
    }
}

impl From<i32> for Value {
    fn from(int: i32) -> Self {
        Value::Int(int.into())
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Value::Float(float)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}
