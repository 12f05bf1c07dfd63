//! Amount type for transaction values
//!
//! Amounts are plain `f64` values: callers hand in loosely typed input and the
//! ledger coerces it the way a JavaScript `Number(x)` call would. A value that
//! does not coerce becomes NaN and poisons every sum it enters, which is the
//! documented behavior under the default amount policy.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A numeric transaction amount (no currency, no rounding)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw number
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the underlying number
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is not-a-number
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Coerce a caller-supplied value to an amount
    ///
    /// `None` stands for an absent field and coerces to NaN.
    pub fn coerce(value: Option<&Value>) -> Self {
        match value {
            None => Self(f64::NAN),
            Some(v) => Self(coerce_value(v)),
        }
    }

    /// Format with a fixed number of decimal places
    pub fn format_fixed(&self, places: usize) -> String {
        if self.0.is_nan() {
            "NaN".to_string()
        } else if self.0.is_infinite() {
            let label = if self.0 > 0.0 { "Infinity" } else { "-Infinity" };
            label.to_string()
        } else {
            format!("{:.*}", places, self.0)
        }
    }
}

fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => coerce_str(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => match single {
                // A one-element array stringifies to its element; null becomes ""
                Value::Null => 0.0,
                Value::Array(_) | Value::Object(_) | Value::String(_) | Value::Number(_) => {
                    coerce_value(single)
                }
                Value::Bool(_) => f64::NAN,
            },
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// String to number conversion following ECMAScript `StringToNumber`
fn coerce_str(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }

    // Rust's float parser also accepts "inf" and "nan", which JS does not
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned digits in `radix`, accumulated as a float so long literals stay finite
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut value = 0.0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    value
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fixed(2))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + *a)
    }
}
