use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Bit pattern every `NaN` is folded into before comparing or hashing
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

/// An `f64` that compares and hashes by identity rather than by IEEE 754 equality.
///
/// Two numbers are the same if they have the same bit pattern, except that all
/// `NaN` payloads are treated as one value. This makes `NaN` usable as a key and
/// keeps `+0.0` and `-0.0` apart.
#[derive(Clone, Copy)]
pub struct Number(f64);

impl Number {
    /// Wrap a raw `f64`
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the wrapped `f64`
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Check if this number is any `NaN`
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Check if this number is exactly `-0.0`
    #[must_use]
    pub fn is_negative_zero(self) -> bool {
        self.0.to_bits() == (-0.0_f64).to_bits()
    }

    /// The bits used for identity comparison
    fn identity_bits(self) -> u64 {
        if self.0.is_nan() {
            CANONICAL_NAN_BITS
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.identity_bits() == other.identity_bits()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.identity_bits());
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

/// Serialized as a plain `f64`. Formats without non-finite floats (JSON) can
/// not read `NaN` or the infinities back.
#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Number {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self)
    }
}
