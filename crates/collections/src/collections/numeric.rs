//! Validated numeric arguments: [`Capacity`] and [`Priority`].
//!
//! Queue constructors and priority insertion accept loosely typed numbers
//! (plain integers, floats, or values lifted out of a JSON/TOML document) and
//! funnel them through [`IntoCapacity`] / [`IntoPriority`]. The conversion is
//! where the type-versus-range split is decided:
//!
//! | Input | Capacity | Priority |
//! |-------|----------|----------|
//! | not a number | type error | type error |
//! | NaN | range error | type error |
//! | non-integer float | range error | type error |
//! | negative | range error | range error |
//! | zero | accepted | range error |
//!
//! Nothing is clamped or rounded: an input either converts exactly or fails.

use std::fmt;
use std::num::NonZeroU64;

use crate::error::{Argument, QueueError, QueueResult};

/// Smallest `f64` past the `u64` range; anything below it converts to `u64`
/// exactly once it is known to be integral.
const F64_U64_LIMIT: f64 = 18_446_744_073_709_551_616.0; // 2^64

/// Maximum number of elements a queue may hold.
///
/// Every `usize` is a valid capacity, including zero (a queue that rejects
/// every insertion).
///
/// ```
/// use boundq_collections::collections::{Capacity, IntoCapacity};
///
/// assert_eq!(Capacity::default().get(), 10_000);
/// assert_eq!(16_i64.into_capacity().unwrap().get(), 16);
/// assert!((-1_i64).into_capacity().is_err());
/// assert!(2.5_f64.into_capacity().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "serde_json::Value", into = "usize")
)]
pub struct Capacity(usize);

impl Capacity {
    /// Capacity used when none is specified.
    pub const DEFAULT: Self = Self(10_000);

    /// Wraps an already valid capacity.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self(capacity)
    }

    /// Returns the raw element limit.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    fn from_f64(value: f64) -> QueueResult<Self> {
        if value.is_nan() {
            return Err(QueueError::out_of_range(Argument::Capacity, "must not be NaN"));
        }
        if value < 0.0 {
            return Err(QueueError::out_of_range(
                Argument::Capacity,
                format!("must not be negative, got {value}"),
            ));
        }
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(QueueError::out_of_range(
                Argument::Capacity,
                format!("must be an integer, got {value}"),
            ));
        }
        if value >= F64_U64_LIMIT {
            return Err(too_large_capacity(value));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = value as u64;
        whole.into_capacity()
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<usize> for Capacity {
    fn from(capacity: usize) -> Self {
        Self(capacity)
    }
}

impl From<Capacity> for usize {
    fn from(capacity: Capacity) -> Self {
        capacity.0
    }
}

impl TryFrom<serde_json::Value> for Capacity {
    type Error = QueueError;

    fn try_from(value: serde_json::Value) -> QueueResult<Self> {
        (&value).into_capacity()
    }
}

fn too_large_capacity(value: impl fmt::Display) -> QueueError {
    QueueError::out_of_range(
        Argument::Capacity,
        format!("must not exceed {}, got {value}", usize::MAX),
    )
}

/// Conversion of a loosely typed number into a [`Capacity`].
pub trait IntoCapacity {
    /// Validates `self` as a queue capacity.
    ///
    /// # Errors
    ///
    /// [`QueueError::InvalidType`] when the input is not a number;
    /// [`QueueError::OutOfRange`] when it is NaN, negative, fractional or too
    /// large for `usize`.
    fn into_capacity(self) -> QueueResult<Capacity>;
}

impl IntoCapacity for Capacity {
    fn into_capacity(self) -> QueueResult<Capacity> {
        Ok(self)
    }
}

impl IntoCapacity for usize {
    fn into_capacity(self) -> QueueResult<Capacity> {
        Ok(Capacity(self))
    }
}

impl IntoCapacity for u32 {
    fn into_capacity(self) -> QueueResult<Capacity> {
        u64::from(self).into_capacity()
    }
}

impl IntoCapacity for u64 {
    fn into_capacity(self) -> QueueResult<Capacity> {
        usize::try_from(self).map(Capacity).map_err(|_| too_large_capacity(self))
    }
}

impl IntoCapacity for i32 {
    fn into_capacity(self) -> QueueResult<Capacity> {
        i64::from(self).into_capacity()
    }
}

impl IntoCapacity for i64 {
    fn into_capacity(self) -> QueueResult<Capacity> {
        match u64::try_from(self) {
            Ok(value) => value.into_capacity(),
            Err(_) => Err(QueueError::out_of_range(
                Argument::Capacity,
                format!("must not be negative, got {self}"),
            )),
        }
    }
}

impl IntoCapacity for f64 {
    fn into_capacity(self) -> QueueResult<Capacity> {
        Capacity::from_f64(self)
    }
}

impl IntoCapacity for &serde_json::Value {
    fn into_capacity(self) -> QueueResult<Capacity> {
        match self {
            serde_json::Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    value.into_capacity()
                } else if let Some(value) = number.as_i64() {
                    value.into_capacity()
                } else {
                    number.as_f64().unwrap_or(f64::NAN).into_capacity()
                }
            }
            other => Err(QueueError::invalid_type(Argument::Capacity, other)),
        }
    }
}

impl IntoCapacity for &toml::Value {
    fn into_capacity(self) -> QueueResult<Capacity> {
        match self {
            toml::Value::Integer(value) => (*value).into_capacity(),
            toml::Value::Float(value) => (*value).into_capacity(),
            other => Err(QueueError::invalid_type(Argument::Capacity, describe_toml(other))),
        }
    }
}

/// Strictly positive priority of a [`PriorityItem`](super::PriorityItem).
///
/// Larger values are served first.
///
/// ```
/// use boundq_collections::collections::{IntoPriority, Priority};
/// use boundq_collections::error::ErrorKind;
///
/// assert_eq!(Priority::default().get(), 1);
/// assert_eq!(5_i32.into_priority().unwrap().get(), 5);
/// assert_eq!(0_i32.into_priority().unwrap_err().kind(), ErrorKind::RangeConstraint);
/// assert_eq!(1.5_f64.into_priority().unwrap_err().kind(), ErrorKind::TypeConstraint);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "serde_json::Value", into = "u64")
)]
pub struct Priority(NonZeroU64);

impl Priority {
    /// Priority assigned when none is specified.
    pub const DEFAULT: Self = Self(NonZeroU64::MIN);

    /// Wraps an already valid priority.
    #[must_use]
    pub const fn new(priority: NonZeroU64) -> Self {
        Self(priority)
    }

    /// Returns the raw priority value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    fn from_f64(value: f64) -> QueueResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(QueueError::invalid_type(Argument::Priority, value));
        }
        if value <= 0.0 {
            return Err(non_positive_priority(value));
        }
        if value >= F64_U64_LIMIT {
            return Err(too_large_priority(value));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = value as u64;
        whole.into_priority()
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<NonZeroU64> for Priority {
    fn from(priority: NonZeroU64) -> Self {
        Self(priority)
    }
}

impl From<Priority> for u64 {
    fn from(priority: Priority) -> Self {
        priority.get()
    }
}

impl TryFrom<serde_json::Value> for Priority {
    type Error = QueueError;

    fn try_from(value: serde_json::Value) -> QueueResult<Self> {
        (&value).into_priority()
    }
}

fn non_positive_priority(value: impl fmt::Display) -> QueueError {
    QueueError::out_of_range(Argument::Priority, format!("must be greater than 0, got {value}"))
}

fn too_large_priority(value: impl fmt::Display) -> QueueError {
    QueueError::out_of_range(Argument::Priority, format!("must not exceed {}, got {value}", u64::MAX))
}

/// Conversion of a loosely typed number into a [`Priority`].
pub trait IntoPriority {
    /// Validates `self` as an element priority.
    ///
    /// # Errors
    ///
    /// [`QueueError::InvalidType`] when the input is not an integer number;
    /// [`QueueError::OutOfRange`] when it is zero, negative or above
    /// `u64::MAX`.
    fn into_priority(self) -> QueueResult<Priority>;
}

impl IntoPriority for Priority {
    fn into_priority(self) -> QueueResult<Priority> {
        Ok(self)
    }
}

impl IntoPriority for NonZeroU64 {
    fn into_priority(self) -> QueueResult<Priority> {
        Ok(Priority(self))
    }
}

impl IntoPriority for u32 {
    fn into_priority(self) -> QueueResult<Priority> {
        u64::from(self).into_priority()
    }
}

impl IntoPriority for u64 {
    fn into_priority(self) -> QueueResult<Priority> {
        NonZeroU64::new(self).map(Priority).ok_or_else(|| non_positive_priority(self))
    }
}

impl IntoPriority for usize {
    fn into_priority(self) -> QueueResult<Priority> {
        u64::try_from(self).map_err(|_| too_large_priority(self))?.into_priority()
    }
}

impl IntoPriority for i32 {
    fn into_priority(self) -> QueueResult<Priority> {
        i64::from(self).into_priority()
    }
}

impl IntoPriority for i64 {
    fn into_priority(self) -> QueueResult<Priority> {
        u64::try_from(self).map_err(|_| non_positive_priority(self))?.into_priority()
    }
}

impl IntoPriority for f64 {
    fn into_priority(self) -> QueueResult<Priority> {
        Priority::from_f64(self)
    }
}

impl IntoPriority for &serde_json::Value {
    fn into_priority(self) -> QueueResult<Priority> {
        match self {
            serde_json::Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    value.into_priority()
                } else if let Some(value) = number.as_u64() {
                    value.into_priority()
                } else {
                    number.as_f64().unwrap_or(f64::NAN).into_priority()
                }
            }
            other => Err(QueueError::invalid_type(Argument::Priority, other)),
        }
    }
}

impl IntoPriority for &toml::Value {
    fn into_priority(self) -> QueueResult<Priority> {
        match self {
            toml::Value::Integer(value) => (*value).into_priority(),
            toml::Value::Float(value) => (*value).into_priority(),
            other => Err(QueueError::invalid_type(Argument::Priority, describe_toml(other))),
        }
    }
}

// `toml::Value`'s Display renders a whole document for tables, so only the
// scalar forms are echoed back.
fn describe_toml(value: &toml::Value) -> String {
    match value {
        toml::Value::Table(_) => "a table".to_owned(),
        toml::Value::Array(_) => "an array".to_owned(),
        scalar => scalar.to_string(),
    }
}
