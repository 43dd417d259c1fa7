//! Error types for queue construction, insertion and configuration.
//!
//! Every failure in this crate is raised synchronously at the call that
//! violates a precondition and falls into one of two kinds:
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`ErrorKind::TypeConstraint`] | a capacity or priority is not a number at all, or a priority is not an integer |
//! | [`ErrorKind::RangeConstraint`] | a number lies outside its legal domain, or a full queue receives another element |
//!
//! Querying an empty queue is not an error: `dequeue` and `front` return
//! `None`.
//!
//! Errors also implement [`ErrorClassification`] so callers can route them
//! through the same retry and alerting decisions they use elsewhere.

use std::fmt;

use thiserror::Error;

/// Standard result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// The numeric argument a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    /// Maximum number of elements a queue may hold.
    Capacity,
    /// Priority attached to an element of a priority queue.
    Priority,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capacity => f.write_str("capacity"),
            Self::Priority => f.write_str("priority"),
        }
    }
}

/// Coarse classification of a [`QueueError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument had the wrong shape (not a number, or not an integer
    /// where one is required).
    TypeConstraint,
    /// The argument was numeric but outside the legal domain, or the queue
    /// had no room left.
    RangeConstraint,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeConstraint => f.write_str("type constraint violation"),
            Self::RangeConstraint => f.write_str("range constraint violation"),
        }
    }
}

/// Queue operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The argument is not a number, or not an integer where one is required.
    #[error("{argument} must be an integer number, got {found}")]
    InvalidType {
        /// Which argument was rejected.
        argument: Argument,
        /// Rendering of the rejected input.
        found: String,
    },

    /// The argument is numeric but outside its legal domain.
    #[error("{argument} is out of range: {reason}")]
    OutOfRange {
        /// Which argument was rejected.
        argument: Argument,
        /// Human readable constraint that was violated.
        reason: String,
    },

    /// The queue already holds `capacity` elements.
    #[error("capacity exceeded: queue is limited to {capacity} elements")]
    CapacityExceeded {
        /// Capacity of the queue that rejected the element.
        capacity: usize,
    },
}

impl QueueError {
    pub(crate) fn invalid_type(argument: Argument, found: impl fmt::Display) -> Self {
        Self::InvalidType { argument, found: found.to_string() }
    }

    pub(crate) fn out_of_range(argument: Argument, reason: impl Into<String>) -> Self {
        Self::OutOfRange { argument, reason: reason.into() }
    }

    /// Returns the [`ErrorKind`] this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::TypeConstraint,
            Self::OutOfRange { .. } | Self::CapacityExceeded { .. } => ErrorKind::RangeConstraint,
        }
    }

    /// Returns the argument that failed validation, if any.
    #[must_use]
    pub fn argument(&self) -> Option<Argument> {
        match self {
            Self::InvalidType { argument, .. } | Self::OutOfRange { argument, .. } => {
                Some(*argument)
            }
            Self::CapacityExceeded { .. } => None,
        }
    }
}

/// Errors raised while loading a [`QueueConfig`](crate::config::QueueConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The document could not be parsed.
    #[error("failed to parse {format} queue configuration: {message}")]
    Parse {
        /// Document format (`TOML` or `JSON`).
        format: &'static str,
        /// Parser diagnostic.
        message: String,
    },

    /// The document names a field the configuration does not have.
    #[error("unknown queue configuration field `{0}`")]
    UnknownField(String),

    /// A field parsed but its value is not acceptable.
    #[error(transparent)]
    Invalid(#[from] QueueError),
}

impl ConfigError {
    pub(crate) fn parse(format: &'static str, message: impl fmt::Display) -> Self {
        Self::Parse { format, message: message.to_string() }
    }

    /// Returns the [`ErrorKind`] of the underlying validation error, if the
    /// document parsed successfully.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Parse { .. } | Self::UnknownField(_) => None,
            Self::Invalid(err) => Some(err.kind()),
        }
    }
}

/// A standard interface for classifying errors by their characteristics.
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Retrying only makes sense when the condition can clear without the
    /// caller changing its input, such as a full queue being drained.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool {
        self.severity() >= ErrorSeverity::Critical
    }
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl ErrorClassification for QueueError {
    fn is_retryable(&self) -> bool {
        // Might have space after the consumer dequeues.
        matches!(self, Self::CapacityExceeded { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CapacityExceeded { .. } => ErrorSeverity::Warning,
            Self::InvalidType { .. } | Self::OutOfRange { .. } => ErrorSeverity::Error,
        }
    }
}

impl ErrorClassification for ConfigError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for error classification and formatting.
    use super::*;

    /// Validates `QueueError::kind` behavior for the kind mapping scenario.
    ///
    /// Assertions:
    /// - Confirms invalid type errors map to `ErrorKind::TypeConstraint`.
    /// - Confirms out of range and capacity errors map to
    ///   `ErrorKind::RangeConstraint`.
    #[test]
    fn kind_mapping() {
        assert_eq!(
            QueueError::invalid_type(Argument::Priority, 1.5).kind(),
            ErrorKind::TypeConstraint
        );
        assert_eq!(
            QueueError::out_of_range(Argument::Capacity, "must not be negative").kind(),
            ErrorKind::RangeConstraint
        );
        assert_eq!(
            QueueError::CapacityExceeded { capacity: 3 }.kind(),
            ErrorKind::RangeConstraint
        );
    }

    /// Validates `QueueError` display formatting.
    ///
    /// Assertions:
    /// - Confirms the capacity message mentions "capacity exceeded".
    /// - Confirms the type message names the argument and the input.
    #[test]
    fn display_messages() {
        let full = QueueError::CapacityExceeded { capacity: 2 };
        assert_eq!(full.to_string(), "capacity exceeded: queue is limited to 2 elements");

        let bad = QueueError::invalid_type(Argument::Priority, "\"high\"");
        assert_eq!(bad.to_string(), "priority must be an integer number, got \"high\"");
        assert_eq!(bad.argument(), Some(Argument::Priority));
        assert_eq!(full.argument(), None);
    }

    /// Validates `ErrorClassification` for queue errors.
    ///
    /// Assertions:
    /// - Ensures only capacity overflow is retryable.
    /// - Confirms severities and that nothing is critical.
    #[test]
    fn classification() {
        let full = QueueError::CapacityExceeded { capacity: 1 };
        let range = QueueError::out_of_range(Argument::Priority, "must be greater than 0");

        assert!(full.is_retryable());
        assert!(!range.is_retryable());
        assert_eq!(full.severity(), ErrorSeverity::Warning);
        assert_eq!(range.severity(), ErrorSeverity::Error);
        assert!(!full.is_critical());
        assert!(!range.is_critical());
    }

    /// Validates routing a batch of results by their classification.
    ///
    /// Assertions:
    /// - Confirms retryable overflows are queued for another attempt.
    /// - Confirms argument errors are rejected and logged at their severity.
    #[test]
    fn classification_routes_failures() {
        let failures = [
            QueueError::CapacityExceeded { capacity: 4 },
            QueueError::invalid_type(Argument::Priority, 0.5),
            QueueError::CapacityExceeded { capacity: 4 },
            QueueError::out_of_range(Argument::Capacity, "must not be negative"),
        ];

        let mut retry = Vec::new();
        let mut rejected = Vec::new();
        for (index, err) in failures.iter().enumerate() {
            if err.is_retryable() {
                retry.push(index);
            } else {
                rejected.push(format!("[{}] {err}", err.severity()));
            }
        }

        assert_eq!(retry, vec![0, 2]);
        assert_eq!(
            rejected,
            vec![
                "[ERROR] priority must be an integer number, got 0.5".to_owned(),
                "[ERROR] capacity is out of range: must not be negative".to_owned(),
            ]
        );
        assert!(failures.iter().all(|err| !err.is_critical()));
    }

    /// Validates `ConfigError` conversions and kind passthrough.
    ///
    /// Assertions:
    /// - Confirms parse errors have no kind.
    /// - Confirms wrapped validation errors keep their kind and message.
    #[test]
    fn config_error_kind() {
        let parse = ConfigError::parse("TOML", "expected `=`");
        assert_eq!(parse.kind(), None);
        assert_eq!(parse.to_string(), "failed to parse TOML queue configuration: expected `=`");

        let invalid: ConfigError = QueueError::invalid_type(Argument::Capacity, "\"ten\"").into();
        assert_eq!(invalid.kind(), Some(ErrorKind::TypeConstraint));
        assert_eq!(invalid.to_string(), "capacity must be an integer number, got \"ten\"");
        assert_eq!(invalid.severity(), ErrorSeverity::Error);
    }
}
