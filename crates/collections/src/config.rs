//! Queue configuration types and builder patterns
//!
//! [`QueueConfig`] captures the knobs shared by both queue flavours. It can
//! be assembled in code through [`QueueConfigBuilder`] or loaded from a TOML
//! or JSON document:
//!
//! ```toml
//! capacity = 256
//! default_priority = 2
//! preallocate = true
//! ```
//!
//! Document values go through the same validation as constructor arguments,
//! so `capacity = "ten"` is a type error and `capacity = -1` a range error.

use std::fmt;

#[cfg(feature = "observability")]
use tracing::info;

use crate::collections::{Capacity, IntoCapacity, IntoPriority, Priority};
use crate::error::{Argument, ConfigError, QueueError, QueueResult};

/// Largest capacity for which slot storage is reserved up front.
pub const MAX_PREALLOCATED_SLOTS: usize = 1 << 20;

/// Configuration for queue construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct QueueConfig {
    /// Maximum number of elements
    pub capacity: Capacity,

    /// Priority attached by `PriorityQueue::push`
    pub default_priority: Priority,

    /// Whether to reserve storage for every slot at construction
    pub preallocate: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self { capacity: Capacity::DEFAULT, default_priority: Priority::DEFAULT, preallocate: false }
    }
}

impl QueueConfig {
    /// Create a new configuration builder
    #[must_use]
    pub fn builder() -> QueueConfigBuilder {
        QueueConfigBuilder::default()
    }

    /// Quick preset for a small, fully preallocated queue
    ///
    /// # Example
    /// ```
    /// use boundq_collections::config::QueueConfig;
    ///
    /// let config = QueueConfig::small();
    /// assert_eq!(config.capacity.get(), 64);
    /// assert!(config.preallocate);
    /// ```
    #[must_use]
    pub fn small() -> Self {
        Self { capacity: Capacity::new(64), preallocate: true, ..Self::default() }
    }

    /// Checks the combination of settings.
    ///
    /// # Errors
    ///
    /// Returns a range-kind error when preallocation is requested for more
    /// than [`MAX_PREALLOCATED_SLOTS`] slots.
    pub fn validate(&self) -> QueueResult<()> {
        if self.preallocate && self.capacity.get() > MAX_PREALLOCATED_SLOTS {
            return Err(QueueError::out_of_range(
                Argument::Capacity,
                format!(
                    "preallocation is limited to {MAX_PREALLOCATED_SLOTS} slots, got {}",
                    self.capacity
                ),
            ));
        }
        Ok(())
    }

    /// Loads a configuration from a TOML document.
    ///
    /// Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents,
    /// [`ConfigError::UnknownField`] for unexpected keys and
    /// [`ConfigError::Invalid`] for values that fail validation.
    ///
    /// ```
    /// use boundq_collections::config::QueueConfig;
    /// use boundq_collections::error::ErrorKind;
    ///
    /// let config = QueueConfig::from_toml_str("capacity = 32\ndefault_priority = 3").unwrap();
    /// assert_eq!(config.capacity.get(), 32);
    /// assert_eq!(config.default_priority.get(), 3);
    ///
    /// let err = QueueConfig::from_toml_str("capacity = \"ten\"").unwrap_err();
    /// assert_eq!(err.kind(), Some(ErrorKind::TypeConstraint));
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        const FORMAT: &str = "TOML";

        let table: toml::Table = toml::from_str(input).map_err(|e| ConfigError::parse(FORMAT, e))?;
        Self::from_document(FORMAT, &table, toml::Value::as_bool)
    }

    /// Loads a configuration from a JSON object.
    ///
    /// # Errors
    ///
    /// Same as [`QueueConfig::from_toml_str`].
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        const FORMAT: &str = "JSON";

        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(input).map_err(|e| ConfigError::parse(FORMAT, e))?;
        Self::from_document(FORMAT, &object, serde_json::Value::as_bool)
    }

    // Shared key dispatch for every document format; each value goes through
    // the same conversions as a constructor argument.
    fn from_document<'a, V>(
        format: &'static str,
        entries: impl IntoIterator<Item = (&'a String, &'a V)>,
        as_bool: impl Fn(&V) -> Option<bool>,
    ) -> Result<Self, ConfigError>
    where
        V: fmt::Display + 'a,
        &'a V: IntoCapacity + IntoPriority,
    {
        let mut builder = Self::builder();
        for (key, value) in entries {
            builder = match key.as_str() {
                "capacity" => builder.capacity(value.into_capacity()?),
                "default_priority" => builder.default_priority(value.into_priority()?),
                "preallocate" => builder.preallocate(as_bool(value).ok_or_else(|| {
                    ConfigError::parse(
                        format,
                        format!("`preallocate` must be a boolean, got {value}"),
                    )
                })?),
                other => return Err(ConfigError::UnknownField(other.to_owned())),
            };
        }

        let config = builder.build();
        config.validate()?;
        #[cfg(feature = "observability")]
        info!(
            format,
            capacity = %config.capacity,
            default_priority = %config.default_priority,
            preallocate = config.preallocate,
            "loaded queue configuration"
        );
        Ok(config)
    }
}

/// Builder for QueueConfig with fluent API
#[derive(Debug, Default)]
pub struct QueueConfigBuilder {
    config: QueueConfig,
}

impl QueueConfigBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum number of elements
    #[must_use]
    pub fn capacity(mut self, capacity: Capacity) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the priority used for payloads enqueued without one
    #[must_use]
    pub fn default_priority(mut self, priority: Priority) -> Self {
        self.config.default_priority = priority;
        self
    }

    /// Enable or disable up-front slot reservation
    #[must_use]
    pub fn preallocate(mut self, enabled: bool) -> Self {
        self.config.preallocate = enabled;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> QueueConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for config.
    use super::*;
    use crate::error::ErrorKind;

    /// Validates `QueueConfig::default` behavior.
    ///
    /// Assertions:
    /// - Confirms `config.capacity` equals `10_000`.
    /// - Confirms `config.default_priority` equals `1`.
    /// - Ensures `!config.preallocate` evaluates to true.
    #[test]
    fn test_queue_config_default() {
        let config = QueueConfig::default();
        assert_eq!(config.capacity.get(), 10_000);
        assert_eq!(config.default_priority.get(), 1);
        assert!(!config.preallocate);
        assert!(config.validate().is_ok());
    }

    /// Validates `QueueConfigBuilder` behavior.
    ///
    /// Assertions:
    /// - Confirms every setter is reflected in the built config.
    #[test]
    fn test_queue_config_builder() {
        let config = QueueConfigBuilder::new()
            .capacity(Capacity::new(12))
            .default_priority(7_u32.into_priority().unwrap())
            .preallocate(true)
            .build();

        assert_eq!(config.capacity.get(), 12);
        assert_eq!(config.default_priority.get(), 7);
        assert!(config.preallocate);
    }

    /// Validates `QueueConfig::validate` for oversized preallocation.
    ///
    /// Assertions:
    /// - Confirms a range error when preallocating above the limit.
    /// - Confirms the same capacity is fine without preallocation.
    #[test]
    fn test_validate_preallocation_limit() {
        let big = Capacity::new(MAX_PREALLOCATED_SLOTS + 1);
        let config = QueueConfig::builder().capacity(big).preallocate(true).build();
        assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::RangeConstraint);

        let lazy = QueueConfig::builder().capacity(big).build();
        assert!(lazy.validate().is_ok());
    }

    /// Validates `QueueConfig::from_toml_str` for a complete document.
    ///
    /// Assertions:
    /// - Confirms each field is read from the document.
    /// - Confirms an empty document yields the defaults.
    #[test]
    fn test_from_toml_str() {
        let config = QueueConfig::from_toml_str(
            "capacity = 128\ndefault_priority = 2\npreallocate = true\n",
        )
        .unwrap();
        assert_eq!(config.capacity.get(), 128);
        assert_eq!(config.default_priority.get(), 2);
        assert!(config.preallocate);

        assert_eq!(QueueConfig::from_toml_str("").unwrap(), QueueConfig::default());
    }

    /// Validates `QueueConfig::from_toml_str` error reporting.
    ///
    /// Assertions:
    /// - Confirms string and negative capacities map to type and range kinds.
    /// - Confirms a fractional priority maps to the type kind.
    /// - Confirms unknown keys and malformed documents are rejected.
    #[test]
    fn test_from_toml_str_errors() {
        let err = QueueConfig::from_toml_str("capacity = \"ten\"").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::TypeConstraint));

        let err = QueueConfig::from_toml_str("capacity = -1").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RangeConstraint));

        let err = QueueConfig::from_toml_str("capacity = nan").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RangeConstraint));

        let err = QueueConfig::from_toml_str("default_priority = 1.5").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::TypeConstraint));

        let err = QueueConfig::from_toml_str("default_priority = 0").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RangeConstraint));

        let err = QueueConfig::from_toml_str("max_size = 3").unwrap_err();
        assert_eq!(err, ConfigError::UnknownField("max_size".to_owned()));

        let err = QueueConfig::from_toml_str("preallocate = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "TOML", .. }));

        let err = QueueConfig::from_toml_str("capacity = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "TOML", .. }));
    }

    /// Validates `QueueConfig::from_json_str` for valid and invalid objects.
    ///
    /// Assertions:
    /// - Confirms numeric fields are read, including integral floats.
    /// - Confirms `null` and string values are type errors.
    #[test]
    fn test_from_json_str() {
        let config = QueueConfig::from_json_str(r#"{"capacity": 16.0, "default_priority": 5}"#)
            .unwrap();
        assert_eq!(config.capacity.get(), 16);
        assert_eq!(config.default_priority.get(), 5);
        assert!(!config.preallocate);

        let err = QueueConfig::from_json_str(r#"{"capacity": null}"#).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::TypeConstraint));

        let err = QueueConfig::from_json_str(r#"{"default_priority": "high"}"#).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::TypeConstraint));

        let err = QueueConfig::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "JSON", .. }));
    }

    /// Validates that document loading also enforces `validate`.
    ///
    /// Assertions:
    /// - Confirms oversized preallocation is rejected with a range kind.
    #[test]
    fn test_loading_runs_validation() {
        let doc = format!(r#"{{"capacity": {}, "preallocate": true}}"#, MAX_PREALLOCATED_SLOTS + 1);
        let err = QueueConfig::from_json_str(&doc).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::RangeConstraint));
    }

    /// Validates that TOML and JSON documents follow the same field rules.
    ///
    /// Assertions:
    /// - Confirms equivalent documents produce equal configs.
    /// - Confirms equivalent invalid documents fail with the same kind.
    /// - Confirms a non-boolean `preallocate` is a parse error in both.
    #[test]
    fn test_formats_share_rules() {
        let toml = QueueConfig::from_toml_str(
            "capacity = 9\ndefault_priority = 5000000000\npreallocate = true",
        )
        .unwrap();
        let json = QueueConfig::from_json_str(
            r#"{"capacity": 9, "default_priority": 5000000000, "preallocate": true}"#,
        )
        .unwrap();
        assert_eq!(toml, json);
        assert_eq!(toml.default_priority.get(), 5_000_000_000);

        for (toml_doc, json_doc, kind) in [
            ("capacity = -2", r#"{"capacity": -2}"#, ErrorKind::RangeConstraint),
            ("capacity = true", r#"{"capacity": true}"#, ErrorKind::TypeConstraint),
            ("default_priority = 0", r#"{"default_priority": 0}"#, ErrorKind::RangeConstraint),
            ("default_priority = 2.5", r#"{"default_priority": 2.5}"#, ErrorKind::TypeConstraint),
        ] {
            assert_eq!(QueueConfig::from_toml_str(toml_doc).unwrap_err().kind(), Some(kind));
            assert_eq!(QueueConfig::from_json_str(json_doc).unwrap_err().kind(), Some(kind));
        }

        let err = QueueConfig::from_json_str(r#"{"preallocate": 1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "JSON", .. }));
        assert_eq!(err.kind(), None);
    }
}
