//! Error types for option binding.

use thiserror::Error;

/// Result type for option-value operations.
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Errors that can occur when binding option values.
///
/// Catalog lookups and value reads are total; rejecting a write against a
/// declared option's type is the only failure in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A value failed the validator of the option's declared type.
    #[error("invalid value for option '{option}': not accepted by type {type_name}")]
    InvalidValue {
        /// Name of the option the write targeted
        option: String,
        /// Name of the declared type that rejected the value
        type_name: String,
    },
}
