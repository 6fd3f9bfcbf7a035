//! The type/validator capability attached to every option.
//!
//! An [`OptionType`] bundles the three things the binding layer needs to
//! know about an option's value type: a display name, the default value,
//! and a validation predicate. Converting raw textual configuration into
//! typed values happens outside this crate; by the time a value reaches
//! [`set`](crate::OptionValues::set) it is already typed, and the only
//! question left is whether the declared type accepts it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The declared type of an option: name, default value, and validator.
///
/// `OptionType` is a cheap handle; clones share the default and validator.
pub struct OptionType<T> {
    name: String,
    default: Arc<T>,
    validate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> OptionType<T> {
    /// Create a type that accepts every value of `T`.
    pub fn new(name: impl Into<String>, default: T) -> Self {
        Self {
            name: name.into(),
            default: Arc::new(default),
            validate: Arc::new(|_| true),
        }
    }

    /// Create a type with an explicit validation predicate.
    ///
    /// The predicate decides which values of `T` the type accepts; the
    /// default value is not required to pass it, since defaults resolve
    /// without validation.
    pub fn with_validator(
        name: impl Into<String>,
        default: T,
        validate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            default: Arc::new(default),
            validate: Arc::new(validate),
        }
    }

    /// Display name of this type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default value for options of this type.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Check whether this type accepts `value`.
    pub fn validate(&self, value: &T) -> bool {
        (self.validate)(value)
    }
}

impl<T> OptionType<T>
where
    T: Send + Sync + 'static,
{
    /// Erase the concrete value type, keeping the validator usable over
    /// `dyn Any`.
    pub(crate) fn erase(&self) -> ErasedOptionType {
        let validate = Arc::clone(&self.validate);
        ErasedOptionType {
            name: self.name.clone(),
            validate: Arc::new(move |value: &dyn Any| {
                value.downcast_ref::<T>().is_some_and(|value| validate(value))
            }),
        }
    }
}

// Manual impl: deriving would require `T: Clone`, but clones share the
// default through the Arc.
impl<T> Clone for OptionType<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            default: Arc::clone(&self.default),
            validate: Arc::clone(&self.validate),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionType")
            .field("name", &self.name)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Type-erased form of [`OptionType`].
///
/// Descriptors carry this so catalogs and value sets never branch on the
/// concrete value type. Defaults stay on the typed key; only the validator
/// needs to cross the erasure boundary. A value of the wrong concrete type
/// fails the downcast inside the validator and is rejected like any other
/// invalid value.
#[derive(Clone)]
pub(crate) struct ErasedOptionType {
    name: String,
    validate: Arc<dyn Fn(&dyn Any) -> bool + Send + Sync>,
}

impl ErasedOptionType {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn validate(&self, value: &dyn Any) -> bool {
        (self.validate)(value)
    }
}

impl fmt::Debug for ErasedOptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedOptionType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
