//! Option declarations as published by producers.

use std::any::Any;

use crate::key::OptionKey;
use crate::option_type::ErasedOptionType;
use crate::types::{OptionCategory, OptionStability};

/// One named, typed option declaration.
///
/// A descriptor is what a producer publishes about an option: the name, the
/// declared type (with its validator and default), help text, and
/// category/stability metadata. Descriptors are immutable once constructed
/// and are shared by reference through the catalogs that contain them.
///
/// Construction follows the chaining style:
///
/// ```
/// use keel_options::{OptionCategory, OptionDescriptor, OptionKey, OptionType};
///
/// let threads = OptionKey::new("engine.threads", OptionType::new("Count", 1usize));
/// let descriptor = OptionDescriptor::new(&threads)
///     .with_help("Number of worker threads.")
///     .with_category(OptionCategory::Expert);
/// assert_eq!(descriptor.name(), "engine.threads");
/// ```
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    name: String,
    ty: ErasedOptionType,
    help: String,
    deprecated: bool,
    category: OptionCategory,
    stability: OptionStability,
}

impl OptionDescriptor {
    /// Declare the option identified by `key`.
    ///
    /// The descriptor takes its name and type from the key. Metadata starts
    /// at the defaults: empty help, not deprecated, [`OptionCategory::User`],
    /// [`OptionStability::Stable`].
    pub fn new<T>(key: &OptionKey<T>) -> Self
    where
        T: Send + Sync + 'static,
    {
        Self {
            name: key.name().to_string(),
            ty: key.option_type().erase(),
            help: String::new(),
            deprecated: false,
            category: OptionCategory::default(),
            stability: OptionStability::default(),
        }
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Mark the option as deprecated.
    pub fn with_deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Set the audience category.
    pub fn with_category(mut self, category: OptionCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the stability contract.
    pub fn with_stability(mut self, stability: OptionStability) -> Self {
        self.stability = stability;
        self
    }

    /// Name of the declared option.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Help text, empty if none was provided.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Whether the option is deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Audience category.
    pub fn category(&self) -> OptionCategory {
        self.category
    }

    /// Stability contract.
    pub fn stability(&self) -> OptionStability {
        self.stability
    }

    /// Name of the declared type.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Check a value against the declared type's validator.
    pub(crate) fn validates(&self, value: &dyn Any) -> bool {
        self.ty.validate(value)
    }
}
