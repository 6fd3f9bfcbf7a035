//! Per-context bound option values.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::catalog::OptionDescriptors;
use crate::error::{OptionsError, OptionsResult};
use crate::key::{KeyId, OptionKey};

/// The bound runtime values of one execution context, validated against a
/// catalog of declared options.
///
/// A value set is created once per context and mutated only through
/// [`set`](Self::set). The catalog supplies validators at write time; it is
/// not consulted by [`get`](Self::get), which falls back to the key's own
/// declared default when nothing was written. Confine a value set to one
/// logical context — it carries no internal synchronization.
pub struct OptionValues {
    descriptors: OptionDescriptors,
    values: HashMap<KeyId, Box<dyn Any + Send + Sync>>,
}

impl OptionValues {
    /// Create an empty value set validating against `descriptors`.
    pub fn new(descriptors: OptionDescriptors) -> Self {
        Self {
            descriptors,
            values: HashMap::new(),
        }
    }

    /// The catalog this value set validates against.
    pub fn descriptors(&self) -> &OptionDescriptors {
        &self.descriptors
    }

    /// Bind `value` to `key`.
    ///
    /// The key's name is looked up in the catalog solely to obtain the
    /// declared type's validator. If the declared type rejects the value,
    /// the write fails with [`OptionsError::InvalidValue`] and the value set
    /// is left unchanged. A key with no matching descriptor is accepted
    /// unconditionally, so a context stays usable with options not declared
    /// in its particular composed catalog.
    pub fn set<T>(&mut self, key: &OptionKey<T>, value: T) -> OptionsResult<()>
    where
        T: Send + Sync + 'static,
    {
        match self.descriptors.get(key.name()) {
            Some(descriptor) => {
                if !descriptor.validates(&value) {
                    debug!(
                        option = key.name(),
                        declared_type = descriptor.type_name(),
                        "rejected value for declared option"
                    );
                    return Err(OptionsError::InvalidValue {
                        option: key.name().to_string(),
                        type_name: descriptor.type_name().to_string(),
                    });
                }
            }
            None => {
                debug!(option = key.name(), "binding undeclared option unchecked");
            }
        }
        self.values.insert(key.id(), Box::new(value));
        Ok(())
    }

    /// Read the value bound to `key`.
    ///
    /// Returns the last value successfully written for this exact key, or
    /// the key's statically declared default if nothing was written. The
    /// catalog plays no part here; defaults always resolve from the key
    /// itself.
    pub fn get<'a, T>(&'a self, key: &'a OptionKey<T>) -> &'a T
    where
        T: 'static,
    {
        self.values
            .get(&key.id())
            .and_then(|value| value.downcast_ref::<T>())
            .unwrap_or_else(|| key.default_value())
    }

    /// Whether [`set`](Self::set) has succeeded for `key` on this instance.
    ///
    /// True even when the written value equals the default.
    pub fn has_been_set<T>(&self, key: &OptionKey<T>) -> bool {
        self.values.contains_key(&key.id())
    }
}

impl fmt::Debug for OptionValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionValues")
            .field("descriptors", &self.descriptors)
            .field("bound", &self.values.len())
            .finish()
    }
}
