//! Typed keys identifying options.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::option_type::OptionType;

/// Storage index of a key inside an [`OptionValues`](crate::OptionValues).
pub(crate) type KeyId = u64;

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(0);

/// A typed handle identifying one option.
///
/// A key carries the option's name and its declared [`OptionType`]. Keys
/// have identity: every call to [`OptionKey::new`] mints a distinct option,
/// and clones share the original's identity. Two keys that merely agree on
/// the name are different options, and a value set binds values per key,
/// not per name.
pub struct OptionKey<T> {
    inner: Arc<KeyInner<T>>,
}

struct KeyInner<T> {
    id: KeyId,
    name: String,
    ty: OptionType<T>,
}

impl<T> OptionKey<T> {
    /// Declare a new option with the given name and type.
    pub fn new(name: impl Into<String>, ty: OptionType<T>) -> Self {
        Self {
            inner: Arc::new(KeyInner {
                id: NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed),
                name: name.into(),
                ty,
            }),
        }
    }

    /// Name of the option this key identifies.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The declared type of this option.
    pub fn option_type(&self) -> &OptionType<T> {
        &self.inner.ty
    }

    /// Default value, resolved from the key's declared type.
    pub fn default_value(&self) -> &T {
        self.inner.ty.default_value()
    }

    /// Whether `other` identifies the same option as this key.
    pub fn same_key(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }

    pub(crate) fn id(&self) -> KeyId {
        self.inner.id
    }
}

impl<T> Clone for OptionKey<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionKey")
            .field("name", &self.inner.name)
            .field("type", &self.inner.ty)
            .finish()
    }
}
