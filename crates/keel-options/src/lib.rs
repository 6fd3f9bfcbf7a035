//! Typed option declarations and per-context option values for Keel
//! components.
//!
//! Embeddable components declare the options they understand as
//! [`OptionDescriptor`]s, publish them in an [`OptionDescriptors`] catalog,
//! and compose catalogs from independent producers into one namespace with
//! [`OptionDescriptors::union_of`]. Each execution context then binds and
//! queries validated runtime values through an [`OptionValues`] set.
//!
//! The declared schema is immutable and safe to share across threads; the
//! bound values are mutable and scoped to one context. Parsing textual
//! configuration into typed values happens outside this crate — values
//! arrive already typed and are checked against the declared type's
//! validator at write time.
//!
//! # Example
//!
//! ```rust
//! use keel_options::{
//!     OptionDescriptor, OptionDescriptors, OptionKey, OptionType, OptionValues,
//! };
//!
//! // A producer declares its options.
//! let verbose = OptionKey::new("verbose", OptionType::new("Boolean", false));
//! let descriptors = OptionDescriptors::from_descriptors(vec![
//!     OptionDescriptor::new(&verbose).with_help("Enable verbose output."),
//! ]);
//!
//! // A context binds values against the declared schema.
//! let mut values = OptionValues::new(descriptors);
//! assert!(!*values.get(&verbose));
//! values.set(&verbose, true).unwrap();
//! assert!(*values.get(&verbose));
//! assert!(values.has_been_set(&verbose));
//! ```

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod key;
pub mod option_type;
pub mod types;
pub mod values;

// Re-export main types
pub use catalog::{Descriptors, OptionDescriptors};
pub use descriptor::OptionDescriptor;
pub use error::{OptionsError, OptionsResult};
pub use key::OptionKey;
pub use option_type::OptionType;
pub use types::{OptionCategory, OptionStability};
pub use values::OptionValues;
