//! Metadata attached to option declarations.

use serde::{Deserialize, Serialize};

/// Audience category of an option.
///
/// Controls where an option shows up in generated help output; it has no
/// effect on lookup or binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptionCategory {
    /// Relevant to end users of a component.
    #[default]
    User,

    /// Relevant for expert tuning; hidden from default help output.
    Expert,

    /// Internal to the component; never shown to users.
    Internal,
}

/// Stability contract of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OptionStability {
    /// Name and semantics are stable across releases.
    #[default]
    Stable,

    /// May change or disappear without notice.
    Experimental,
}
