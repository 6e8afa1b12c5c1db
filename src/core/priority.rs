//! Priority slots for resource list manipulators.

use std::fmt;

/// Position of a manipulator in a pass.
///
/// Lower value runs earlier; manipulators sharing a value keep their
/// registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u8);

impl Priority {
    /// Slot for manipulators that create resources.
    pub const FIRST: Self = Self(0);
    /// Slot used when a manipulator does not ask for one.
    pub const DEFAULT: Self = Self(50);
    /// Page rule annotation: after resources from other manipulators exist,
    /// before the final rewrites that read routing options.
    pub const ROUTING: Self = Self(90);
    /// Reserved for manipulators that must see the final metadata
    /// (directory indexes).
    pub const LAST: Self = Self(100);
}

impl Default for Priority {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
