//! Per-resource capability sets.
//!
//! Each resource declares, as a constant, which generic [`Operation`]s it
//! permits. The set is checked before any request is built, so a disabled
//! verb fails the same way whatever arguments it is given.

use std::fmt;

use crate::rest::Operation;

/// The subset of {get, create, update, delete} a resource permits.
///
/// # Example
///
/// ```rust
/// use saas_api::rest::{Capabilities, Operation};
///
/// const USERS: Capabilities = Capabilities::GET
///     .union(Capabilities::CREATE)
///     .union(Capabilities::UPDATE);
///
/// assert!(USERS.contains(Operation::Update));
/// assert!(!USERS.contains(Operation::Delete));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No operation is permitted.
    pub const NONE: Self = Self(0);
    /// Only `get` is permitted.
    pub const GET: Self = Self::of(Operation::Get);
    /// Only `create` is permitted.
    pub const CREATE: Self = Self::of(Operation::Create);
    /// Only `update` is permitted.
    pub const UPDATE: Self = Self::of(Operation::Update);
    /// Only `delete` is permitted.
    pub const DELETE: Self = Self::of(Operation::Delete);
    /// Every operation is permitted.
    pub const ALL: Self = Self(0b1111);

    /// Returns the set containing a single operation.
    #[must_use]
    pub const fn of(operation: Operation) -> Self {
        Self(Self::bit(operation))
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if the operation is permitted.
    #[must_use]
    pub const fn contains(self, operation: Operation) -> bool {
        self.0 & Self::bit(operation) != 0
    }

    /// Returns `true` if no operation is permitted.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the permitted operations in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Operation> {
        Operation::ALL
            .into_iter()
            .filter(move |operation| self.contains(*operation))
    }

    const fn bit(operation: Operation) -> u8 {
        match operation {
            Operation::Get => 0b0001,
            Operation::Create => 0b0010,
            Operation::Update => 0b0100,
            Operation::Delete => 0b1000,
        }
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_contains_nothing() {
        assert!(Capabilities::NONE.is_empty());
        for operation in Operation::ALL {
            assert!(!Capabilities::NONE.contains(operation));
        }
    }

    #[test]
    fn test_all_contains_everything() {
        for operation in Operation::ALL {
            assert!(Capabilities::ALL.contains(operation));
        }
    }

    #[test]
    fn test_union_and_iteration_order() {
        let set = Capabilities::DELETE.union(Capabilities::GET);
        let operations: Vec<Operation> = set.iter().collect();
        assert_eq!(operations, vec![Operation::Get, Operation::Delete]);
    }

    #[test]
    fn test_debug_lists_operations() {
        let set = Capabilities::GET.union(Capabilities::CREATE);
        assert_eq!(format!("{set:?}"), "{Get, Create}");
    }
}
