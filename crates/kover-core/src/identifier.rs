//! Identifiers for scene entities.
//!
//! This module provides the [`Id`] type used as the unique key of a building
//! or an antenna inside a scene.

use std::{borrow::Borrow, fmt};

/// Identifier of a building or an antenna.
///
/// Identifiers are case-sensitive and never normalized. Ordering is the
/// byte-lexicographic ordering of the underlying string, which is the order
/// used when listing entities.
///
/// Syntax is checked by the parser before an `Id` is created; this type
/// only stores the validated text.
///
/// # Examples
///
/// ```
/// use kover_core::identifier::Id;
///
/// let tower = Id::new("tower_1");
/// assert_eq!(tower, "tower_1");
/// assert!(Id::new("Zebra") < Id::new("apple"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(Box<str>);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        Self(name.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
