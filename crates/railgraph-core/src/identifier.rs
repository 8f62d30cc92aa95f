//! Content-derived element identifiers.
//!
//! XMI documents cross-reference classes by id. Railgraph derives that id from
//! the node name so every reference to a name, whether from a class or from
//! an association end, resolves to the same element without a lookup table.

use std::fmt;

/// Document-local identifier derived from a node name.
///
/// The identifier is the lowercase hexadecimal MD5 digest of the name. It is
/// deterministic and only meaningful inside a single rendered document.
///
/// # Examples
///
/// ```
/// use railgraph_core::identifier::ElementId;
///
/// let id = ElementId::from_name("User");
/// assert_eq!(id, "8f9bfe9d1345237cb3b2b205864da075");
/// assert_eq!(id.as_str().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Derives the identifier for `name`.
    ///
    /// # Arguments
    ///
    /// * `name` - The node name, hashed byte-for-byte as UTF-8
    pub fn from_name(name: &str) -> Self {
        Self(format!("{:x}", md5::compute(name.as_bytes())))
    }

    /// Returns the hex digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ElementId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ElementId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
