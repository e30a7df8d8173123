//! User catalog entry

/// A library user
///
/// The id stays a `String` so identifiers with leading zeros survive intact.
/// Users are keyed by id in the catalog; loading the same id again replaces
/// the stored entry (last write wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier within the user catalog
    pub id: String,
    /// Full display name
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Field values in report column order
    pub fn to_row(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}
