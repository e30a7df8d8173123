//! Book catalog entry

/// A book in the catalog
///
/// Same lifecycle as [`crate::types::User`]: keyed by id, overwritten when the
/// same id is loaded again, never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier within the book catalog
    pub id: String,
    /// Book title
    pub title: String,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Book {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Field values in report column order
    pub fn to_row(&self) -> Vec<String> {
        vec![self.id.clone(), self.title.clone()]
    }
}
