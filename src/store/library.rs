//! Load orchestration and the shared in-memory state
//!
//! `LibraryStore` owns everything a session accumulates: the two catalogs, the
//! loan ledger, and the per-line error list. It is passed by reference to the
//! menu and report layers — there are no process-wide singletons.
//!
//! Loading is line-granular: a bad line is skipped and recorded, a good line
//! is committed immediately, and nothing is ever rolled back. The only `Err`
//! a load returns is a fatal I/O failure from the line reader.

use crate::io::read_lines;
use crate::store::catalog::Catalog;
use crate::store::ledger::LoanLedger;
use crate::types::{Book, LibraryError, Loan, LoadError, SourceKind, User};
use crate::validate::{validate_book, validate_loan, validate_user};
use std::path::Path;

/// All session state: catalogs, ledger, accumulated load errors
#[derive(Debug, Default)]
pub struct LibraryStore {
    pub catalog: Catalog,
    pub ledger: LoanLedger,
    errors: Vec<LoadError>,
}

/// True for lines the loaders skip without validating
fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.trim_start().starts_with('#')
}

impl LibraryStore {
    pub fn new() -> Self {
        LibraryStore::default()
    }

    /// Accumulated load errors, in arrival order
    pub fn errors(&self) -> &[LoadError] {
        &self.errors
    }

    fn record_failures(&mut self, source: SourceKind, line: u64, messages: Vec<String>) {
        for message in messages {
            self.errors.push(LoadError::new(source, line, message));
        }
    }

    /// Load a user file, inserting or overwriting catalog entries by id
    pub fn load_users(&mut self, path: &Path) -> Result<(), LibraryError> {
        for (num, line) in read_lines(path)? {
            if is_skippable(&line) {
                continue;
            }
            match validate_user(&line) {
                Ok(record) => self.catalog.upsert_user(User::new(record.id, record.name)),
                Err(messages) => self.record_failures(SourceKind::Users, num, messages),
            }
        }
        Ok(())
    }

    /// Load a book file, inserting or overwriting catalog entries by id
    pub fn load_books(&mut self, path: &Path) -> Result<(), LibraryError> {
        for (num, line) in read_lines(path)? {
            if is_skippable(&line) {
                continue;
            }
            match validate_book(&line) {
                Ok(record) => self.catalog.upsert_book(Book::new(record.id, record.title)),
                Err(messages) => self.record_failures(SourceKind::Books, num, messages),
            }
        }
        Ok(())
    }

    /// Load a loan file, appending every valid loan to the ledger
    ///
    /// Referenced ids are checked against whatever the catalogs hold at this
    /// moment; a missing id is recorded as a cross-reference error but never
    /// blocks the append. Catalogs loaded later do not retroactively clear
    /// errors already reported here.
    pub fn load_loans(&mut self, path: &Path) -> Result<(), LibraryError> {
        for (num, line) in read_lines(path)? {
            if is_skippable(&line) {
                continue;
            }
            let record = match validate_loan(&line) {
                Ok(record) => record,
                Err(messages) => {
                    self.record_failures(SourceKind::Loans, num, messages);
                    continue;
                }
            };

            if !self.catalog.has_user(&record.user_id) {
                self.errors.push(LoadError::new(
                    SourceKind::Loans,
                    num,
                    format!(
                        "id_usuario {} no existe en catálogo de usuarios",
                        record.user_id
                    ),
                ));
            }
            if !self.catalog.has_book(&record.book_id) {
                self.errors.push(LoadError::new(
                    SourceKind::Loans,
                    num,
                    format!(
                        "id_libro {} no existe en catálogo de libros",
                        record.book_id
                    ),
                ));
            }

            self.ledger.push(Loan {
                user_id: record.user_id,
                book_id: record.book_id,
                loan_date: record.loan_date,
                return_date: record.return_date,
                user_name_hint: record.user_name,
                book_title_hint: record.book_title,
            });
        }
        Ok(())
    }
}
