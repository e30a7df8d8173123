//! Report row assembly
//!
//! Every report is a [`Report`]: a title, column headers and rows of plain
//! strings. The console renderer and the HTML exporter both consume the same
//! `Report`, so row contents are identical between the two presentations by
//! construction.
//!
//! Display names are resolved per loan with a three-level fallback: the hint
//! carried on the loan itself, then the catalog entry, then the raw id.

use crate::store::{count_frequencies, dedup_preserving_order, max_by_value, LibraryStore};
use chrono::NaiveDate;

/// One assembled report, presentation-agnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Report {
    fn new(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Report {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

/// Hint on the loan, else catalog name, else the raw id
fn resolve_user_name(store: &LibraryStore, user_id: &str, hint: &str) -> String {
    if !hint.is_empty() {
        return hint.to_string();
    }
    match store.catalog.user(user_id) {
        Some(user) => user.name.clone(),
        None => user_id.to_string(),
    }
}

/// Hint on the loan, else catalog title, else the raw id
fn resolve_book_title(store: &LibraryStore, book_id: &str, hint: &str) -> String {
    if !hint.is_empty() {
        return hint.to_string();
    }
    match store.catalog.book(book_id) {
        Some(book) => book.title.clone(),
        None => book_id.to_string(),
    }
}

/// Loan history: one row per loan, in ledger (insertion) order
pub fn history(store: &LibraryStore) -> Report {
    let rows = store
        .ledger
        .iter()
        .map(|loan| {
            vec![
                loan.user_id.clone(),
                resolve_user_name(store, &loan.user_id, &loan.user_name_hint),
                loan.book_id.clone(),
                resolve_book_title(store, &loan.book_id, &loan.book_title_hint),
                loan.loan_date_iso(),
                loan.return_date_iso(),
            ]
        })
        .collect();

    Report::new(
        "Historial de Préstamos",
        &[
            "ID Usuario",
            "Usuario",
            "ID Libro",
            "Libro",
            "Fecha Préstamo",
            "Fecha Devolución",
        ],
        rows,
    )
}

/// Unique users: the catalog in insertion order
pub fn unique_users(store: &LibraryStore) -> Report {
    let rows = store.catalog.users().map(|user| user.to_row()).collect();
    Report::new("Listado de Usuarios", &["ID Usuario", "Nombre"], rows)
}

/// Borrowed books: distinct book ids from the ledger, first-appearance order
pub fn borrowed_books(store: &LibraryStore) -> Report {
    let book_ids = dedup_preserving_order(store.ledger.iter().map(|loan| loan.book_id.as_str()));
    let rows = book_ids
        .into_iter()
        .map(|book_id| {
            let hint = store
                .ledger
                .iter()
                .find(|loan| loan.book_id == book_id)
                .map(|loan| loan.book_title_hint.clone())
                .unwrap_or_default();
            let title = resolve_book_title(store, &book_id, &hint);
            vec![book_id, title]
        })
        .collect();

    Report::new(
        "Listado de Libros Prestados",
        &["ID Libro", "Título"],
        rows,
    )
}

/// Statistics: the four fixed metrics as metric/value rows
pub fn statistics(store: &LibraryStore) -> Report {
    let total = store.ledger.len();

    let book_counts = count_frequencies(store.ledger.iter().map(|loan| loan.book_id.as_str()));
    let (top_book_id, top_book_count) = max_by_value(&book_counts);
    let top_book_title = resolve_book_title(store, &top_book_id, "");

    let user_counts = count_frequencies(store.ledger.iter().map(|loan| loan.user_id.as_str()));
    let (top_user_id, top_user_count) = max_by_value(&user_counts);
    let top_user_name = resolve_user_name(store, &top_user_id, "");

    let distinct_users = user_counts.len();

    let rows = vec![
        vec!["Total de préstamos".to_string(), total.to_string()],
        vec![
            "Libro más prestado".to_string(),
            format!("{top_book_id} - {top_book_title} (veces: {top_book_count})"),
        ],
        vec![
            "Usuario más activo".to_string(),
            format!("{top_user_id} - {top_user_name} (veces: {top_user_count})"),
        ],
        vec![
            "Total de usuarios únicos".to_string(),
            distinct_users.to_string(),
        ],
    ];

    Report::new("Estadísticas de Préstamos", &["Métrica", "Valor"], rows)
}

/// Overdue loans as of `today`, in ledger order
pub fn overdue(store: &LibraryStore, today: NaiveDate) -> Report {
    let rows = store
        .ledger
        .iter()
        .filter(|loan| loan.is_overdue(today))
        .map(|loan| {
            vec![
                loan.user_id.clone(),
                resolve_user_name(store, &loan.user_id, &loan.user_name_hint),
                loan.book_id.clone(),
                resolve_book_title(store, &loan.book_id, &loan.book_title_hint),
                loan.loan_date_iso(),
            ]
        })
        .collect();

    Report::new(
        "Préstamos Vencidos",
        &[
            "ID Usuario",
            "Usuario",
            "ID Libro",
            "Libro",
            "Fecha Préstamo",
        ],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Book, Loan, User};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn loan(user_id: &str, book_id: &str, loan_date: NaiveDate) -> Loan {
        Loan {
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
            loan_date,
            return_date: None,
            user_name_hint: String::new(),
            book_title_hint: String::new(),
        }
    }

    fn sample_store() -> LibraryStore {
        let mut store = LibraryStore::new();
        store.catalog.upsert_user(User::new("U1", "Ada"));
        store.catalog.upsert_book(Book::new("B1", "El Quijote"));
        store
    }

    #[test]
    fn test_history_rows_in_ledger_order() {
        let mut store = sample_store();
        store.ledger.push(loan("U1", "B1", date(2024, 2, 1)));
        store.ledger.push(loan("U1", "B1", date(2024, 1, 1)));

        let report = history(&store);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0][4], "2024-02-01");
        assert_eq!(report.rows[1][4], "2024-01-01");
    }

    #[test]
    fn test_history_resolution_prefers_hint_over_catalog() {
        let mut store = sample_store();
        let mut with_hint = loan("U1", "B1", date(2024, 1, 1));
        with_hint.user_name_hint = "Ada (archivo)".to_string();
        store.ledger.push(with_hint);

        let report = history(&store);
        assert_eq!(report.rows[0][1], "Ada (archivo)");
        assert_eq!(report.rows[0][3], "El Quijote");
    }

    #[test]
    fn test_history_falls_back_to_raw_id() {
        let mut store = sample_store();
        store.ledger.push(loan("U9", "B9", date(2024, 1, 1)));

        let report = history(&store);
        assert_eq!(report.rows[0][1], "U9");
        assert_eq!(report.rows[0][3], "B9");
    }

    #[test]
    fn test_unique_users_in_catalog_order() {
        let mut store = LibraryStore::new();
        store.catalog.upsert_user(User::new("U2", "Grace"));
        store.catalog.upsert_user(User::new("U1", "Ada"));

        let report = unique_users(&store);
        assert_eq!(
            report.rows,
            vec![
                vec!["U2".to_string(), "Grace".to_string()],
                vec!["U1".to_string(), "Ada".to_string()],
            ]
        );
    }

    #[test]
    fn test_borrowed_books_first_appearance_order() {
        let mut store = sample_store();
        store.catalog.upsert_book(Book::new("B2", "Rayuela"));
        store.ledger.push(loan("U1", "B2", date(2024, 1, 1)));
        store.ledger.push(loan("U1", "B1", date(2024, 1, 2)));
        store.ledger.push(loan("U1", "B2", date(2024, 1, 3)));

        let report = borrowed_books(&store);
        assert_eq!(
            report.rows,
            vec![
                vec!["B2".to_string(), "Rayuela".to_string()],
                vec!["B1".to_string(), "El Quijote".to_string()],
            ]
        );
    }

    #[test]
    fn test_statistics_metrics() {
        let mut store = sample_store();
        store.catalog.upsert_user(User::new("U2", "Grace"));
        store.ledger.push(loan("U1", "B1", date(2024, 1, 1)));
        store.ledger.push(loan("U1", "B2", date(2024, 1, 2)));
        store.ledger.push(loan("U2", "B1", date(2024, 1, 3)));

        let report = statistics(&store);
        assert_eq!(report.rows[0][1], "3");
        assert_eq!(report.rows[1][1], "B1 - El Quijote (veces: 2)");
        assert_eq!(report.rows[2][1], "U1 - Ada (veces: 2)");
        assert_eq!(report.rows[3][1], "2");
    }

    #[test]
    fn test_statistics_empty_ledger() {
        let store = sample_store();
        let report = statistics(&store);
        assert_eq!(report.rows[0][1], "0");
        // max_by_value on an empty map yields ("", 0); the id fallback is "".
        assert_eq!(report.rows[1][1], " -  (veces: 0)");
        assert_eq!(report.rows[3][1], "0");
    }

    #[test]
    fn test_overdue_filters_by_policy() {
        let mut store = sample_store();
        store.ledger.push(loan("U1", "B1", date(2024, 1, 1))); // overdue
        let mut returned = loan("U1", "B1", date(2024, 1, 1));
        returned.return_date = Some(date(2024, 1, 20));
        store.ledger.push(returned); // returned, never overdue
        store.ledger.push(loan("U1", "B1", date(2024, 2, 20))); // on time

        let report = overdue(&store, date(2024, 3, 1));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0][4], "2024-01-01");
        assert_eq!(report.rows[0].len(), 5);
    }
}
