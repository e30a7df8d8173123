//! Loan ledger and aggregation primitives
//!
//! The ledger is the ordered sequence of every successfully validated loan;
//! insertion order is the definition of "history order" and loans are never
//! mutated or removed once appended. Whether the referenced user and book ids
//! are known is the loader's concern — the ledger appends unconditionally.
//!
//! The aggregation helpers are pure functions over id sequences, used by the
//! statistics and borrowed-books reports. Frequency maps are `IndexMap`s so a
//! left-to-right maximum scan resolves ties toward the first id seen in
//! ledger order.

use crate::types::Loan;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Ordered collection of all loans, append-only
#[derive(Debug, Default)]
pub struct LoanLedger {
    loans: Vec<Loan>,
}

impl LoanLedger {
    pub fn new() -> Self {
        LoanLedger::default()
    }

    /// Append a loan; existence of the referenced ids is not checked here
    pub fn push(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    /// Loans in insertion (history) order
    pub fn iter(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

/// Count occurrences of each key, keyed map in first-occurrence order
pub fn count_frequencies<'a, I>(keys: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for key in keys {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Entry with the strictly greatest value, `("", 0)` for an empty map
///
/// A left-to-right scan with strict `>` keeps the first-encountered maximum
/// on ties.
pub fn max_by_value(counts: &IndexMap<String, usize>) -> (String, usize) {
    let mut max_key = String::new();
    let mut max_value = 0;
    for (key, &value) in counts {
        if value > max_value {
            max_key = key.clone();
            max_value = value;
        }
    }
    (max_key, max_value)
}

/// Remove duplicates, keeping first-occurrence order
pub fn dedup_preserving_order<'a, I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut output = Vec::new();
    for key in keys {
        if seen.insert(key) {
            output.push(key.to_string());
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn loan(user_id: &str, book_id: &str) -> Loan {
        Loan {
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
            loan_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            return_date: None,
            user_name_hint: String::new(),
            book_title_hint: String::new(),
        }
    }

    #[test]
    fn test_ledger_preserves_insertion_order() {
        let mut ledger = LoanLedger::new();
        ledger.push(loan("U2", "B9"));
        ledger.push(loan("U1", "B1"));
        ledger.push(loan("U3", "B9"));

        let order: Vec<&str> = ledger.iter().map(|l| l.user_id.as_str()).collect();
        assert_eq!(order, vec!["U2", "U1", "U3"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_count_frequencies() {
        let counts = count_frequencies(["B1", "B2", "B1", "B1"]);
        assert_eq!(counts.get("B1"), Some(&3));
        assert_eq!(counts.get("B2"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_max_by_value_empty_map() {
        assert_eq!(max_by_value(&IndexMap::new()), (String::new(), 0));
    }

    #[rstest]
    #[case::clear_winner(vec![("A", 2), ("B", 5), ("C", 1)], "B", 5)]
    #[case::tie_keeps_first_seen(vec![("A", 2), ("B", 2)], "A", 2)]
    #[case::later_tie_ignored(vec![("X", 3), ("Y", 1), ("Z", 3)], "X", 3)]
    fn test_max_by_value(
        #[case] entries: Vec<(&str, usize)>,
        #[case] expected_key: &str,
        #[case] expected_value: usize,
    ) {
        let counts: IndexMap<String, usize> = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(
            max_by_value(&counts),
            (expected_key.to_string(), expected_value)
        );
    }

    #[test]
    fn test_dedup_preserving_order() {
        let deduped = dedup_preserving_order(["B2", "B1", "B2", "B3", "B1"]);
        assert_eq!(deduped, vec!["B2", "B1", "B3"]);
    }
}
