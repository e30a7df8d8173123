//! Loan record linking a user and a book by id
//!
//! A loan references catalog entries by value only — there is no live
//! reference, and a loan is created even when the referenced ids are unknown
//! (the cross-reference problem is reported separately at load time).
//! Resolution of display names happens at report time.

use chrono::{Duration, NaiveDate};

/// Days after the loan date before an unreturned loan counts as overdue
pub const LOAN_TERM_DAYS: i64 = 30;

/// A single loan, immutable once appended to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    /// Id of the borrowing user (may be absent from the catalog)
    pub user_id: String,
    /// Id of the borrowed book (may be absent from the catalog)
    pub book_id: String,
    /// Date the loan was made
    pub loan_date: NaiveDate,
    /// Actual return date; `None` means not yet returned
    pub return_date: Option<NaiveDate>,
    /// Optional display-name hint carried in the 6-field input form
    pub user_name_hint: String,
    /// Optional title hint carried in the 6-field input form
    pub book_title_hint: String,
}

impl Loan {
    /// Whether this loan is overdue as of `today`
    ///
    /// A returned loan is never overdue, no matter how late the return was.
    /// Otherwise the due date is `loan_date + LOAN_TERM_DAYS` and the loan is
    /// overdue only strictly after it — exactly on the due date is still on
    /// time.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.return_date.is_some() {
            return false;
        }
        let due_date = self.loan_date + Duration::days(LOAN_TERM_DAYS);
        today > due_date
    }

    /// Loan date in `YYYY-MM-DD` form
    pub fn loan_date_iso(&self) -> String {
        self.loan_date.format("%Y-%m-%d").to_string()
    }

    /// Return date in `YYYY-MM-DD` form, or the empty string when unreturned
    pub fn return_date_iso(&self) -> String {
        self.return_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_loan(loan_date: NaiveDate) -> Loan {
        Loan {
            user_id: "U1".to_string(),
            book_id: "B1".to_string(),
            loan_date,
            return_date: None,
            user_name_hint: String::new(),
            book_title_hint: String::new(),
        }
    }

    #[rstest]
    #[case::before_due_date(date(2024, 1, 15), false)]
    #[case::exactly_on_due_date(date(2024, 1, 31), false)]
    #[case::one_day_after_due_date(date(2024, 2, 1), true)]
    #[case::long_after_due_date(date(2024, 6, 1), true)]
    fn test_overdue_boundary(#[case] today: NaiveDate, #[case] expected: bool) {
        let loan = open_loan(date(2024, 1, 1));
        assert_eq!(loan.is_overdue(today), expected);
    }

    #[test]
    fn test_returned_loan_is_never_overdue() {
        let mut loan = open_loan(date(2024, 1, 1));
        loan.return_date = Some(date(2024, 5, 1)); // returned months late
        assert!(!loan.is_overdue(date(2024, 12, 31)));
    }

    #[test]
    fn test_iso_formatting() {
        let mut loan = open_loan(date(2024, 3, 5));
        assert_eq!(loan.loan_date_iso(), "2024-03-05");
        assert_eq!(loan.return_date_iso(), "");

        loan.return_date = Some(date(2024, 4, 1));
        assert_eq!(loan.return_date_iso(), "2024-04-01");
    }
}
