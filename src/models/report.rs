//! Read-only views computed on demand. Never stored.

use serde::{Serialize, Serializer};

use super::{Book, User};

/// Placeholder emitted instead of a loan status when the user holds no book
pub const NO_BOOK_ISSUED: &str = "No book issued";

/// Subscription and loan status of one user at a given day
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionReport {
    #[serde(flatten)]
    pub user: User,
    pub subscription_expired: bool,
    pub days_left_for_subscription: i64,
    pub issued_book_status: IssuedBookStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IssuedBookStatus {
    NoBookIssued,
    Issued(LoanStatus),
}

// Serialized as a bare string or an object, never as a tagged enum
impl Serialize for IssuedBookStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IssuedBookStatus::NoBookIssued => serializer.serialize_str(NO_BOOK_ISSUED),
            IssuedBookStatus::Issued(status) => status.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanStatus {
    pub days_left_for_return: i64,
    pub return_status: ReturnStatus,
    pub fine: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReturnStatus {
    #[serde(rename = "Book return date has passed")]
    Passed,
    #[serde(rename = "Book return date not yet passed")]
    NotYetPassed,
}

/// A catalog book currently on loan, with its borrower
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedBookView {
    #[serde(flatten)]
    pub book: Book,
    pub issued_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}
