pub mod book;
pub mod ids;
pub mod report;
pub mod user;

pub use book::{Book, BookCatalog};
pub use report::{IssuedBookStatus, IssuedBookView, LoanStatus, ReturnStatus, SubscriptionReport};
pub use user::{SubscriptionType, User, UserDirectory};
