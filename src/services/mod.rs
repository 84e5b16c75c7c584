//! Services Layer
//!
//! Pure business logic extracted from HTTP handlers. Nothing here touches
//! the repositories or the clock unless asked to.

pub mod issued_books;
pub mod subscription;

// Re-export for convenience
pub use issued_books::issued_books;
pub use subscription::{current_subscription_report, subscription_report};
