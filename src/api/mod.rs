pub mod books;
pub mod extract;
pub mod health;
pub mod response;
pub mod users;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Landing & health
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Reports
        .route("/books/issued/for-users", get(books::issued_for_users))
        .route(
            "/books/subscription-details/:id",
            get(books::subscription_details),
        )
        .with_state(state)
}
