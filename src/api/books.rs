//! Book API handlers using repository pattern

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use serde_json::{Number, Value};

use super::extract::ApiJson;
use super::response::{domain_failure, failure, has_text, success, success_with_message};
use crate::domain::Patch;
use crate::infrastructure::AppState;
use crate::models::Book;
use crate::models::ids::{id_from_value, parse_id};
use crate::services;

/// Request DTO for creating a book. Every field is required.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub id: Option<Value>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<Number>,
    pub year: Option<i32>,
}

impl CreateBookRequest {
    // Zero and empty values count as missing
    fn is_complete(&self) -> bool {
        let id_given = match &self.id {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(_) => true,
        };

        id_given
            && has_text(&self.title)
            && has_text(&self.author)
            && self.price.as_ref().is_some_and(|p| p.as_f64() != Some(0.0))
            && self.year.is_some_and(|y| y != 0)
    }
}

/// `PUT` body: `{ "data": { ...fields to overwrite } }`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub data: Patch,
}

fn not_found_for(id: &str) -> String {
    format!("Book not found for id: {}", id)
}

#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "All books in the catalog")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Response {
    match state.book_repo.find_all().await {
        Ok(books) => success(StatusCode::OK, books),
        Err(e) => domain_failure(e, "No books found"),
    }
}

#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let not_found = format!("Book with ID {} not found", id);
    let Some(book_id) = parse_id(&id) else {
        return failure(StatusCode::NOT_FOUND, not_found);
    };

    match state.book_repo.find_by_id(book_id).await {
        Ok(Some(book)) => success(StatusCode::OK, book),
        Ok(None) => failure(StatusCode::NOT_FOUND, not_found),
        Err(e) => domain_failure(e, not_found),
    }
}

#[utoipa::path(
    post,
    path = "/books",
    responses(
        (status = 201, description = "Book created"),
        (status = 400, description = "Missing fields, bad ID or duplicate ID")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBookRequest>,
) -> Response {
    if !payload.is_complete() {
        return failure(StatusCode::BAD_REQUEST, "Please provide all required fields");
    }

    let Some(id) = payload.id.as_ref().and_then(id_from_value) else {
        return failure(StatusCode::BAD_REQUEST, "ID must be a number");
    };

    match state.book_repo.find_by_id(id).await {
        Ok(Some(_)) => {
            return failure(
                StatusCode::BAD_REQUEST,
                format!("Book with ID {} already exists", id),
            );
        }
        Ok(None) => {}
        Err(e) => return domain_failure(e, not_found_for(&id.to_string())),
    }

    // Presence was checked above
    let (Some(title), Some(author), Some(price), Some(year)) =
        (payload.title, payload.author, payload.price, payload.year)
    else {
        return failure(StatusCode::BAD_REQUEST, "Please provide all required fields");
    };

    let book = Book {
        id,
        title,
        author,
        price,
        year,
    };

    match state.book_repo.create(book).await {
        Ok(book) => {
            tracing::info!("Book {} added to catalog", book.id);
            success(StatusCode::CREATED, book)
        }
        Err(e) => domain_failure(e, not_found_for(&id.to_string())),
    }
}

#[utoipa::path(
    put,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book updated; returns the whole catalog"),
        (status = 400, description = "Patch does not produce a valid book"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateRequest>,
) -> Response {
    let Some(book_id) = parse_id(&id) else {
        return failure(StatusCode::NOT_FOUND, not_found_for(&id));
    };

    if let Err(e) = state.book_repo.update(book_id, payload.data).await {
        tracing::warn!("Update of book {} rejected: {}", id, e);
        return domain_failure(e, not_found_for(&id));
    }
    tracing::info!("Book {} updated", book_id);

    match state.book_repo.find_all().await {
        Ok(books) => success_with_message(StatusCode::OK, "Book Updated Successfully", books),
        Err(e) => domain_failure(e, not_found_for(&id)),
    }
}

#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted; returns the remaining catalog"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(book_id) = parse_id(&id) else {
        return failure(StatusCode::NOT_FOUND, not_found_for(&id));
    };

    if let Err(e) = state.book_repo.delete(book_id).await {
        return domain_failure(e, not_found_for(&id));
    }
    tracing::info!("Book {} deleted", book_id);

    match state.book_repo.find_all().await {
        Ok(books) => success_with_message(StatusCode::OK, "Book Deleted Successfully", books),
        Err(e) => domain_failure(e, not_found_for(&id)),
    }
}

#[utoipa::path(
    get,
    path = "/books/issued/for-users",
    responses(
        (status = 200, description = "Books currently on loan, with borrower details"),
        (status = 404, description = "No books issued")
    )
)]
pub async fn issued_for_users(State(state): State<AppState>) -> Response {
    let users = match state.user_repo.find_all().await {
        Ok(users) => users,
        Err(e) => return domain_failure(e, "No Books Issued"),
    };
    let books = match state.book_repo.find_all().await {
        Ok(books) => books,
        Err(e) => return domain_failure(e, "No Books Issued"),
    };

    let issued = services::issued_books(&users, &books);
    if issued.is_empty() {
        return failure(StatusCode::NOT_FOUND, "No Books Issued");
    }

    success(StatusCode::OK, issued)
}

#[utoipa::path(
    get,
    path = "/books/subscription-details/{id}",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Subscription and fine report"),
        (status = 404, description = "User not found")
    )
)]
pub async fn subscription_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let not_found = format!("User not found for id: {}", id);

    match state.user_repo.find_by_id(&id).await {
        Ok(Some(user)) => success(StatusCode::OK, services::current_subscription_report(&user)),
        Ok(None) => failure(StatusCode::NOT_FOUND, not_found),
        Err(e) => domain_failure(e, not_found),
    }
}
