use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::home,
        api::health::health_check,
        api::users::list_users,
        api::users::get_user,
        api::users::create_user,
        api::users::update_user,
        api::users::delete_user,
        api::books::list_books,
        api::books::get_book,
        api::books::create_book,
        api::books::update_book,
        api::books::delete_book,
        api::books::issued_for_users,
        api::books::subscription_details,
    ),
    tags(
        (name = "library-api", description = "Library books & members API")
    )
)]
pub struct ApiDoc;
