//! Books API handlers.
//!
//! ```text
//! GET /book
//! ```

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Book, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Authenticated;
use crate::inbound::http::state::HttpState;

/// Catalogue entry as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Voluptatem quia et aut.")]
    pub title: String,
    #[schema(example = "Jayne Sporer")]
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id().get(),
            created_at: book.created_at(),
            title: book.title().as_ref().to_owned(),
            author: book.author().as_ref().to_owned(),
        }
    }
}

/// List every book in the catalogue, ordered by id.
#[utoipa::path(
    get,
    path = "/book",
    responses(
        (status = 200, description = "Books", body = [BookResponse]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Data store unavailable", body = Error)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/book")]
pub async fn list_books(
    user: Authenticated,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<BookResponse>>> {
    let books = state.books.list_books(&user.user_id()).await?;
    Ok(web::Json(books.into_iter().map(BookResponse::from).collect()))
}
