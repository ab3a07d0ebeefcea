use crate::controller::Exhaust;
use crate::response::{MessageResponse, NotFoundResponse};
use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

static BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i64,
    title: String,
    published_year: i32,
    author_id: i64,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            published_year: value.published_year,
            author_id: value.author_id,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Result<BookResponse, NotFoundResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input
            .map(BookResponse::from)
            .ok_or_else(|| NotFoundResponse::new(BOOK_NOT_FOUND))
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}

impl Exhaust<bool> for BookPresenter {
    type To = Result<MessageResponse, NotFoundResponse>;
    fn emit(&self, deleted: bool) -> Self::To {
        if deleted {
            Ok(MessageResponse::new("Book deleted successfully"))
        } else {
            Err(NotFoundResponse::new(BOOK_NOT_FOUND))
        }
    }
}
