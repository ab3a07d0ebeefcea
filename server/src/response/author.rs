use crate::controller::Exhaust;
use crate::response::{MessageResponse, NotFoundResponse};
use application::transfer::AuthorDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

static AUTHOR_NOT_FOUND: &str = "Author not found";

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: i64,
    name: String,
    nationality: String,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            nationality: value.nationality,
        }
    }
}

impl IntoResponse for AuthorResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct AuthorPresenter;

impl Exhaust<AuthorDto> for AuthorPresenter {
    type To = AuthorResponse;
    fn emit(&self, input: AuthorDto) -> Self::To {
        AuthorResponse::from(input)
    }
}

impl Exhaust<Option<AuthorDto>> for AuthorPresenter {
    type To = Result<AuthorResponse, NotFoundResponse>;
    fn emit(&self, input: Option<AuthorDto>) -> Self::To {
        input
            .map(AuthorResponse::from)
            .ok_or_else(|| NotFoundResponse::new(AUTHOR_NOT_FOUND))
    }
}

impl Exhaust<Vec<AuthorDto>> for AuthorPresenter {
    type To = axum::Json<Vec<AuthorResponse>>;
    fn emit(&self, input: Vec<AuthorDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(AuthorResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}

impl Exhaust<bool> for AuthorPresenter {
    type To = Result<MessageResponse, NotFoundResponse>;
    fn emit(&self, deleted: bool) -> Self::To {
        if deleted {
            Ok(MessageResponse::new("Author deleted successfully"))
        } else {
            Err(NotFoundResponse::new(AUTHOR_NOT_FOUND))
        }
    }
}
