use crate::controller::Intake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;

/// Body of both `POST /books/` and `PUT /books/:id`.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    published_year: i32,
    author_id: i64,
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetAllBookRequest {
    author_id: Option<i64>,
    #[serde(default)]
    skip: SelectOffset,
    #[serde(default)]
    limit: SelectLimit,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            published_year: input.published_year,
            author_id: input.author_id,
        }
    }
}

impl Intake<(i64, CreateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, (id, input): (i64, CreateBookRequest)) -> Self::To {
        UpdateBookDto {
            id,
            title: input.title,
            published_year: input.published_year,
            author_id: input.author_id,
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<GetAllBookRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: GetAllBookRequest) -> Self::To {
        GetAllBookDto {
            author_id: input.author_id,
            limit: input.limit,
            offset: input.skip,
        }
    }
}
