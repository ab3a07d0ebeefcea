use crate::controller::Intake;
use application::transfer::{
    CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto, UpdateAuthorDto,
};
use kernel::prelude::entity::{SelectLimit, SelectOffset};
use serde::Deserialize;

/// Body of both `POST /authors/` and `PUT /authors/:id`.
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    name: String,
    nationality: String,
}

#[derive(Debug)]
pub struct DeleteAuthorRequest {
    id: i64,
}

impl DeleteAuthorRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

// I want to use primitive type(u32) in these fields, but default attribute not supported for literals(https://github.com/serde-rs/serde/issues/368)
#[derive(Debug, Deserialize)]
pub struct GetAllAuthorRequest {
    #[serde(default)]
    skip: SelectOffset,
    #[serde(default)]
    limit: SelectLimit,
}

#[derive(Debug)]
pub struct GetAuthorRequest {
    id: i64,
}

impl GetAuthorRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct AuthorTransformer;

impl Intake<CreateAuthorRequest> for AuthorTransformer {
    type To = CreateAuthorDto;
    fn emit(&self, input: CreateAuthorRequest) -> Self::To {
        CreateAuthorDto {
            name: input.name,
            nationality: input.nationality,
        }
    }
}

impl Intake<(i64, CreateAuthorRequest)> for AuthorTransformer {
    type To = UpdateAuthorDto;
    fn emit(&self, (id, input): (i64, CreateAuthorRequest)) -> Self::To {
        UpdateAuthorDto {
            id,
            name: input.name,
            nationality: input.nationality,
        }
    }
}

impl Intake<DeleteAuthorRequest> for AuthorTransformer {
    type To = DeleteAuthorDto;
    fn emit(&self, input: DeleteAuthorRequest) -> Self::To {
        DeleteAuthorDto { id: input.id }
    }
}

impl Intake<GetAuthorRequest> for AuthorTransformer {
    type To = GetAuthorDto;
    fn emit(&self, input: GetAuthorRequest) -> Self::To {
        GetAuthorDto { id: input.id }
    }
}

impl Intake<GetAllAuthorRequest> for AuthorTransformer {
    type To = GetAllAuthorDto;
    fn emit(&self, input: GetAllAuthorRequest) -> Self::To {
        GetAllAuthorDto {
            limit: input.limit,
            offset: input.skip,
        }
    }
}
