use kernel::prelude::entity::{
    Author, AuthorDraft, AuthorName, AuthorNationality, DestructAuthor, SelectLimit,
    SelectOffset,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: i64,
    pub name: String,
    pub nationality: String,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor {
            id,
            name,
            nationality,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            nationality: nationality.into(),
        }
    }
}

pub struct GetAuthorDto {
    pub id: i64,
}

pub struct GetAllAuthorDto {
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateAuthorDto {
    pub name: String,
    pub nationality: String,
}

impl From<CreateAuthorDto> for AuthorDraft {
    fn from(value: CreateAuthorDto) -> Self {
        AuthorDraft::new(
            AuthorName::new(value.name),
            AuthorNationality::new(value.nationality),
        )
    }
}

/// Replaces every field of the author with `id`.
pub struct UpdateAuthorDto {
    pub id: i64,
    pub name: String,
    pub nationality: String,
}

pub struct DeleteAuthorDto {
    pub id: i64,
}
