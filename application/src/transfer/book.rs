use kernel::prelude::entity::{
    AuthorId, Book, BookDraft, BookPublishedYear, BookTitle, DestructBook, SelectLimit,
    SelectOffset,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub published_year: i32,
    pub author_id: i64,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            published_year,
            author_id,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            published_year: published_year.into(),
            author_id: author_id.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: i64,
}

pub struct GetAllBookDto {
    /// `None` or `Some(0)` lists books of every author.
    pub author_id: Option<i64>,
    pub limit: SelectLimit,
    pub offset: SelectOffset,
}

pub struct CreateBookDto {
    pub title: String,
    pub published_year: i32,
    pub author_id: i64,
}

impl From<CreateBookDto> for BookDraft {
    fn from(value: CreateBookDto) -> Self {
        BookDraft::new(
            BookTitle::new(value.title),
            BookPublishedYear::new(value.published_year),
            AuthorId::new(value.author_id),
        )
    }
}

pub struct UpdateBookDto {
    pub id: i64,
    pub title: String,
    pub published_year: i32,
    pub author_id: i64,
}

pub struct DeleteBookDto {
    pub id: i64,
}
