mod id;
mod published_year;
mod title;

pub use self::{id::*, published_year::*, title::*};
use crate::entity::AuthorId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    published_year: BookPublishedYear,
    author_id: AuthorId,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        published_year: BookPublishedYear,
        author_id: AuthorId,
    ) -> Self {
        Self {
            id,
            title,
            published_year,
            author_id,
        }
    }
}

/// Every writable field of a [`Book`], including the owning author.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct BookDraft {
    title: BookTitle,
    published_year: BookPublishedYear,
    author_id: AuthorId,
}

impl BookDraft {
    pub fn new(title: BookTitle, published_year: BookPublishedYear, author_id: AuthorId) -> Self {
        Self {
            title,
            published_year,
            author_id,
        }
    }

    pub fn into_book(self, id: BookId) -> Book {
        Book::new(id, self.title, self.published_year, self.author_id)
    }
}
