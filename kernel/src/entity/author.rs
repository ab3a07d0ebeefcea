mod id;
mod name;
mod nationality;

pub use self::{id::*, name::*, nationality::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    nationality: AuthorNationality,
}

impl Author {
    pub fn new(id: AuthorId, name: AuthorName, nationality: AuthorNationality) -> Self {
        Self {
            id,
            name,
            nationality,
        }
    }
}

/// Every writable field of an [`Author`]. The store assigns the id on insert,
/// and an update overwrites all of these at once.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct AuthorDraft {
    name: AuthorName,
    nationality: AuthorNationality,
}

impl AuthorDraft {
    pub fn new(name: AuthorName, nationality: AuthorNationality) -> Self {
        Self { name, nationality }
    }

    pub fn into_author(self, id: AuthorId) -> Author {
        Author::new(id, self.name, self.nationality)
    }
}
