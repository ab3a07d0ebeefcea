use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{AuthorId, BookDraft, BookId, BookPublishedYear, BookTitle};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetAllBookDto, GetBookDto, UpdateBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let author_id = dto.author_id.filter(|id| *id != 0).map(AuthorId::new);
        let books = self
            .book_query()
            .find_all(&mut connection, author_id.as_ref(), &dto.limit, &dto.offset)
            .await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnAuthorQuery
{
    /// Fails with [`KernelError::NotFound`] when the referenced author does not exist.
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let draft = BookDraft::from(dto);
        if self
            .author_query()
            .find_by_id(&mut connection, draft.author_id())
            .await?
            .is_none()
        {
            return Err(missing_author(draft.author_id()));
        }

        let book = self.book_modifier().create(&mut connection, &draft).await?;
        connection.commit().await?;

        tracing::info!(id = i64::from(*book.id()), "book created");
        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier + DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnBookQuery + DependOnAuthorQuery
{
    /// Overwrites every field, the owning author included.
    ///
    /// Returns `None` when the book does not exist. A missing target author is reported as
    /// [`KernelError::NotFound`] only after the book itself was found.
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        if self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let draft = BookDraft::new(
            BookTitle::new(dto.title),
            BookPublishedYear::new(dto.published_year),
            AuthorId::new(dto.author_id),
        );
        if self
            .author_query()
            .find_by_id(&mut connection, draft.author_id())
            .await?
            .is_none()
        {
            return Err(missing_author(draft.author_id()));
        }

        let book = self
            .book_modifier()
            .update(&mut connection, &id, &draft)
            .await?;
        connection.commit().await?;

        tracing::info!(id = i64::from(id), "book updated");
        Ok(book.map(BookDto::from))
    }
}

impl<T> UpdateBookService for T where
    T: DependOnBookModifier + DependOnBookQuery + DependOnAuthorQuery
{
}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let deleted = self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        if deleted {
            tracing::info!(id = i64::from(id), "book deleted");
        }
        Ok(deleted)
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}

fn missing_author(id: &AuthorId) -> Report<KernelError> {
    Report::new(KernelError::NotFound("Author"))
        .attach_printable(format!("Book references author {}", i64::from(*id)))
}
