use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, DependOnAuthorQuery};
use kernel::interface::update::{AuthorModifier, DependOnAuthorModifier};
use kernel::prelude::entity::{AuthorDraft, AuthorId, AuthorName, AuthorNationality};
use kernel::KernelError;

use crate::transfer::{
    AuthorDto, CreateAuthorDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto, UpdateAuthorDto,
};

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorQuery {
    async fn get_author(
        &self,
        dto: GetAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let author = self.author_query().find_by_id(&mut connection, &id).await?;

        Ok(author.map(AuthorDto::from))
    }

    async fn get_all_authors(
        &self,
        dto: GetAllAuthorDto,
    ) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let authors = self
            .author_query()
            .find_all(&mut connection, &dto.limit, &dto.offset)
            .await?;

        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorQuery {}

#[async_trait::async_trait]
pub trait CreateAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    async fn create_author(
        &self,
        dto: CreateAuthorDto,
    ) -> error_stack::Result<AuthorDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let draft = AuthorDraft::from(dto);
        let author = self
            .author_modifier()
            .create(&mut connection, &draft)
            .await?;
        connection.commit().await?;

        tracing::info!(id = i64::from(*author.id()), "author created");
        Ok(AuthorDto::from(author))
    }
}

impl<T> CreateAuthorService for T where T: DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait UpdateAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    /// Overwrites every field. Returns `None` and changes nothing when the author does not exist.
    async fn update_author(
        &self,
        dto: UpdateAuthorDto,
    ) -> error_stack::Result<Option<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let draft = AuthorDraft::new(
            AuthorName::new(dto.name),
            AuthorNationality::new(dto.nationality),
        );
        let Some(author) = self
            .author_modifier()
            .update(&mut connection, &id, &draft)
            .await?
        else {
            connection.roll_back().await?;
            return Ok(None);
        };
        connection.commit().await?;

        tracing::info!(id = i64::from(id), "author updated");
        Ok(Some(AuthorDto::from(author)))
    }
}

impl<T> UpdateAuthorService for T where T: DependOnAuthorModifier {}

#[async_trait::async_trait]
pub trait DeleteAuthorService: 'static + Sync + Send + DependOnAuthorModifier {
    /// Fails with [`KernelError::Conflict`] while the author still owns books.
    async fn delete_author(&self, dto: DeleteAuthorDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = AuthorId::new(dto.id);
        let deleted = self.author_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        if deleted {
            tracing::info!(id = i64::from(id), "author deleted");
        }
        Ok(deleted)
    }
}

impl<T> DeleteAuthorService for T where T: DependOnAuthorModifier {}

#[cfg(test)]
mod test {
    use kernel::prelude::entity::{SelectLimit, SelectOffset};
    use kernel::KernelError;

    use crate::memory::MemoryDatabase;
    use crate::service::{
        CreateAuthorService, CreateBookService, DeleteAuthorService, GetAuthorService,
        UpdateAuthorService,
    };
    use crate::transfer::{
        CreateAuthorDto, CreateBookDto, DeleteAuthorDto, GetAllAuthorDto, GetAuthorDto,
        UpdateAuthorDto,
    };

    fn jane() -> CreateAuthorDto {
        CreateAuthorDto {
            name: "Jane Doe".to_string(),
            nationality: "US".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_yields_equal_record() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();

        let created = db.create_author(jane()).await?;
        assert_eq!(created.name, "Jane Doe");
        assert_eq!(created.nationality, "US");
        assert_eq!(db.commits().await, 1);

        let found = db.get_author(GetAuthorDto { id: created.id }).await?;
        assert_eq!(found, Some(created));
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_is_none() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let found = db.get_author(GetAuthorDto { id: 42 }).await?;
        assert!(found.is_none());
        assert_eq!(db.commits().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn list_pages_in_creation_order() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let mut created = Vec::new();
        for i in 0..15 {
            let author = db
                .create_author(CreateAuthorDto {
                    name: format!("author-{i}"),
                    nationality: "JP".to_string(),
                })
                .await?;
            created.push(author);
        }

        let first = db
            .get_all_authors(GetAllAuthorDto {
                limit: SelectLimit::default(),
                offset: SelectOffset::default(),
            })
            .await?;
        assert_eq!(first, created[..10]);

        let rest = db
            .get_all_authors(GetAllAuthorDto {
                limit: SelectLimit::new(10u32),
                offset: SelectOffset::new(10u32),
            })
            .await?;
        assert_eq!(rest, created[10..]);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_every_field() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let created = db.create_author(jane()).await?;

        let updated = db
            .update_author(UpdateAuthorDto {
                id: created.id,
                name: "Juana Doe".to_string(),
                nationality: "MX".to_string(),
            })
            .await?
            .expect("author exists");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Juana Doe");
        assert_eq!(updated.nationality, "MX");

        let found = db.get_author(GetAuthorDto { id: created.id }).await?;
        assert_eq!(found, Some(updated));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_leaves_store_unchanged() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let created = db.create_author(jane()).await?;
        let before = db.snapshot_authors().await;

        let updated = db
            .update_author(UpdateAuthorDto {
                id: created.id + 1,
                name: "ghost".to_string(),
                nationality: "??".to_string(),
            })
            .await?;
        assert!(updated.is_none());
        assert_eq!(db.snapshot_authors().await, before);
        assert_eq!(db.commits().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_none() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let created = db.create_author(jane()).await?;

        assert!(db.delete_author(DeleteAuthorDto { id: created.id }).await?);
        let found = db.get_author(GetAuthorDto { id: created.id }).await?;
        assert!(found.is_none());

        assert!(!db.delete_author(DeleteAuthorDto { id: created.id }).await?);
        Ok(())
    }

    #[tokio::test]
    async fn delete_with_books_is_conflict() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::default();
        let author = db.create_author(jane()).await?;
        db.create_book(CreateBookDto {
            title: "Owned".to_string(),
            published_year: 2000,
            author_id: author.id,
        })
        .await?;

        let error = db
            .delete_author(DeleteAuthorDto { id: author.id })
            .await
            .expect_err("author still owns a book");
        assert!(matches!(error.current_context(), KernelError::Conflict));

        let found = db.get_author(GetAuthorDto { id: author.id }).await?;
        assert_eq!(found, Some(author));
        Ok(())
    }
}
