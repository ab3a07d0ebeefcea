use sqlx::PgConnection;

use kernel::interface::query::AuthorQuery;
use kernel::interface::update::AuthorModifier;
use kernel::prelude::entity::{
    Author, AuthorDraft, AuthorId, AuthorName, AuthorNationality, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        PgAuthorInternal::find_all(con, limit, offset).await
    }
}

#[async_trait::async_trait]
impl AuthorModifier for PostgresAuthorRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError> {
        PgAuthorInternal::create(con, draft).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        PgAuthorInternal::update(con, id, draft).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        PgAuthorInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    nationality: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author::new(
            AuthorId::new(row.id),
            AuthorName::new(row.name),
            AuthorNationality::new(row.nationality),
        )
    }
}

pub(in crate::database) struct PgAuthorInternal;

impl PgAuthorInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, name, nationality
            FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            SELECT id, name, nationality
            FROM authors
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(u32::from(*limit)))
        .bind(i64::from(u32::from(*offset)))
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            INSERT INTO authors (name, nationality)
            VALUES ($1, $2)
            RETURNING id, name, nationality
            "#,
        )
        .bind(draft.name().as_ref())
        .bind(draft.nationality().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        tracing::debug!(id = row.id, "author inserted");
        Ok(Author::from(row))
    }

    async fn update(
        con: &mut PgConnection,
        id: &AuthorId,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let row = sqlx::query_as::<_, AuthorRow>(
            // language=postgresql
            r#"
            UPDATE authors
            SET name = $2, nationality = $3
            WHERE id = $1
            RETURNING id, name, nationality
            "#,
        )
        .bind(id.as_ref())
        .bind(draft.name().as_ref())
        .bind(draft.nationality().as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Author::from))
    }

    async fn delete(con: &mut PgConnection, id: &AuthorId) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM authors
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::AuthorQuery;
    use kernel::interface::update::AuthorModifier;
    use kernel::prelude::entity::{
        AuthorDraft, AuthorId, AuthorName, AuthorNationality, SelectLimit, SelectOffset,
    };
    use kernel::KernelError;

    use crate::database::postgres::author::PostgresAuthorRepository;
    use crate::database::postgres::PostgresDatabase;

    fn draft(name: &str, nationality: &str) -> AuthorDraft {
        AuthorDraft::new(AuthorName::new(name), AuthorNationality::new(nationality))
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn crud() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let author = PostgresAuthorRepository
            .create(&mut con, &draft("Jane Doe", "US"))
            .await?;
        let id = *author.id();

        let found = PostgresAuthorRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(author));

        let updated = PostgresAuthorRepository
            .update(&mut con, &id, &draft("John Roe", "UK"))
            .await?;
        let found = PostgresAuthorRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, updated);
        let found = found.expect("updated author exists");
        assert_eq!(found.name(), &AuthorName::new("John Roe"));
        assert_eq!(found.nationality(), &AuthorNationality::new("UK"));

        assert!(PostgresAuthorRepository.delete(&mut con, &id).await?);
        let found = PostgresAuthorRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());
        assert!(!PostgresAuthorRepository.delete(&mut con, &id).await?);

        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn update_missing_returns_none() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let id = AuthorId::new(-1);

        let updated = PostgresAuthorRepository
            .update(&mut con, &id, &draft("ghost", "nowhere"))
            .await?;
        assert!(updated.is_none());
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn find_all_keeps_insertion_order() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let mut created = Vec::new();
        for i in 0..3 {
            let author = PostgresAuthorRepository
                .create(&mut con, &draft(&format!("author-{i}"), "JP"))
                .await?;
            created.push(author);
        }

        let all = PostgresAuthorRepository
            .find_all(&mut con, &SelectLimit::new(u32::MAX), &SelectOffset::default())
            .await?;
        let tail = &all[all.len() - 3..];
        assert_eq!(tail, created.as_slice());

        Ok(())
    }
}
