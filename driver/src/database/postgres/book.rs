use sqlx::PgConnection;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    AuthorId, Book, BookDraft, BookId, BookPublishedYear, BookTitle, SelectLimit, SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresConnection,
        author_id: Option<&AuthorId>,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, author_id, limit, offset).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Transaction = PostgresConnection;

    async fn create(
        &self,
        con: &mut PostgresConnection,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        PgBookInternal::create(con, draft).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
        draft: &BookDraft,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::update(con, id, draft).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        PgBookInternal::delete(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    published_year: i32,
    author_id: i64,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookPublishedYear::new(value.published_year),
            AuthorId::new(value.author_id),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, published_year, author_id
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        author_id: Option<&AuthorId>,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, published_year, author_id
            FROM books
            WHERE $1::BIGINT IS NULL OR author_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(author_id.map(|id| i64::from(*id)))
        .bind(i64::from(u32::from(*limit)))
        .bind(i64::from(u32::from(*offset)))
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn create(con: &mut PgConnection, draft: &BookDraft) -> error_stack::Result<Book, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            INSERT INTO books (title, published_year, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, published_year, author_id
            "#,
        )
        .bind(draft.title().as_ref())
        .bind(draft.published_year().as_ref())
        .bind(draft.author_id().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        tracing::debug!(id = row.id, author_id = row.author_id, "book inserted");
        Ok(Book::from(row))
    }

    async fn update(
        con: &mut PgConnection,
        id: &BookId,
        draft: &BookDraft,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            UPDATE books
            SET title = $2, published_year = $3, author_id = $4
            WHERE id = $1
            RETURNING id, title, published_year, author_id
            "#,
        )
        .bind(id.as_ref())
        .bind(draft.title().as_ref())
        .bind(draft.published_year().as_ref())
        .bind(draft.author_id().as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn delete(con: &mut PgConnection, id: &BookId) -> error_stack::Result<bool, KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            DELETE FROM books
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
