//! In-memory store implementing the kernel interfaces, used to exercise the services
//! without a running PostgreSQL.

use std::collections::BTreeMap;
use std::sync::Arc;

use error_stack::Report;
use tokio::sync::RwLock;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{AuthorQuery, BookQuery, DependOnAuthorQuery, DependOnBookQuery};
use kernel::interface::update::{
    AuthorModifier, BookModifier, DependOnAuthorModifier, DependOnBookModifier,
};
use kernel::prelude::entity::{
    Author, AuthorDraft, AuthorId, Book, BookDraft, BookId, SelectLimit, SelectOffset,
};
use kernel::KernelError;

#[derive(Debug, Default)]
struct Tables {
    authors: BTreeMap<AuthorId, Author>,
    books: BTreeMap<BookId, Book>,
    author_sequence: i64,
    book_sequence: i64,
    commits: usize,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    pub async fn commits(&self) -> usize {
        self.tables.read().await.commits
    }

    pub async fn snapshot_authors(&self) -> Vec<Author> {
        self.tables.read().await.authors.values().cloned().collect()
    }
}

/// Writes land immediately; `commit` only counts.
pub struct MemoryTransaction {
    tables: Arc<RwLock<Tables>>,
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        Ok(MemoryTransaction {
            tables: Arc::clone(&self.tables),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.tables.write().await.commits += 1;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

fn page<T>(items: impl Iterator<Item = T>, limit: &SelectLimit, offset: &SelectOffset) -> Vec<T> {
    items
        .skip(u32::from(*offset) as usize)
        .take(u32::from(*limit) as usize)
        .collect()
}

pub struct MemoryAuthorRepository;

#[async_trait::async_trait]
impl AuthorQuery for MemoryAuthorRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        Ok(con.tables.read().await.authors.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Author>, KernelError> {
        let tables = con.tables.read().await;
        Ok(page(tables.authors.values().cloned(), limit, offset))
    }
}

#[async_trait::async_trait]
impl AuthorModifier for MemoryAuthorRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError> {
        let mut tables = con.tables.write().await;
        tables.author_sequence += 1;
        let author = draft.clone().into_author(AuthorId::new(tables.author_sequence));
        tables.authors.insert(*author.id(), author.clone());
        Ok(author)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        id: &AuthorId,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Option<Author>, KernelError> {
        let mut tables = con.tables.write().await;
        Ok(tables.authors.get_mut(id).map(|author| {
            *author = draft.clone().into_author(*id);
            author.clone()
        }))
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError> {
        let mut tables = con.tables.write().await;
        if tables.books.values().any(|book| book.author_id() == id) {
            return Err(Report::new(KernelError::Conflict));
        }
        Ok(tables.authors.remove(id).is_some())
    }
}

pub struct MemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.tables.read().await.books.get(id).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
        author_id: Option<&AuthorId>,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let tables = con.tables.read().await;
        let books = tables
            .books
            .values()
            .filter(|book| author_id.map_or(true, |id| book.author_id() == id))
            .cloned();
        Ok(page(books, limit, offset))
    }
}

#[async_trait::async_trait]
impl BookModifier for MemoryBookRepository {
    type Transaction = MemoryTransaction;

    async fn create(
        &self,
        con: &mut MemoryTransaction,
        draft: &BookDraft,
    ) -> error_stack::Result<Book, KernelError> {
        let mut tables = con.tables.write().await;
        if !tables.authors.contains_key(draft.author_id()) {
            return Err(Report::new(KernelError::Conflict));
        }
        tables.book_sequence += 1;
        let book = draft.clone().into_book(BookId::new(tables.book_sequence));
        tables.books.insert(*book.id(), book.clone());
        Ok(book)
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
        draft: &BookDraft,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let mut tables = con.tables.write().await;
        if !tables.authors.contains_key(draft.author_id()) {
            return Err(Report::new(KernelError::Conflict));
        }
        Ok(tables.books.get_mut(id).map(|book| {
            *book = draft.clone().into_book(*id);
            book.clone()
        }))
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con.tables.write().await.books.remove(id).is_some())
    }
}

impl DependOnAuthorQuery for MemoryDatabase {
    type AuthorQuery = MemoryAuthorRepository;
    fn author_query(&self) -> &Self::AuthorQuery {
        &MemoryAuthorRepository
    }
}

impl DependOnAuthorModifier for MemoryDatabase {
    type AuthorModifier = MemoryAuthorRepository;
    fn author_modifier(&self) -> &Self::AuthorModifier {
        &MemoryAuthorRepository
    }
}

impl DependOnBookQuery for MemoryDatabase {
    type BookQuery = MemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &MemoryBookRepository
    }
}

impl DependOnBookModifier for MemoryDatabase {
    type BookModifier = MemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &MemoryBookRepository
    }
}
