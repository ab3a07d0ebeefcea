use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Author, AuthorDraft, AuthorId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AuthorModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Author, KernelError>;
    /// Returns `None` when no author has this id.
    async fn update(
        &self,
        con: &mut Self::Transaction,
        id: &AuthorId,
        draft: &AuthorDraft,
    ) -> error_stack::Result<Option<Author>, KernelError>;
    /// Returns `false` when no author has this id.
    async fn delete(
        &self,
        con: &mut Self::Transaction,
        id: &AuthorId,
    ) -> error_stack::Result<bool, KernelError>;
}

pub trait DependOnAuthorModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AuthorModifier: AuthorModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn author_modifier(&self) -> &Self::AuthorModifier;
}
