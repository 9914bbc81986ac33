use crate::database::{DatabaseConnection, DependOnDatabaseConnection};
use crate::entity::{Book, BookDraft, BookId, RowsAffected};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier: 'static + Sync + Send {
    type Connection: 'static + Send;
    /// Stores the draft and returns the id assigned by the database.
    async fn create(
        &self,
        con: &mut Self::Connection,
        book: &BookDraft,
    ) -> error_stack::Result<BookId, KernelError>;
    async fn update(
        &self,
        con: &mut Self::Connection,
        book: &Book,
    ) -> error_stack::Result<RowsAffected, KernelError>;
    async fn delete(
        &self,
        con: &mut Self::Connection,
        book_id: &BookId,
    ) -> error_stack::Result<RowsAffected, KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookModifier: BookModifier<
        Connection = <Self::DatabaseConnection as DatabaseConnection>::Connection,
    >;
    fn book_modifier(&self) -> &Self::BookModifier;
}
