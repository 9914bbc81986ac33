use error_stack::Report;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookDraft, BookId};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, DeletedBookDto, GetBookDto, UpdateBookDto,
    UpdatedBookDto,
};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(
        &self,
        dto: &GetBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait GetAllBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let books = self.book_query().find_all(&mut connection).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> GetAllBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookId, KernelError> {
        let draft = BookDraft::from(dto);
        draft
            .validate()
            .map_err(|field| Report::new(KernelError::Invalid(field)))?;

        let mut connection = self.database_connection().acquire().await?;
        let id = self.book_modifier().create(&mut connection, &draft).await?;

        tracing::info!(id = i64::from(id), "Inserted a single record");
        Ok(id)
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait UpdateBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn update_book(
        &self,
        dto: UpdateBookDto,
    ) -> error_stack::Result<UpdatedBookDto, KernelError> {
        let book = Book::from(dto);
        book.validate()
            .map_err(|field| Report::new(KernelError::Invalid(field)))?;

        let mut connection = self.database_connection().acquire().await?;
        let rows = self.book_modifier().update(&mut connection, &book).await?;

        let id = i64::from(*book.id());
        let rows_affected = u64::from(rows);
        tracing::info!(id, rows_affected, "Updated book");
        Ok(UpdatedBookDto { id, rows_affected })
    }
}

impl<T> UpdateBookService for T where T: DependOnBookModifier {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<DeletedBookDto, KernelError> {
        let mut connection = self.database_connection().acquire().await?;

        let id = BookId::new(dto.id);
        let rows = self.book_modifier().delete(&mut connection, &id).await?;

        let rows_affected = u64::from(rows);
        tracing::info!(id = dto.id, rows_affected, "Deleted book");
        Ok(DeletedBookDto {
            id: dto.id,
            rows_affected,
        })
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}
