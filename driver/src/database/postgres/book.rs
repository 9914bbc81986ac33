use sqlx::PgConnection;
use time::Date;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{
    Book, BookAuthor, BookDraft, BookId, BookPublisher, BookRating, BookStatus, BookTitle,
    PublishDate, RowsAffected,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Connection = PostgresConnection;
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
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con).await
    }
}

#[async_trait::async_trait]
impl BookModifier for PostgresBookRepository {
    type Connection = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        book: &BookDraft,
    ) -> error_stack::Result<BookId, KernelError> {
        PgBookInternal::create(con, book).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        book: &Book,
    ) -> error_stack::Result<RowsAffected, KernelError> {
        PgBookInternal::update(con, book).await
    }

    async fn delete(
        &self,
        con: &mut PostgresConnection,
        book_id: &BookId,
    ) -> error_stack::Result<RowsAffected, KernelError> {
        PgBookInternal::delete(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    publisher: String,
    publish_date: Date,
    rating: i32,
    status: String,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            BookPublisher::new(value.publisher),
            PublishDate::new(value.publish_date),
            BookRating::new(value.rating),
            BookStatus::new(value.status),
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
            SELECT id, title, author, publisher, publish_date, rating, status
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        if row.is_none() {
            tracing::debug!(id = i64::from(*id), "No rows were returned");
        }
        let found = row.map(Book::from);
        Ok(found)
    }

    async fn find_all(con: &mut PgConnection) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT id, title, author, publisher, publish_date, rating, status
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    pub(super) async fn create(
        con: &mut PgConnection,
        book: &BookDraft,
    ) -> error_stack::Result<BookId, KernelError> {
        let id = sqlx::query_scalar::<_, i64>(
            // language=postgresql
            r#"
            INSERT INTO books (title, author, publisher, publish_date, rating, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.publish_date().as_ref())
        .bind(book.rating().as_ref())
        .bind(book.status().as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(BookId::new(id))
    }

    async fn update(
        con: &mut PgConnection,
        book: &Book,
    ) -> error_stack::Result<RowsAffected, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE books
            SET title = $2, author = $3, publisher = $4, publish_date = $5, rating = $6, status = $7
            WHERE id = $1
            "#,
        )
        .bind(book.id().as_ref())
        .bind(book.title().as_ref())
        .bind(book.author().as_ref())
        .bind(book.publisher().as_ref())
        .bind(book.publish_date().as_ref())
        .bind(book.rating().as_ref())
        .bind(book.status().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(RowsAffected::new(result.rows_affected()))
    }

    async fn delete(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<RowsAffected, KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(book_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(RowsAffected::new(result.rows_affected()))
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        BookAuthor, BookDraft, BookId, BookPublisher, BookRating, BookStatus, BookTitle,
        PublishDate,
    };
    use kernel::KernelError;

    use crate::database::postgres::book::PostgresBookRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        db.reset().await?;
        let mut con = db.acquire().await?;

        let seeded = PostgresBookRepository.find_all(&mut con).await?;
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].title(), &BookTitle::new("test"));
        assert_eq!(seeded[0].status(), &BookStatus::CheckedIn);
        assert_eq!(seeded[1].title(), &BookTitle::new("test2"));
        assert_eq!(seeded[1].rating(), &BookRating::new(3));

        let draft = BookDraft::new(
            BookTitle::new("Dune"),
            BookAuthor::new("Frank Herbert"),
            BookPublisher::new("Dune Publisher"),
            PublishDate::new(date!(1965 - 01 - 01)),
            BookRating::new(3),
            BookStatus::CheckedIn,
        );
        let id = PostgresBookRepository.create(&mut con, &draft).await?;
        assert_eq!(id, BookId::new(3));

        let book = draft.into_book(id);
        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book.clone()));

        let book = book.reconstruct(|b| b.status = BookStatus::CheckedOut);
        let rows = PostgresBookRepository.update(&mut con, &book).await?;
        assert!(!rows.is_zero());
        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book.clone()));

        let missing = book.clone().reconstruct(|b| b.id = BookId::new(-1));
        let rows = PostgresBookRepository.update(&mut con, &missing).await?;
        assert!(rows.is_zero());

        let rows = PostgresBookRepository.delete(&mut con, &id).await?;
        assert_eq!(u64::from(rows), 1);
        let rows = PostgresBookRepository.delete(&mut con, &id).await?;
        assert!(rows.is_zero());
        let found = PostgresBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }
}
