use std::time::Duration;

use error_stack::{Report, ResultExt};
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, Pool, Postgres};
use time::macros::date;

use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::prelude::entity::{
    BookAuthor, BookDraft, BookPublisher, BookRating, BookStatus, BookTitle, PublishDate,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

use self::book::PgBookInternal;
pub use self::book::*;

mod book;

static POSTGRES_URL: &str = "POSTGRES_URL";
static RESET_DB: &str = "RESET_DB";

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub type PostgresConnection = PoolConnection<Postgres>;

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = PgPoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(&url)
            .await
            .convert_error()
            .attach_printable("Failed to connect postgres")?;
        Ok(Self { pool })
    }

    /// Builds the pool without opening a connection until one is first acquired.
    pub fn connect_lazy(url: &str) -> error_stack::Result<Self, KernelError> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(url)
            .convert_error()
            .attach_printable("Invalid postgres url")?;
        Ok(Self { pool })
    }

    /// Whether `RESET_DB=true` asks for the seed data to be restored on startup.
    pub fn reset_requested() -> bool {
        dotenvy::var(RESET_DB).is_ok_and(|value| value.eq_ignore_ascii_case("true"))
    }

    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        let mut con = self.acquire().await?;
        sqlx::query(
            // language=postgresql
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id           BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
                title        VARCHAR NOT NULL,
                author       VARCHAR NOT NULL,
                publisher    VARCHAR NOT NULL,
                publish_date DATE    NOT NULL,
                rating       INTEGER NOT NULL,
                status       VARCHAR NOT NULL
            )
            "#,
        )
        .execute(&mut *con)
        .await
        .convert_error()
        .attach_printable("Failed to create books table")?;
        Ok(())
    }

    /// Empties the table, restarts ids at 1 and stores the two known seed rows.
    pub async fn reset(&self) -> error_stack::Result<(), KernelError> {
        let mut con = self.acquire().await?;
        sqlx::query(
            // language=postgresql
            r#"
            TRUNCATE TABLE books RESTART IDENTITY
            "#,
        )
        .execute(&mut *con)
        .await
        .convert_error()
        .attach_printable("Failed to truncate books table")?;

        for seed in seeds() {
            PgBookInternal::create(&mut con, &seed).await?;
        }
        tracing::info!("Reset books table with seed data");
        Ok(())
    }
}

fn seeds() -> [BookDraft; 2] {
    [
        BookDraft::new(
            BookTitle::new("test"),
            BookAuthor::new("test"),
            BookPublisher::new("test"),
            PublishDate::new(date!(2020 - 01 - 01)),
            BookRating::new(1),
            BookStatus::CheckedIn,
        ),
        BookDraft::new(
            BookTitle::new("test2"),
            BookAuthor::new("test2"),
            BookPublisher::new("test2"),
            PublishDate::new(date!(2021 - 01 - 02)),
            BookRating::new(3),
            BookStatus::CheckedOut,
        ),
    ]
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Connection = PostgresConnection;
    async fn acquire(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let con = self.pool.acquire().await.convert_error()?;
        Ok(con)
    }
}

impl DependOnBookQuery for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl<T> ConvertError for Result<T, Error>
where
    T: 'static,
{
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}
