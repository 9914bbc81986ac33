use time::Date;

use kernel::prelude::entity::{
    Book, BookAuthor, BookDraft, BookId, BookPublisher, BookRating, BookStatus, BookTitle,
    DestructBook, PublishDate,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: Date,
    pub rating: i32,
    pub status: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            publisher,
            publish_date,
            rating,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            publish_date: publish_date.into(),
            rating: rating.into(),
            status: status.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: Date,
    pub rating: i32,
    pub status: String,
}

impl From<CreateBookDto> for BookDraft {
    fn from(value: CreateBookDto) -> Self {
        BookDraft::new(
            BookTitle::new(value.title),
            BookAuthor::new(value.author),
            BookPublisher::new(value.publisher),
            PublishDate::new(value.publish_date),
            BookRating::new(value.rating),
            BookStatus::new(value.status),
        )
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publish_date: Date,
    pub rating: i32,
    pub status: String,
}

impl From<UpdateBookDto> for Book {
    fn from(value: UpdateBookDto) -> Self {
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

pub struct DeleteBookDto {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedBookDto {
    pub id: i64,
    pub rows_affected: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedBookDto {
    pub id: i64,
    pub rows_affected: u64,
}
