mod author;
mod id;
mod publish_date;
mod publisher;
mod rating;
mod status;
mod title;

pub use self::{
    author::*, id::*, publish_date::*, publisher::*, rating::*, status::*, title::*,
};
use crate::validation::{self, BookField};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    publisher: BookPublisher,
    publish_date: PublishDate,
    rating: BookRating,
    status: BookStatus,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        publisher: BookPublisher,
        publish_date: PublishDate,
        rating: BookRating,
        status: BookStatus,
    ) -> Self {
        Self {
            id,
            title,
            author,
            publisher,
            publish_date,
            rating,
            status,
        }
    }

    pub fn validate(&self) -> Result<(), BookField> {
        validation::check(
            &self.title,
            &self.author,
            &self.publisher,
            &self.rating,
            &self.status,
        )
    }
}

/// A book that has not been stored yet, so the database has not assigned its id.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct BookDraft {
    title: BookTitle,
    author: BookAuthor,
    publisher: BookPublisher,
    publish_date: PublishDate,
    rating: BookRating,
    status: BookStatus,
}

impl BookDraft {
    pub fn new(
        title: BookTitle,
        author: BookAuthor,
        publisher: BookPublisher,
        publish_date: PublishDate,
        rating: BookRating,
        status: BookStatus,
    ) -> Self {
        Self {
            title,
            author,
            publisher,
            publish_date,
            rating,
            status,
        }
    }

    pub fn validate(&self) -> Result<(), BookField> {
        validation::check(
            &self.title,
            &self.author,
            &self.publisher,
            &self.rating,
            &self.status,
        )
    }

    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            publish_date: self.publish_date,
            rating: self.rating,
            status: self.status,
        }
    }
}
