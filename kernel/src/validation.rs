use std::fmt::{Display, Formatter};

use crate::entity::{BookAuthor, BookDraft, BookPublisher, BookRating, BookStatus, BookTitle};

/// Field named in a rejected book.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BookField {
    Title,
    Author,
    Publisher,
    Rating,
    Status,
}

impl Display for BookField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Publisher => "Publisher",
            BookField::Rating => "Rating",
            BookField::Status => "Status",
        };
        f.write_str(name)
    }
}

/// Returns the first field that breaks an invariant.
pub fn validate(draft: &BookDraft) -> Result<(), BookField> {
    draft.validate()
}

// Order matters: callers report only the first failure.
pub(crate) fn check(
    title: &BookTitle,
    author: &BookAuthor,
    publisher: &BookPublisher,
    rating: &BookRating,
    status: &BookStatus,
) -> Result<(), BookField> {
    if title.is_empty() {
        return Err(BookField::Title);
    }
    if author.is_empty() {
        return Err(BookField::Author);
    }
    if publisher.is_empty() {
        return Err(BookField::Publisher);
    }
    if !rating.is_in_range() {
        return Err(BookField::Rating);
    }
    if !status.is_recognized() {
        return Err(BookField::Status);
    }
    Ok(())
}
