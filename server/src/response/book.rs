use application::transfer::{BookDto, DeletedBookDto, UpdatedBookDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;
use kernel::prelude::entity::{BookId, PublishDate};
use kernel::KernelError;
use serde::{Serialize, Serializer};
use time::Date;

use crate::controller::{Exhaust, TryExhaust};
use crate::error::ErrorStatus;

#[derive(Debug, Serialize)]
pub struct CreatedBookResponse {
    id: BookId,
    message: String,
}

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

/// Reply to an update or delete, carrying the row count as text.
#[derive(Debug, Serialize)]
pub struct ModifiedBookResponse {
    id: i64,
    message: String,
}

impl IntoResponse for ModifiedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: i64,
    title: String,
    author: String,
    publisher: String,
    #[serde(serialize_with = "serialize_publish_date")]
    publish_date: Date,
    rating: i32,
    status: String,
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        let BookDto {
            id,
            title,
            author,
            publisher,
            publish_date,
            rating,
            status,
        } = value;
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
}

fn serialize_publish_date<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted = PublishDate::new(*date)
        .to_rfc3339()
        .map_err(<S::Error as serde::ser::Error>::custom)?;
    serializer.serialize_str(&formatted)
}

fn not_exist() -> ErrorStatus {
    ErrorStatus::from(Report::new(KernelError::NotFound).attach_printable("Rowcount: 0"))
}

pub struct BookPresenter;

impl Exhaust<BookId> for BookPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: BookId) -> Self::To {
        CreatedBookResponse {
            id: input,
            message: "Book was created successfully".to_string(),
        }
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = axum::Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(BookResponse::from)
            .collect::<Vec<_>>();

        axum::Json::from(result)
    }
}

impl TryExhaust<UpdatedBookDto> for BookPresenter {
    type To = ModifiedBookResponse;
    type Error = ErrorStatus;
    fn emit(&self, input: UpdatedBookDto) -> Result<Self::To, Self::Error> {
        if input.rows_affected == 0 {
            return Err(not_exist());
        }
        Ok(ModifiedBookResponse {
            id: input.id,
            message: format!(
                "Book was updated successfully. Rowcount: {}",
                input.rows_affected
            ),
        })
    }
}

impl TryExhaust<DeletedBookDto> for BookPresenter {
    type To = ModifiedBookResponse;
    type Error = ErrorStatus;
    fn emit(&self, input: DeletedBookDto) -> Result<Self::To, Self::Error> {
        if input.rows_affected == 0 {
            return Err(not_exist());
        }
        Ok(ModifiedBookResponse {
            id: input.id,
            message: format!(
                "Book was deleted successfully. Rowcount: {}",
                input.rows_affected
            ),
        })
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{BookDto, DeletedBookDto, UpdatedBookDto};
    use kernel::prelude::entity::BookId;
    use time::macros::date;

    use crate::controller::{Exhaust, TryExhaust};
    use crate::response::BookPresenter;

    fn seed() -> BookDto {
        BookDto {
            id: 2,
            title: "test2".to_string(),
            author: "test2".to_string(),
            publisher: "test2".to_string(),
            publish_date: date!(2021 - 01 - 02),
            rating: 3,
            status: "CheckedOut".to_string(),
        }
    }

    #[test]
    fn book_json_shape() {
        let response = Exhaust::<Option<BookDto>>::emit(&BookPresenter, Some(seed())).unwrap();
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"id":2,"title":"test2","author":"test2","publisher":"test2","publishDate":"2021-01-02T00:00:00Z","rating":3,"status":"CheckedOut"}"#
        );
    }

    #[test]
    fn created_json_shape() {
        let response = Exhaust::<BookId>::emit(&BookPresenter, BookId::new(3));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"id":3,"message":"Book was created successfully"}"#
        );
    }

    #[test]
    fn modified_message_carries_rowcount() {
        let updated = TryExhaust::<UpdatedBookDto>::emit(
            &BookPresenter,
            UpdatedBookDto {
                id: 1,
                rows_affected: 1,
            },
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&updated).unwrap(),
            r#"{"id":1,"message":"Book was updated successfully. Rowcount: 1"}"#
        );
        let deleted = TryExhaust::<DeletedBookDto>::emit(
            &BookPresenter,
            DeletedBookDto {
                id: 2,
                rows_affected: 1,
            },
        )
        .unwrap();
        assert_eq!(
            serde_json::to_string(&deleted).unwrap(),
            r#"{"id":2,"message":"Book was deleted successfully. Rowcount: 1"}"#
        );
    }

    #[test]
    fn zero_rows_is_an_error() {
        let updated = TryExhaust::<UpdatedBookDto>::emit(
            &BookPresenter,
            UpdatedBookDto {
                id: -1,
                rows_affected: 0,
            },
        );
        assert!(updated.is_err());
        let deleted = TryExhaust::<DeletedBookDto>::emit(
            &BookPresenter,
            DeletedBookDto {
                id: -1,
                rows_affected: 0,
            },
        );
        assert!(deleted.is_err());
    }
}
