use application::transfer::{CreateBookDto, DeleteBookDto, GetBookDto, UpdateBookDto};
use error_stack::Report;
use kernel::prelude::entity::PublishDate;
use kernel::KernelError;
use serde::Deserialize;
use time::Date;

use crate::controller::{Intake, TryIntake};
use crate::error::ErrorStatus;

/// Body of `POST /api/newbook`. A client supplied `id` is ignored.
/// Omitted fields decode as empty and are then rejected by validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    publisher: String,
    publish_date: String,
    #[serde(default)]
    rating: i32,
    #[serde(default)]
    status: String,
}

/// Body of `PUT /api/book`; `id` selects the row to replace.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    id: Option<i64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    publisher: String,
    publish_date: String,
    #[serde(default)]
    rating: i32,
    #[serde(default)]
    status: String,
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

fn parse_publish_date(input: &str) -> Result<Date, ErrorStatus> {
    PublishDate::parse(input)
        .map(Date::from)
        .map_err(|e| ErrorStatus::malformed(format!("publishDate `{input}`: {e}")))
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = ErrorStatus;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookDto {
            publish_date: parse_publish_date(&input.publish_date)?,
            title: input.title,
            author: input.author,
            publisher: input.publisher,
            rating: input.rating,
            status: input.status,
        })
    }
}

impl TryIntake<UpdateBookRequest> for BookTransformer {
    type To = UpdateBookDto;
    type Error = ErrorStatus;
    fn emit(&self, input: UpdateBookRequest) -> Result<Self::To, Self::Error> {
        let id = input.id.ok_or_else(|| {
            ErrorStatus::from(
                Report::new(KernelError::NotFound).attach_printable("Update request had no id"),
            )
        })?;
        Ok(UpdateBookDto {
            id,
            publish_date: parse_publish_date(&input.publish_date)?,
            title: input.title,
            author: input.author,
            publisher: input.publisher,
            rating: input.rating,
            status: input.status,
        })
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}
