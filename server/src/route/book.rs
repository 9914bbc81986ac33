use crate::controller::Controller;
use crate::error::{ErrorResponse, ErrorStatus};
use crate::handler::AppModule;
use crate::request::{
    BookTransformer, CreateBookRequest, DeleteBookRequest, GetBookRequest, UpdateBookRequest,
};
use crate::response::BookPresenter;
use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, GetBookService, UpdateBookService,
};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use kernel::KernelError;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        let delete_book = |State(module): State<AppModule>,
                           path: Result<Path<i64>, PathRejection>| async move {
            let Path(id) = path.map_err(ErrorStatus::malformed)?;
            Controller::new(BookTransformer, BookPresenter)
                .intake(DeleteBookRequest::new(id))
                .try_handle(|dto| async move { module.pgpool().delete_book(dto).await })
                .await
        };

        self.route(
            "/book",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.pgpool().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .put(
                |State(module): State<AppModule>,
                 payload: Result<Json<UpdateBookRequest>, JsonRejection>| async move {
                    let Json(req) = payload.map_err(ErrorStatus::malformed)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .try_handle(|dto| async move { module.pgpool().update_book(dto).await })
                        .await
                },
            ),
        )
        .route(
            "/book/:id",
            get(
                |State(module): State<AppModule>,
                 path: Result<Path<i64>, PathRejection>| async move {
                    let Path(id) = path.map_err(ErrorStatus::malformed)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.pgpool().get_book(&dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(IntoResponse::into_response).unwrap_or_else(|| {
                                ErrorResponse::new(StatusCode::BAD_REQUEST, KernelError::NotFound)
                                    .into_response()
                            })
                        })
                },
            )
            .delete(delete_book),
        )
        .route(
            "/newbook",
            post(
                |State(module): State<AppModule>,
                 payload: Result<Json<CreateBookRequest>, JsonRejection>| async move {
                    let Json(req) = payload.map_err(ErrorStatus::malformed)?;
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake(req)?
                        .handle(|dto| async move { module.pgpool().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route("/deletebook/:id", delete(delete_book))
    }
}
