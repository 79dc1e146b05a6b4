use axum::{
    body::HttpBody,
    BoxError,
    extract::{Path, State},
    middleware,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde_json::Value;
use crate::auth::controller::require_token;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::add_disc_cmd::{AddDiscCommand, AddDiscCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::get_books_cmd::{GetBooksCommand, GetBooksCommandRequest};
use crate::catalog::command::get_disc_cmd::{GetDiscCommand, GetDiscCommandRequest};
use crate::catalog::command::get_discs_cmd::{GetDiscsCommand, GetDiscsCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::command::update_disc_cmd::{UpdateDiscCommand, UpdateDiscCommandRequest};
use crate::catalog::result::MediaServiceResult;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, medium_response, ServerError};

pub fn router<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    Router::new()
        .route("/media/books",
               get(get_books).post(add_book))
        .route("/media/books/:isbn",
               get(get_book).put(update_book))
        .route("/media/discs",
               get(get_discs).post(add_disc))
        .route("/media/discs/:barcode",
               get(get_disc).put(update_disc))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Response, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(medium_response(res.result, res.book))
}

pub async fn add_disc(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Response, ServerError> {
    let req: AddDiscCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddDiscCommand::new(state.catalog).execute(req).await?;
    Ok(medium_response(res.result, res.disc))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Response, ServerError> {
    let req = GetBookCommandRequest::new(isbn);
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(found_response(res.book))
}

pub async fn get_books(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    let res = GetBooksCommand::new(state.catalog).execute(GetBooksCommandRequest::default()).await?;
    Ok(medium_response(MediaServiceResult::Ok, Some(res)))
}

pub async fn get_disc(
    State(state): State<AppState>,
    Path(barcode): Path<String>) -> Result<Response, ServerError> {
    let req = GetDiscCommandRequest::new(barcode);
    let res = GetDiscCommand::new(state.catalog).execute(req).await?;
    Ok(found_response(res.disc))
}

pub async fn get_discs(
    State(state): State<AppState>) -> Result<Response, ServerError> {
    let res = GetDiscsCommand::new(state.catalog).execute(GetDiscsCommandRequest::default()).await?;
    Ok(medium_response(MediaServiceResult::Ok, Some(res)))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<Response, ServerError> {
    let book = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(isbn.as_str(), book);
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(medium_response(res.result, res.book))
}

pub async fn update_disc(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
    json: Json<Value>) -> Result<Response, ServerError> {
    let disc = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateDiscCommandRequest::new(barcode.as_str(), disc);
    let res = UpdateDiscCommand::new(state.catalog).execute(req).await?;
    Ok(medium_response(res.result, res.disc))
}

fn found_response<T: serde::Serialize>(medium: Option<T>) -> Response {
    match medium {
        Some(medium) => medium_response(MediaServiceResult::Ok, Some(medium)),
        None => medium_response::<T>(MediaServiceResult::NotFound, None),
    }
}
