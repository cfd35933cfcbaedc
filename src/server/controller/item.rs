use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        item::{CreateItemDto, ItemDetailDto, ItemDto, UpdateItemDto},
    },
    server::{
        controller::util::get_caller::get_caller, error::Error, model::app::AppState,
        service::item::ItemService,
    },
};

pub static ITEM_TAG: &str = "item";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemsQuery {
    /// Only list items of this project
    pub project: Option<i32>,
}

/// List items of the logged in user's team with their audits, due dates & statistics
#[utoipa::path(
    get,
    path = "/api/items",
    tag = ITEM_TAG,
    params(ItemsQuery),
    responses(
        (status = 200, description = "Success when retrieving items", body = Vec<ItemDetailDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ItemsQuery>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let items = ItemService::new(&state.db)
        .get_items(&caller, query.project, Utc::now().naive_utc())
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Get an item with its audits, due date & statistics
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "ID of the item")),
    responses(
        (status = 200, description = "Success when retrieving the item", body = ItemDetailDto),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let item = ItemService::new(&state.db)
        .get_item(&caller, item_id, Utc::now().naive_utc())
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Create an item in a project of the logged in user's team
#[utoipa::path(
    post,
    path = "/api/items",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 400, description = "Item name is empty or frequency is negative", body = ErrorDto),
        (status = 404, description = "User or project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let item = ItemService::new(&state.db)
        .create_item(&caller, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item's name, description, frequency or project
#[utoipa::path(
    patch,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "ID of the item")),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Item updated", body = ItemDto),
        (status = 400, description = "Item name is empty or frequency is negative", body = ErrorDto),
        (status = 404, description = "User, item or project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
    Json(payload): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    let item = ItemService::new(&state.db)
        .update_item(&caller, item_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(item)))
}

/// Delete an item along with its audits & findings
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = ITEM_TAG,
    params(("id" = i32, Path, description = "ID of the item")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "User or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let caller = get_caller(&state, &session).await?;

    ItemService::new(&state.db)
        .delete_item(&caller, item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
