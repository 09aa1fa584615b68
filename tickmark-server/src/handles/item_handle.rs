use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use tickmark_api::models::{ItemQuery, ItemResponse};

pub fn item_router() -> Router {
    Router::new().route("/items/:item_id", get(get_item))
}

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(
        ("item_id" = i64, Path, description = "Item identifier"),
        ItemQuery
    ),
    responses(
        (status = 200, description = "Echo of the request", body = ItemResponse),
        (status = 400, description = "Item id is not an integer")
    )
)]
pub async fn get_item(Path(item_id): Path<i64>, Query(query): Query<ItemQuery>) -> Json<ItemResponse> {
    Json(ItemResponse { item_id, q: query.q })
}
