mod article;
mod tag;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, put},
};

use crate::{middleware, state::AppState};

/// `/api/v1` 下的标签与文章路由，整组挂鉴权中间件。
pub fn setup_route(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/tags", get(tag::list).post(tag::create))
        .route("/tags/{id}", put(tag::update).delete(tag::delete))
        .route("/tags/{id}/state", patch(tag::update))
        .route("/articles", get(article::list).post(article::create))
        .route(
            "/articles/{id}",
            get(article::get).put(article::update).delete(article::delete),
        )
        .route("/articles/{id}/state", patch(article::update))
        .route_layer(from_fn_with_state(state, middleware::auth))
}
