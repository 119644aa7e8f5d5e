use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use serde_json::json;

use crate::{
    errcode, pagination,
    response::ListResponse,
    service::{
        ArticleListRequest, CountArticleRequest, CreateArticleRequest, DeleteArticleRequest,
        Service, UpdateArticleRequest,
    },
    state::AppState,
    validation::Locale,
};

fn locale_of(ext: Option<Extension<Locale>>) -> Locale {
    ext.map(|Extension(l)| l).unwrap_or_default()
}

/// 获取文章列表，支持标题、标签、状态过滤和分页。
pub async fn list(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    Query(param): Query<ArticleListRequest>,
) -> Response {
    if let Err(errs) = param.validate(locale_of(locale)) {
        tracing::error!(?errs, "参数校验失败");
        return errcode::INVALID_PARAMS.with_details(errs).into_response();
    }

    let svc = Service::new(&state);
    let page = pagination::get_page(param.page);
    let page_size = pagination::get_page_size(param.page_size, &state.settings().app);

    let total_rows = match svc
        .count_article(&CountArticleRequest {
            title: param.title.clone(),
            tag_id: param.tag_id,
            state: param.state,
        })
        .await
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(%e, "svc.count_article 失败");
            return errcode::ERROR_COUNT_ARTICLE_FAIL.into_response();
        }
    };

    let offset = pagination::get_page_offset(page, page_size);
    match svc.get_article_list(&param, offset, page_size).await {
        Ok(articles) => {
            Json(ListResponse::new(articles, page, page_size, total_rows)).into_response()
        }
        Err(e) => {
            tracing::error!(%e, "svc.get_article_list 失败");
            errcode::ERROR_GET_ARTICLES_FAIL.into_response()
        }
    }
}

/// 获取单篇文章及其标签。
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let svc = Service::new(&state);
    match svc.get_article(id).await {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) => errcode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.get_article 失败");
            errcode::ERROR_GET_ARTICLE_FAIL.into_response()
        }
    }
}

/// 新增文章并关联标签。
pub async fn create(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    Json(param): Json<CreateArticleRequest>,
) -> Response {
    if let Err(errs) = param.validate(locale_of(locale)) {
        tracing::error!(?errs, "参数校验失败");
        return errcode::INVALID_PARAMS.with_details(errs).into_response();
    }

    let svc = Service::new(&state);
    match svc.create_article(&param).await {
        Ok(_) => Json(json!({})).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.create_article 失败");
            errcode::ERROR_CREATE_ARTICLE_FAIL.into_response()
        }
    }
}

/// 更新文章，只更新给出的字段；`PATCH /articles/{id}/state` 复用本处理器。
pub async fn update(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    Path(id): Path<i64>,
    Json(param): Json<UpdateArticleRequest>,
) -> Response {
    let param = UpdateArticleRequest { id, ..param };
    if let Err(errs) = param.validate(locale_of(locale)) {
        tracing::error!(?errs, "参数校验失败");
        return errcode::INVALID_PARAMS.with_details(errs).into_response();
    }

    let svc = Service::new(&state);
    match svc.update_article(&param).await {
        Ok(()) => Json(json!({})).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.update_article 失败");
            errcode::ERROR_UPDATE_ARTICLE_FAIL.into_response()
        }
    }
}

/// 删除文章及其标签关联（软删除，幂等）。
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let svc = Service::new(&state);
    match svc.delete_article(&DeleteArticleRequest { id }).await {
        Ok(()) => Json(json!({})).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.delete_article 失败");
            errcode::ERROR_DELETE_ARTICLE_FAIL.into_response()
        }
    }
}
