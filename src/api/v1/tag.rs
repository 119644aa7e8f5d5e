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
        CountTagRequest, CreateTagRequest, DeleteTagRequest, Service, TagListRequest,
        UpdateTagRequest,
    },
    state::AppState,
    validation::Locale,
};

fn locale_of(ext: Option<Extension<Locale>>) -> Locale {
    ext.map(|Extension(l)| l).unwrap_or_default()
}

/// 获取标签列表，支持 `name`、`state` 过滤和分页。
pub async fn list(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    Query(param): Query<TagListRequest>,
) -> Response {
    if let Err(errs) = param.validate(locale_of(locale)) {
        tracing::error!(?errs, "参数校验失败");
        return errcode::INVALID_PARAMS.with_details(errs).into_response();
    }

    let svc = Service::new(&state);
    let page = pagination::get_page(param.page);
    let page_size = pagination::get_page_size(param.page_size, &state.settings().app);

    let total_rows = match svc
        .count_tag(&CountTagRequest {
            name: param.name.clone(),
            state: param.state,
        })
        .await
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(%e, "svc.count_tag 失败");
            return errcode::ERROR_COUNT_TAG_FAIL.into_response();
        }
    };

    let offset = pagination::get_page_offset(page, page_size);
    match svc.get_tag_list(&param, offset, page_size).await {
        Ok(tags) => Json(ListResponse::new(tags, page, page_size, total_rows)).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.get_tag_list 失败");
            errcode::ERROR_GET_TAG_LIST_FAIL.into_response()
        }
    }
}

/// 新增标签。
pub async fn create(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    Json(param): Json<CreateTagRequest>,
) -> Response {
    if let Err(errs) = param.validate(locale_of(locale)) {
        tracing::error!(?errs, "参数校验失败");
        return errcode::INVALID_PARAMS.with_details(errs).into_response();
    }

    let svc = Service::new(&state);
    match svc.create_tag(&param).await {
        Ok(_) => Json(json!({})).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.create_tag 失败");
            errcode::ERROR_CREATE_TAG_FAIL.into_response()
        }
    }
}

/// 更新标签，只更新给出的字段；`PATCH /tags/{id}/state` 复用本处理器。
pub async fn update(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    Path(id): Path<i64>,
    Json(param): Json<UpdateTagRequest>,
) -> Response {
    let param = UpdateTagRequest { id, ..param };
    if let Err(errs) = param.validate(locale_of(locale)) {
        tracing::error!(?errs, "参数校验失败");
        return errcode::INVALID_PARAMS.with_details(errs).into_response();
    }

    let svc = Service::new(&state);
    match svc.update_tag(&param).await {
        Ok(()) => Json(json!({})).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.update_tag 失败");
            errcode::ERROR_UPDATE_TAG_FAIL.into_response()
        }
    }
}

/// 删除标签（软删除，幂等）。
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let svc = Service::new(&state);
    match svc.delete_tag(&DeleteTagRequest { id }).await {
        Ok(()) => Json(json!({})).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.delete_tag 失败");
            errcode::ERROR_DELETE_TAG_FAIL.into_response()
        }
    }
}
