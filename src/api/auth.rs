use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    errcode,
    error::Error,
    service::{AuthRequest, Service},
    state::AppState,
    validation::Locale,
};

/// 校验调用方凭据并签发令牌。
pub async fn get_auth(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    Json(param): Json<AuthRequest>,
) -> Response {
    let locale = locale.map(|Extension(l)| l).unwrap_or_default();
    if let Err(errs) = param.validate(locale) {
        tracing::error!(?errs, "参数校验失败");
        return errcode::INVALID_PARAMS.with_details(errs).into_response();
    }

    let svc = Service::new(&state);
    if let Err(e) = svc.check_auth(&param).await {
        match e {
            Error::AuthNotExist => {}
            e => tracing::error!(%e, "svc.check_auth 失败"),
        }
        return errcode::UNAUTHORIZED_AUTH_NOT_EXIST.into_response();
    }

    match svc.generate_token(&param) {
        Ok(token) => Json(json!({ "token": token })).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.generate_token 失败");
            errcode::UNAUTHORIZED_TOKEN_GENERATE.into_response()
        }
    }
}
