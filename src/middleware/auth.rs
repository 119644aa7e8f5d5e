use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{errcode, state::AppState, token, token::TokenError};

/// 鉴权中间件，`/api/v1` 下的路由必经
///
/// 令牌优先取查询参数 `token`，其次取同名请求头。缺失按入参错误
/// 处理；过期与其他校验失败分别返回 Token 超时和 Token 错误。
/// 校验通过后把 [`token::Claims`] 挂到请求扩展上。
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token_value = query_token(req.uri().query()).or_else(|| {
        req.headers()
            .get("token")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    });

    let Some(token_value) = token_value.filter(|t| !t.is_empty()) else {
        return errcode::INVALID_PARAMS.into_response();
    };

    match token::parse_token(&state.settings().jwt, &token_value) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(TokenError::Expired) => errcode::UNAUTHORIZED_TOKEN_TIMEOUT.into_response(),
        Err(TokenError::Invalid) => errcode::UNAUTHORIZED_TOKEN_ERROR.into_response(),
    }
}

/// 从原始查询串里取 `token` 参数
fn query_token(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_from_query() {
        assert_eq!(query_token(Some("token=abc")), Some("abc".to_string()));
        assert_eq!(
            query_token(Some("page=1&token=abc.def")),
            Some("abc.def".to_string())
        );
        assert_eq!(query_token(Some("page=1")), None);
        assert_eq!(query_token(None), None);
    }
}
