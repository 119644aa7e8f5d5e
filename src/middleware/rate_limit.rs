use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{errcode, limiter::MethodLimiter, state::AppState};

/// 限流中间件
///
/// 以请求路径为键向限流器要一个令牌，拿不到立即以 429 拒绝。
pub async fn rate_limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let key = MethodLimiter::key(req.uri().path());
    if !state.limiter().acquire(key) {
        return errcode::TOO_MANY_REQUESTS.into_response();
    }

    next.run(req).await
}
