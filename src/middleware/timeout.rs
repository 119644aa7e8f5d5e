use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{errcode, state::AppState};

/// 请求截止时间中间件
///
/// 超过配置的处理时限后丢弃下游 future（随之取消进行中的数据库
/// 等待等阻塞调用），向客户端返回超时错误而不是挂起。
pub async fn context_timeout(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let deadline = state.settings().request_timeout();

    match tokio::time::timeout(deadline, next.run(req)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!(timeout = deadline.as_secs(), "请求处理超时");
            errcode::SERVER_ERROR
                .with_details(["请求处理超时"])
                .into_response()
        }
    }
}
