use axum::{
    body::{Body, to_bytes},
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errcode;

/// 访问日志缓冲的响应体上限，超大响应只记录截断前的部分
const BODY_LIMIT: usize = 64 * 1024;

/// 静态文件路由，响应体走流式输出，不缓冲
const STATIC_PREFIX: &str = "/static";

/// 访问日志中间件
///
/// 记录方法、路径、状态码、起止时间和响应体。接口响应体以 tee
/// 方式缓冲后原样回写给客户端；`/static` 下的文件响应可能很大，
/// 不缓冲，只记录元信息。
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let begin_time = chrono::Utc::now().timestamp();

    let response = next.run(req).await;
    let end_time = chrono::Utc::now().timestamp();

    if uri.path().starts_with(STATIC_PREFIX) {
        tracing::info!(
            method = %method,
            uri = %uri,
            status_code = response.status().as_u16(),
            begin_time,
            end_time,
            "access log",
        );
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(%e, "读取响应体失败");
            return errcode::SERVER_ERROR.into_response();
        }
    };

    tracing::info!(
        method = %method,
        uri = %uri,
        status_code = parts.status.as_u16(),
        begin_time,
        end_time,
        response = %String::from_utf8_lossy(&bytes[..bytes.len().min(BODY_LIMIT)]),
        "access log",
    );

    Response::from_parts(parts, Body::from(bytes))
}
