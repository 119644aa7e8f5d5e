use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::errcode;

/// 恐慌恢复
///
/// 配合 `CatchPanicLayer::custom` 使用：下游任何未处理的 panic
/// 在这里记录后转换为统一的服务内部错误响应，进程继续服务
/// 其他请求。
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "捕获到未处理的 panic");

    errcode::SERVER_ERROR.into_response()
}
