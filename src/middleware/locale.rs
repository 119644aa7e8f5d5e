use axum::{extract::Request, middleware::Next, response::Response};

use crate::validation::Locale;

/// 多语言中间件
///
/// 解析 `locale` 请求头并挂到请求扩展上，后续参数校验用它生成
/// 对应语言的错误文案。
pub async fn translations(mut req: Request, next: Next) -> Response {
    let locale = Locale::from_header(
        req.headers()
            .get("locale")
            .and_then(|value| value.to_str().ok()),
    );
    req.extensions_mut().insert(locale);

    next.run(req).await
}
