mod auth;
mod upload;
mod v1;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::post,
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};
use tracing::instrument;

use crate::{middleware, state::AppState};

/// 设置应用的路由。
///
/// `/auth` 换取令牌，`/upload/file` 上传文件，`/static` 只读提供
/// 上传目录，`/api/v1` 下为需要鉴权的标签和文章接口。
pub fn setup_route(state: AppState) -> Router {
    let upload_dir = state.settings().app.upload_save_path.clone();

    Router::new()
        .route("/auth", post(auth::get_auth))
        .route("/upload/file", post(upload::upload_file))
        .nest_service("/static", ServeDir::new(upload_dir))
        .nest("/api/v1", v1::setup_route(state.clone()))
        .with_state(state)
}

/// 启动 HTTP 服务，并使用给定的路由处理请求。
#[instrument(name = "http server", skip_all)]
pub async fn run_server_with_router(router: Router, addr: &str) {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("绑定 {addr} 失败: {e}"));

    tracing::info!("listening on {addr}");

    axum::serve(listener, router)
        .await
        .expect("Axum 服务启动失败");
}

/// 启动 HTTP 服务，自动设置路由和中间件。
pub async fn run_server(state: AppState) {
    let addr = format!(
        "{}:{}",
        state.settings().server.host,
        state.settings().server.port
    );
    let router = setup_route(state.clone());
    let router = add_middlewares(router, state);
    run_server_with_router(router, &addr).await
}

/// 为路由添加全链路中间件。
///
/// axum 中后挂的层在外侧，这里按执行顺序从内到外依次挂：
/// 多语言 → 限流 → 请求超时 → 恐慌恢复 → 访问日志 → 请求追踪，
/// 与对外约定的拦截顺序（日志、恢复、超时、限流、翻译）一致。
pub fn add_middlewares(router: Router, state: AppState) -> Router {
    fn log_failure(
        err: tower_http::classify::ServerErrorsFailureClass,
        _latency: std::time::Duration,
        _span: &tracing::Span,
    ) {
        tracing::error!(error = %err, "request failed");
    }

    router
        .layer(from_fn(middleware::translations))
        .layer(from_fn_with_state(state.clone(), middleware::rate_limit))
        .layer(from_fn_with_state(state, middleware::context_timeout))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(from_fn(middleware::access_log))
        .layer(TraceLayer::new_for_http().on_failure(log_failure))
}
