pub mod api;
pub mod dao;
pub mod db;
pub mod errcode;
pub mod error;
pub mod limiter;
pub mod middleware;
pub mod model;
pub mod pagination;
pub mod response;
pub mod service;
pub mod settings;
pub mod state;
pub mod token;
pub mod upload;
pub mod util;
pub mod validation;

use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt::time::ChronoLocal};

use limiter::{BucketRule, MethodLimiter};
use state::AppState;

pub async fn run() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_env_filter(EnvFilter::from_env("BLOG_LOG"))
        .init();

    // 错误码注册表的唯一性在启动时检查，重复直接失败
    errcode::check_registry();

    let settings = settings::Settings::from_env().expect("读取配置失败");
    let pool = db::init_db(&settings.database)
        .await
        .expect("初始化数据库连接池失败");

    let state = AppState::new(pool, settings, default_limiter());

    api::run_server(state).await
}

/// 默认限流规则：`/auth` 每秒补 10 个令牌，容量 10
pub fn default_limiter() -> MethodLimiter {
    MethodLimiter::new().add_rule(BucketRule {
        key: "/auth",
        fill_interval: Duration::from_secs(1),
        capacity: 10,
        quantum: 10,
    })
}
