use std::sync::Arc;

use crate::{db::Db, limiter::MethodLimiter, settings::Settings};

/// 应用程序上下文
///
/// [`AppState`] 封装数据库连接池、启动时读取的配置和限流器，
/// 随路由克隆共享，取代全局变量。
#[derive(Clone)]
pub struct AppState {
    pool: Db,
    settings: Arc<Settings>,
    limiter: Arc<MethodLimiter>,
}

impl AppState {
    pub fn new(pool: Db, settings: Settings, limiter: MethodLimiter) -> AppState {
        AppState {
            pool,
            settings: Arc::new(settings),
            limiter: Arc::new(limiter),
        }
    }

    /// 获取数据库连接池
    pub fn db(&self) -> &Db {
        &self.pool
    }

    /// 获取应用配置
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 获取限流器
    pub fn limiter(&self) -> &MethodLimiter {
        &self.limiter
    }
}
