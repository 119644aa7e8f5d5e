use serde::Serialize;

use super::Common;

/// 接口调用方凭据
///
/// `app_secret` 存摘要，不存明文。
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Auth {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub common: Common,
    pub app_key: String,
    pub app_secret: String,
}

impl Auth {
    pub const TABLE: &'static str = "blog_auth";
}
