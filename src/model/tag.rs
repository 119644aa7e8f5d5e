use serde::Serialize;

use super::Common;

/// 标签
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Tag {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub common: Common,
    pub name: String,
    /// 状态：0 禁用、1 启用
    pub state: i16,
}

impl Tag {
    pub const TABLE: &'static str = "blog_tag";
}
