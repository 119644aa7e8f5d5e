use serde::Serialize;

use super::Common;

/// 文章
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub common: Common,
    pub title: String,
    pub desc: String,
    pub content: String,
    pub cover_image_url: String,
    /// 状态：0 草稿、1 发布
    pub state: i16,
}

impl Article {
    pub const TABLE: &'static str = "blog_article";
}
