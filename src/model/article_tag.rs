use serde::Serialize;

use super::Common;

/// 文章与标签的多对多关联
///
/// 关联记录由数据访问层维护，不归属文章或标签任何一方。
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleTag {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub common: Common,
    pub article_id: i64,
    pub tag_id: i64,
}

impl ArticleTag {
    pub const TABLE: &'static str = "blog_article_tag";
}
