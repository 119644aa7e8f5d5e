mod article;
mod article_tag;
mod auth;
mod tag;

pub use self::{article::Article, article_tag::ArticleTag, auth::Auth, tag::Tag};

use serde::Serialize;

/// 公共审计字段
///
/// 所有持久化实体共享：主键、创建/修改人、创建/修改时间（秒级
/// 时间戳）以及软删除标记。`is_del = 0` 表示在用，`1` 表示已软删；
/// 正常读取一律在数据访问层追加 `is_del = 0` 过滤。
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
pub struct Common {
    pub id: i64,
    pub created_by: String,
    pub modified_by: String,
    pub created_on: i64,
    pub modified_on: i64,
    pub deleted_on: i64,
    pub is_del: i16,
}
