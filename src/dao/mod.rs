mod article;
mod auth;
mod tag;

pub use self::{
    article::{ArticleChanges, ArticleFilter, NewArticle},
    tag::{NewTag, TagChanges, TagFilter},
};

use crate::db::Db;

/// 数据访问层
///
/// 对连接池的二次封装，按实体提供 count / list / create / update /
/// delete。审计字段在这里显式落盘：创建时缺省补创建、修改时间，
/// 更新时除非调用方显式覆盖否则总是刷新修改时间；带软删字段的
/// 实体删除一律改写为 `deleted_on = now, is_del = 1` 的更新。
pub struct Dao<'a> {
    db: &'a Db,
}

impl<'a> Dao<'a> {
    pub fn new(db: &'a Db) -> Dao<'a> {
        Dao { db }
    }

    fn db(&self) -> &Db {
        self.db
    }
}

/// 秒级时间戳，审计字段统一用它取当前时间
fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
