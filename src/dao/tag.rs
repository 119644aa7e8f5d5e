use sqlx::QueryBuilder;

use super::{Dao, now_timestamp};
use crate::model::Tag;

/// 标签查询过滤条件，只有给出的字段参与等值过滤
#[derive(Debug, Default, Clone)]
pub struct TagFilter {
    pub name: Option<String>,
    pub state: Option<i16>,
}

/// 新建标签
///
/// `created_on` / `modified_on` 缺省时由数据访问层补当前时间。
#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
    pub state: i16,
    pub created_by: String,
    pub created_on: Option<i64>,
    pub modified_on: Option<i64>,
}

/// 标签部分更新
///
/// 只有为 `Some` 的字段会出现在 SET 子句里；`modified_on` 为
/// `None` 时总是刷新为当前时间。
#[derive(Debug, Default, Clone)]
pub struct TagChanges {
    pub name: Option<String>,
    pub state: Option<i16>,
    pub modified_by: String,
    pub modified_on: Option<i64>,
}

impl TagFilter {
    fn push_conditions(&self, builder: &mut QueryBuilder<'_, sqlx::Postgres>) {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            builder.push(" AND name = ").push_bind(name.to_string());
        }
        if let Some(state) = self.state {
            builder.push(" AND state = ").push_bind(state);
        }
    }
}

impl Dao<'_> {
    /// 统计满足条件的标签数量，总是排除软删行
    pub async fn count_tag(&self, filter: &TagFilter) -> Result<i64, sqlx::Error> {
        let mut builder =
            QueryBuilder::new(format!("SELECT COUNT(*) FROM {} WHERE is_del = 0", Tag::TABLE));
        filter.push_conditions(&mut builder);

        builder.build_query_scalar().fetch_one(self.db()).await
    }

    /// 分页查询标签
    ///
    /// 仅当 `page_offset >= 0 && page_size > 0` 时追加 OFFSET/LIMIT；
    /// 按 id 升序保证翻页结果稳定。
    pub async fn get_tag_list(
        &self,
        filter: &TagFilter,
        page_offset: i32,
        page_size: i32,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        let mut builder =
            QueryBuilder::new(format!("SELECT * FROM {} WHERE is_del = 0", Tag::TABLE));
        filter.push_conditions(&mut builder);
        builder.push(" ORDER BY id ASC");
        if page_offset >= 0 && page_size > 0 {
            builder
                .push(" LIMIT ")
                .push_bind(i64::from(page_size))
                .push(" OFFSET ")
                .push_bind(i64::from(page_offset));
        }

        builder.build_query_as().fetch_all(self.db()).await
    }

    pub async fn create_tag(&self, tag: NewTag) -> Result<i64, sqlx::Error> {
        let now = now_timestamp();
        sqlx::query_scalar(
            "
            INSERT INTO blog_tag
                (name, state, created_by, modified_by, created_on, modified_on)
            VALUES ($1, $2, $3, '', $4, $5)
            RETURNING id
            ",
        )
        .bind(&tag.name)
        .bind(tag.state)
        .bind(&tag.created_by)
        .bind(tag.created_on.unwrap_or(now))
        .bind(tag.modified_on.unwrap_or(now))
        .fetch_one(self.db())
        .await
    }

    /// 部分更新标签，作用范围限定 `id AND is_del = 0`
    pub async fn update_tag(&self, id: i64, changes: TagChanges) -> Result<u64, sqlx::Error> {
        let mut builder = QueryBuilder::new(format!("UPDATE {} SET modified_by = ", Tag::TABLE));
        builder.push_bind(changes.modified_by);
        if let Some(name) = changes.name {
            builder.push(", name = ").push_bind(name);
        }
        if let Some(state) = changes.state {
            builder.push(", state = ").push_bind(state);
        }
        builder
            .push(", modified_on = ")
            .push_bind(changes.modified_on.unwrap_or_else(now_timestamp));
        builder
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" AND is_del = 0");

        let result = builder.build().execute(self.db()).await?;
        Ok(result.rows_affected())
    }

    /// 软删除标签
    ///
    /// 重复删除匹配不到行，返回 0，调用方视为幂等成功。
    pub async fn delete_tag(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blog_tag SET deleted_on = $1, is_del = 1 WHERE id = $2 AND is_del = 0",
        )
        .bind(now_timestamp())
        .bind(id)
        .execute(self.db())
        .await?;

        Ok(result.rows_affected())
    }
}
