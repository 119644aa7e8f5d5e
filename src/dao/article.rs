use sqlx::QueryBuilder;

use super::{Dao, now_timestamp};
use crate::model::{Article, ArticleTag, Tag};

/// 文章查询过滤条件
///
/// 给出 `tag_id` 时通过关联表筛选该标签下的文章。
#[derive(Debug, Default, Clone)]
pub struct ArticleFilter {
    pub title: Option<String>,
    pub state: Option<i16>,
    pub tag_id: Option<i64>,
}

/// 新建文章
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub desc: String,
    pub content: String,
    pub cover_image_url: String,
    pub state: i16,
    pub created_by: String,
    pub created_on: Option<i64>,
    pub modified_on: Option<i64>,
}

/// 文章部分更新
#[derive(Debug, Default, Clone)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub state: Option<i16>,
    pub modified_by: String,
    pub modified_on: Option<i64>,
}

impl ArticleFilter {
    /// 过滤条件统一从文章表别名 `a` 出发，关联表别名 `at`
    fn push_conditions(&self, builder: &mut QueryBuilder<'_, sqlx::Postgres>) {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            builder.push(" AND a.title = ").push_bind(title.to_string());
        }
        if let Some(state) = self.state {
            builder.push(" AND a.state = ").push_bind(state);
        }
        if let Some(tag_id) = self.tag_id {
            builder.push(" AND at.tag_id = ").push_bind(tag_id);
        }
    }

    fn from_clause(&self) -> String {
        if self.tag_id.is_some() {
            format!(
                "FROM {} a INNER JOIN {} at ON at.article_id = a.id AND at.is_del = 0",
                Article::TABLE,
                ArticleTag::TABLE
            )
        } else {
            format!("FROM {} a", Article::TABLE)
        }
    }
}

impl Dao<'_> {
    pub async fn count_article(&self, filter: &ArticleFilter) -> Result<i64, sqlx::Error> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT COUNT(*) {} WHERE a.is_del = 0",
            filter.from_clause()
        ));
        filter.push_conditions(&mut builder);

        builder.build_query_scalar().fetch_one(self.db()).await
    }

    pub async fn get_article_list(
        &self,
        filter: &ArticleFilter,
        page_offset: i32,
        page_size: i32,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT a.* {} WHERE a.is_del = 0",
            filter.from_clause()
        ));
        filter.push_conditions(&mut builder);
        builder.push(" ORDER BY a.id ASC");
        if page_offset >= 0 && page_size > 0 {
            builder
                .push(" LIMIT ")
                .push_bind(i64::from(page_size))
                .push(" OFFSET ")
                .push_bind(i64::from(page_offset));
        }

        builder.build_query_as().fetch_all(self.db()).await
    }

    /// 按 id 查询单篇文章，软删行视同不存在
    pub async fn get_article(&self, id: i64) -> Result<Option<Article>, sqlx::Error> {
        sqlx::query_as("SELECT * FROM blog_article WHERE id = $1 AND is_del = 0")
            .bind(id)
            .fetch_optional(self.db())
            .await
    }

    pub async fn create_article(&self, article: NewArticle) -> Result<i64, sqlx::Error> {
        let now = now_timestamp();
        sqlx::query_scalar(
            r#"
            INSERT INTO blog_article
                (title, "desc", content, cover_image_url, state,
                 created_by, modified_by, created_on, modified_on)
            VALUES ($1, $2, $3, $4, $5, $6, '', $7, $8)
            RETURNING id
            "#,
        )
        .bind(&article.title)
        .bind(&article.desc)
        .bind(&article.content)
        .bind(&article.cover_image_url)
        .bind(article.state)
        .bind(&article.created_by)
        .bind(article.created_on.unwrap_or(now))
        .bind(article.modified_on.unwrap_or(now))
        .fetch_one(self.db())
        .await
    }

    pub async fn update_article(
        &self,
        id: i64,
        changes: ArticleChanges,
    ) -> Result<u64, sqlx::Error> {
        let mut builder =
            QueryBuilder::new(format!("UPDATE {} SET modified_by = ", Article::TABLE));
        builder.push_bind(changes.modified_by);
        if let Some(title) = changes.title {
            builder.push(", title = ").push_bind(title);
        }
        if let Some(desc) = changes.desc {
            builder.push(r#", "desc" = "#).push_bind(desc);
        }
        if let Some(content) = changes.content {
            builder.push(", content = ").push_bind(content);
        }
        if let Some(cover_image_url) = changes.cover_image_url {
            builder.push(", cover_image_url = ").push_bind(cover_image_url);
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

    pub async fn delete_article(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blog_article SET deleted_on = $1, is_del = 1 WHERE id = $2 AND is_del = 0",
        )
        .bind(now_timestamp())
        .bind(id)
        .execute(self.db())
        .await?;

        Ok(result.rows_affected())
    }

    /// 建立文章与标签的关联
    pub async fn create_article_tag(
        &self,
        article_id: i64,
        tag_id: i64,
        created_by: &str,
    ) -> Result<(), sqlx::Error> {
        let now = now_timestamp();
        sqlx::query(
            "
            INSERT INTO blog_article_tag
                (article_id, tag_id, created_by, modified_by, created_on, modified_on)
            VALUES ($1, $2, $3, '', $4, $4)
            ",
        )
        .bind(article_id)
        .bind(tag_id)
        .bind(created_by)
        .bind(now)
        .execute(self.db())
        .await?;
        Ok(())
    }

    /// 调整文章关联到的标签
    pub async fn update_article_tag(
        &self,
        article_id: i64,
        tag_id: i64,
        modified_by: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "
            UPDATE blog_article_tag
            SET tag_id = $1, modified_by = $2, modified_on = $3
            WHERE article_id = $4 AND is_del = 0
            ",
        )
        .bind(tag_id)
        .bind(modified_by)
        .bind(now_timestamp())
        .bind(article_id)
        .execute(self.db())
        .await?;

        Ok(result.rows_affected())
    }

    /// 软删除文章的全部标签关联
    pub async fn delete_article_tag(&self, article_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "
            UPDATE blog_article_tag
            SET deleted_on = $1, is_del = 1
            WHERE article_id = $2 AND is_del = 0
            ",
        )
        .bind(now_timestamp())
        .bind(article_id)
        .execute(self.db())
        .await?;

        Ok(result.rows_affected())
    }

    /// 查询文章关联的标签列表
    pub async fn get_article_tags(&self, article_id: i64) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as(
            "
            SELECT t.*
            FROM blog_tag t
            INNER JOIN blog_article_tag at ON at.tag_id = t.id AND at.is_del = 0
            WHERE at.article_id = $1 AND t.is_del = 0
            ORDER BY t.id ASC
            ",
        )
        .bind(article_id)
        .fetch_all(self.db())
        .await
    }
}
