use serde::{Deserialize, Serialize};

use super::Service;
use crate::{
    dao::{ArticleChanges, ArticleFilter, NewArticle},
    error::Result,
    model::{Article, Tag},
    validation::{Locale, Validator},
};

/// 文章列表请求，可按标题、标签、状态过滤
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListRequest {
    pub title: Option<String>,
    pub tag_id: Option<i64>,
    pub state: Option<i16>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

#[derive(Debug, Default)]
pub struct CountArticleRequest {
    pub title: Option<String>,
    pub tag_id: Option<i64>,
    pub state: Option<i16>,
}

/// 新建文章请求，创建的同时建立与标签的关联
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub tag_id: Option<i64>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub state: Option<i16>,
    pub created_by: Option<String>,
}

/// 更新文章请求，只更新给出的字段；`tag_id` 给出时同步改关联
#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    #[serde(skip)]
    pub id: i64,
    pub tag_id: Option<i64>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub state: Option<i16>,
    pub modified_by: Option<String>,
}

#[derive(Debug)]
pub struct DeleteArticleRequest {
    pub id: i64,
}

/// 单篇文章及其关联标签
#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: Article,
    pub tags: Vec<Tag>,
}

impl ArticleListRequest {
    pub fn validate(&self, locale: Locale) -> Result<(), Vec<String>> {
        let mut v = Validator::new(locale);
        v.length_between("title", self.title.as_deref(), 1, 100)
            .one_of("state", self.state, &[0, 1]);
        v.finish()
    }
}

impl CreateArticleRequest {
    pub fn validate(&self, locale: Locale) -> Result<(), Vec<String>> {
        let mut v = Validator::new(locale);
        v.required("title", self.title.as_deref())
            .length_between("title", self.title.as_deref(), 2, 100)
            .required("desc", self.desc.as_deref())
            .length_between("desc", self.desc.as_deref(), 2, 255)
            .required("content", self.content.as_deref())
            .required("cover_image_url", self.cover_image_url.as_deref())
            .one_of("state", self.state, &[0, 1])
            .required("created_by", self.created_by.as_deref())
            .length_between("created_by", self.created_by.as_deref(), 3, 100);
        if self.tag_id.is_none_or(|id| id < 1) {
            v.required("tag_id", None);
        }
        v.finish()
    }
}

impl UpdateArticleRequest {
    pub fn validate(&self, locale: Locale) -> Result<(), Vec<String>> {
        let mut v = Validator::new(locale);
        v.length_between("title", self.title.as_deref(), 2, 100)
            .length_between("desc", self.desc.as_deref(), 2, 255)
            .one_of("state", self.state, &[0, 1])
            .required("modified_by", self.modified_by.as_deref())
            .length_between("modified_by", self.modified_by.as_deref(), 3, 100);
        v.finish()
    }
}

impl Service<'_> {
    pub async fn count_article(&self, param: &CountArticleRequest) -> Result<i64> {
        let filter = ArticleFilter {
            title: param.title.clone(),
            state: param.state,
            tag_id: param.tag_id,
        };
        Ok(self.dao().count_article(&filter).await?)
    }

    pub async fn get_article_list(
        &self,
        param: &ArticleListRequest,
        page_offset: i32,
        page_size: i32,
    ) -> Result<Vec<Article>> {
        let filter = ArticleFilter {
            title: param.title.clone(),
            state: param.state,
            tag_id: param.tag_id,
        };
        Ok(self
            .dao()
            .get_article_list(&filter, page_offset, page_size)
            .await?)
    }

    /// 查询单篇文章及其标签
    pub async fn get_article(&self, id: i64) -> Result<Option<ArticleDetail>> {
        let Some(article) = self.dao().get_article(id).await? else {
            return Ok(None);
        };
        let tags = self.dao().get_article_tags(id).await?;

        Ok(Some(ArticleDetail { article, tags }))
    }

    /// 创建文章并关联标签
    pub async fn create_article(&self, param: &CreateArticleRequest) -> Result<i64> {
        let article = NewArticle {
            title: param.title.clone().unwrap_or_default(),
            desc: param.desc.clone().unwrap_or_default(),
            content: param.content.clone().unwrap_or_default(),
            cover_image_url: param.cover_image_url.clone().unwrap_or_default(),
            state: param.state.unwrap_or(1),
            created_by: param.created_by.clone().unwrap_or_default(),
            created_on: None,
            modified_on: None,
        };
        let id = self.dao().create_article(article).await?;
        if let Some(tag_id) = param.tag_id {
            self.dao()
                .create_article_tag(id, tag_id, param.created_by.as_deref().unwrap_or_default())
                .await?;
        }

        Ok(id)
    }

    pub async fn update_article(&self, param: &UpdateArticleRequest) -> Result<()> {
        let modified_by = param.modified_by.clone().unwrap_or_default();
        let changes = ArticleChanges {
            title: param.title.clone(),
            desc: param.desc.clone(),
            content: param.content.clone(),
            cover_image_url: param.cover_image_url.clone(),
            state: param.state,
            modified_by: modified_by.clone(),
            modified_on: None,
        };
        self.dao().update_article(param.id, changes).await?;

        if let Some(tag_id) = param.tag_id {
            let updated = self
                .dao()
                .update_article_tag(param.id, tag_id, &modified_by)
                .await?;
            // 旧关联可能已被软删，补一条新关联
            if updated == 0 {
                self.dao()
                    .create_article_tag(param.id, tag_id, &modified_by)
                    .await?;
            }
        }

        Ok(())
    }

    /// 软删除文章及其标签关联
    pub async fn delete_article(&self, param: &DeleteArticleRequest) -> Result<()> {
        self.dao().delete_article(param.id).await?;
        self.dao().delete_article_tag(param.id).await?;
        Ok(())
    }
}
