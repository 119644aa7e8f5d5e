use serde::Deserialize;

use super::Service;
use crate::{
    dao::{NewTag, TagChanges, TagFilter},
    error::Result,
    model::Tag,
    validation::{Locale, Validator},
};

/// 标签列表请求，`name`、`state` 为可选过滤条件
#[derive(Debug, Default, Deserialize)]
pub struct TagListRequest {
    pub name: Option<String>,
    pub state: Option<i16>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

/// 标签计数请求
#[derive(Debug, Default)]
pub struct CountTagRequest {
    pub name: Option<String>,
    pub state: Option<i16>,
}

/// 新建标签请求
///
/// 必填字段用 `Option` 表达出现与否，缺失走字段级校验错误而不是
/// 反序列化失败。
#[derive(Debug, Deserialize)]
pub struct CreateTagRequest {
    pub name: Option<String>,
    /// 缺省按启用（1）处理
    pub state: Option<i16>,
    pub created_by: Option<String>,
}

/// 更新标签请求，`name` / `state` 只更新给出的字段
#[derive(Debug, Deserialize)]
pub struct UpdateTagRequest {
    #[serde(skip)]
    pub id: i64,
    pub name: Option<String>,
    pub state: Option<i16>,
    pub modified_by: Option<String>,
}

#[derive(Debug)]
pub struct DeleteTagRequest {
    pub id: i64,
}

impl TagListRequest {
    pub fn validate(&self, locale: Locale) -> Result<(), Vec<String>> {
        let mut v = Validator::new(locale);
        v.length_between("name", self.name.as_deref(), 1, 100)
            .one_of("state", self.state, &[0, 1]);
        v.finish()
    }
}

impl CreateTagRequest {
    pub fn validate(&self, locale: Locale) -> Result<(), Vec<String>> {
        let mut v = Validator::new(locale);
        v.required("name", self.name.as_deref())
            .length_between("name", self.name.as_deref(), 3, 100)
            .one_of("state", self.state, &[0, 1])
            .required("created_by", self.created_by.as_deref())
            .length_between("created_by", self.created_by.as_deref(), 3, 100);
        v.finish()
    }
}

impl UpdateTagRequest {
    pub fn validate(&self, locale: Locale) -> Result<(), Vec<String>> {
        let mut v = Validator::new(locale);
        v.length_between("name", self.name.as_deref(), 3, 100)
            .one_of("state", self.state, &[0, 1])
            .required("modified_by", self.modified_by.as_deref())
            .length_between("modified_by", self.modified_by.as_deref(), 3, 100);
        v.finish()
    }
}

impl Service<'_> {
    pub async fn count_tag(&self, param: &CountTagRequest) -> Result<i64> {
        let filter = TagFilter {
            name: param.name.clone(),
            state: param.state,
        };
        Ok(self.dao().count_tag(&filter).await?)
    }

    pub async fn get_tag_list(
        &self,
        param: &TagListRequest,
        page_offset: i32,
        page_size: i32,
    ) -> Result<Vec<Tag>> {
        let filter = TagFilter {
            name: param.name.clone(),
            state: param.state,
        };
        Ok(self
            .dao()
            .get_tag_list(&filter, page_offset, page_size)
            .await?)
    }

    pub async fn create_tag(&self, param: &CreateTagRequest) -> Result<i64> {
        let tag = NewTag {
            name: param.name.clone().unwrap_or_default(),
            state: param.state.unwrap_or(1),
            created_by: param.created_by.clone().unwrap_or_default(),
            created_on: None,
            modified_on: None,
        };
        Ok(self.dao().create_tag(tag).await?)
    }

    pub async fn update_tag(&self, param: &UpdateTagRequest) -> Result<()> {
        let changes = TagChanges {
            name: param.name.clone(),
            state: param.state,
            modified_by: param.modified_by.clone().unwrap_or_default(),
            modified_on: None,
        };
        self.dao().update_tag(param.id, changes).await?;
        Ok(())
    }

    /// 删除标签；已删除的 id 匹配不到行，同样视为成功
    pub async fn delete_tag(&self, param: &DeleteTagRequest) -> Result<()> {
        self.dao().delete_tag(param.id).await?;
        Ok(())
    }
}
