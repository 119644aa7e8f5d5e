mod article;
mod auth;
mod tag;
mod upload;

pub use self::{
    article::{
        ArticleDetail, ArticleListRequest, CountArticleRequest, CreateArticleRequest,
        DeleteArticleRequest, UpdateArticleRequest,
    },
    auth::AuthRequest,
    tag::{
        CountTagRequest, CreateTagRequest, DeleteTagRequest, TagListRequest, UpdateTagRequest,
    },
};

use crate::{dao::Dao, state::AppState};

/// 业务服务
///
/// 随请求构造的无状态门面，每个业务操作串联一次或多次数据访问
/// 调用并透传第一个错误；参数校验在 Handler 边界完成，这里不再
/// 重复。
pub struct Service<'a> {
    state: &'a AppState,
    dao: Dao<'a>,
}

impl<'a> Service<'a> {
    pub fn new(state: &'a AppState) -> Service<'a> {
        Service {
            state,
            dao: Dao::new(state.db()),
        }
    }

    fn dao(&self) -> &Dao<'a> {
        &self.dao
    }

    fn state(&self) -> &AppState {
        self.state
    }
}
