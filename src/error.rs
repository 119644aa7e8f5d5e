use std::io;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// 服务内部错误
///
/// 只在服务端内部流转，到达 Handler 边界后统一换成
/// [`crate::errcode::Errcode`]，原始错误信息不会返回给客户端。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Serde(#[from] serde_yaml::Error),

    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("{0}")]
    Upload(&'static str),

    #[error("鉴权失败: app_key 或 app_secret 不存在")]
    AuthNotExist,

    #[error(transparent)]
    Io(#[from] io::Error),
}
