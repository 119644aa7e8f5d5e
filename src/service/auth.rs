use serde::Deserialize;

use super::Service;
use crate::{
    error::{Error, Result},
    token,
    util::encode_digest,
    validation::{Locale, Validator},
};

/// 换取令牌的请求
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub app_key: Option<String>,
    pub app_secret: Option<String>,
}

impl AuthRequest {
    pub fn validate(&self, locale: Locale) -> Result<(), Vec<String>> {
        let mut v = Validator::new(locale);
        v.required("app_key", self.app_key.as_deref())
            .required("app_secret", self.app_secret.as_deref());
        v.finish()
    }
}

impl Service<'_> {
    /// 校验调用方凭据
    ///
    /// 凭据表里存的是 app_secret 的摘要，按摘要比对；
    /// 找不到记录返回 [`Error::AuthNotExist`]。
    pub async fn check_auth(&self, param: &AuthRequest) -> Result<()> {
        let app_key = param.app_key.as_deref().unwrap_or_default();
        let app_secret = param.app_secret.as_deref().unwrap_or_default();

        let auth = self
            .dao()
            .get_auth(app_key, &encode_digest(app_secret))
            .await?;

        match auth {
            Some(_) => Ok(()),
            None => Err(Error::AuthNotExist),
        }
    }

    /// 签发令牌
    pub fn generate_token(&self, param: &AuthRequest) -> Result<String> {
        let jwt = &self.state().settings().jwt;
        Ok(token::generate_token(
            jwt,
            param.app_key.as_deref().unwrap_or_default(),
            param.app_secret.as_deref().unwrap_or_default(),
        )?)
    }
}
