use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::settings::JwtSettings;

/// 令牌中携带的声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub app_key: String,
    /// app_secret 的摘要，不携带明文
    pub app_secret: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

/// 令牌校验失败的原因
///
/// 中间件据此区分响应 Token 超时还是 Token 错误。
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("令牌已过期")]
    Expired,
    #[error("令牌无效")]
    Invalid,
}

/// 签发 HS256 令牌
pub fn generate_token(
    jwt: &JwtSettings,
    app_key: &str,
    app_secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        app_key: app_key.to_string(),
        app_secret: crate::util::encode_digest(app_secret),
        exp: now + jwt.expire,
        iat: now,
        iss: jwt.issuer.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt.secret.as_bytes()),
    )
}

/// 校验并解析令牌
///
/// 过期与其他失败（签名错误、格式损坏）分开返回。
pub fn parse_token(jwt: &JwtSettings, token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&jwt.issuer]);
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_settings() -> JwtSettings {
        JwtSettings {
            secret: "blog-service-test-secret".to_string(),
            issuer: "blog-service".to_string(),
            expire: 7200,
        }
    }

    #[test]
    fn generate_and_parse() {
        let jwt = jwt_settings();
        let token = generate_token(&jwt, "admin", "secret").expect("签发令牌失败");
        let claims = parse_token(&jwt, &token).expect("解析令牌失败");

        assert_eq!(claims.app_key, "admin");
        assert_eq!(claims.iss, "blog-service");
        assert_ne!(claims.app_secret, "secret");
    }

    #[test]
    fn expired_token_is_distinguished() {
        let jwt = JwtSettings {
            expire: -3600,
            ..jwt_settings()
        };
        let token = generate_token(&jwt, "admin", "secret").expect("签发令牌失败");

        match parse_token(&jwt, &token) {
            Err(TokenError::Expired) => {}
            other => panic!("应返回过期错误, 实际: {other:?}"),
        }
    }

    #[test]
    fn tampered_token_is_invalid() {
        let jwt = jwt_settings();
        let token = generate_token(&jwt, "admin", "secret").expect("签发令牌失败");
        let other = JwtSettings {
            secret: "another-secret".to_string(),
            ..jwt_settings()
        };

        assert!(matches!(
            parse_token(&other, &token),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(
            parse_token(&jwt, "not-a-token"),
            Err(TokenError::Invalid)
        ));
    }
}
