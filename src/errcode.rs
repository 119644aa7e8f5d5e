use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// 客户端错误码
///
/// `code` 全局唯一，`msg` 为对外文案，`details` 为可选的补充说明
/// （如参数校验的逐字段错误）。通过 [`Errcode::status_code`] 映射到
/// HTTP 状态码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Errcode {
    code: u32,
    msg: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

pub const SUCCESS: Errcode = Errcode::new(0, "成功");

pub const SERVER_ERROR: Errcode = Errcode::new(10000000, "服务内部错误");
pub const INVALID_PARAMS: Errcode = Errcode::new(10000001, "入参错误");
pub const NOT_FOUND: Errcode = Errcode::new(10000002, "找不到");
pub const UNAUTHORIZED_AUTH_NOT_EXIST: Errcode =
    Errcode::new(10000003, "鉴权失败, 找不到对应的 app_key 和 app_secret");
pub const UNAUTHORIZED_TOKEN_ERROR: Errcode = Errcode::new(10000004, "鉴权失败, Token 错误");
pub const UNAUTHORIZED_TOKEN_TIMEOUT: Errcode = Errcode::new(10000005, "鉴权失败, Token 超时");
pub const UNAUTHORIZED_TOKEN_GENERATE: Errcode = Errcode::new(10000006, "鉴权失败, Token 生成失败");
pub const TOO_MANY_REQUESTS: Errcode = Errcode::new(10000007, "请求过多");

pub const ERROR_GET_TAG_LIST_FAIL: Errcode = Errcode::new(20010001, "获取标签列表失败");
pub const ERROR_CREATE_TAG_FAIL: Errcode = Errcode::new(20010002, "创建标签失败");
pub const ERROR_UPDATE_TAG_FAIL: Errcode = Errcode::new(20010003, "更新标签失败");
pub const ERROR_DELETE_TAG_FAIL: Errcode = Errcode::new(20010004, "删除标签失败");
pub const ERROR_COUNT_TAG_FAIL: Errcode = Errcode::new(20010005, "统计标签失败");

pub const ERROR_GET_ARTICLE_FAIL: Errcode = Errcode::new(20020001, "获取单个文章失败");
pub const ERROR_GET_ARTICLES_FAIL: Errcode = Errcode::new(20020002, "获取多个文章失败");
pub const ERROR_CREATE_ARTICLE_FAIL: Errcode = Errcode::new(20020003, "创建文章失败");
pub const ERROR_UPDATE_ARTICLE_FAIL: Errcode = Errcode::new(20020004, "更新文章失败");
pub const ERROR_DELETE_ARTICLE_FAIL: Errcode = Errcode::new(20020005, "删除文章失败");
pub const ERROR_COUNT_ARTICLE_FAIL: Errcode = Errcode::new(20020006, "统计文章失败");

pub const ERROR_UPLOAD_FILE_FAIL: Errcode = Errcode::new(20030001, "上传文件失败");

/// 全部已注册的错误码，[`check_registry`] 据此做唯一性检查
const REGISTRY: &[Errcode] = &[
    SUCCESS,
    SERVER_ERROR,
    INVALID_PARAMS,
    NOT_FOUND,
    UNAUTHORIZED_AUTH_NOT_EXIST,
    UNAUTHORIZED_TOKEN_ERROR,
    UNAUTHORIZED_TOKEN_TIMEOUT,
    UNAUTHORIZED_TOKEN_GENERATE,
    TOO_MANY_REQUESTS,
    ERROR_GET_TAG_LIST_FAIL,
    ERROR_CREATE_TAG_FAIL,
    ERROR_UPDATE_TAG_FAIL,
    ERROR_DELETE_TAG_FAIL,
    ERROR_COUNT_TAG_FAIL,
    ERROR_GET_ARTICLE_FAIL,
    ERROR_GET_ARTICLES_FAIL,
    ERROR_CREATE_ARTICLE_FAIL,
    ERROR_UPDATE_ARTICLE_FAIL,
    ERROR_DELETE_ARTICLE_FAIL,
    ERROR_COUNT_ARTICLE_FAIL,
    ERROR_UPLOAD_FILE_FAIL,
];

/// 启动时校验错误码唯一性
///
/// 重复的错误码属于编码期错误，直接 panic 让进程启动失败，
/// 而不是等到请求时才暴露。
pub fn check_registry() {
    let mut seen = std::collections::HashMap::new();
    for e in REGISTRY {
        if let Some(exist) = seen.insert(e.code, e.msg) {
            panic!("错误码 {} 已经存在, msg: {}", e.code, exist);
        }
    }
}

impl Errcode {
    const fn new(code: u32, msg: &'static str) -> Errcode {
        Errcode {
            code,
            msg,
            details: Vec::new(),
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn msg(&self) -> &'static str {
        self.msg
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// 附加说明信息，返回新值，不修改原错误码
    pub fn with_details<I, S>(&self, details: I) -> Errcode
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Errcode {
            details: details.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    /// 内部错误码到 HTTP 状态码的固定映射
    ///
    /// 未列出的错误码一律视为服务内部错误。
    pub fn status_code(&self) -> StatusCode {
        match self.code {
            c if c == SUCCESS.code => StatusCode::OK,
            c if c == SERVER_ERROR.code => StatusCode::INTERNAL_SERVER_ERROR,
            c if c == INVALID_PARAMS.code => StatusCode::BAD_REQUEST,
            c if c == NOT_FOUND.code => StatusCode::NOT_FOUND,
            c if c == UNAUTHORIZED_AUTH_NOT_EXIST.code
                || c == UNAUTHORIZED_TOKEN_ERROR.code
                || c == UNAUTHORIZED_TOKEN_TIMEOUT.code
                || c == UNAUTHORIZED_TOKEN_GENERATE.code =>
            {
                StatusCode::UNAUTHORIZED
            }
            c if c == TOO_MANY_REQUESTS.code => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Errcode {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(&self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_no_duplicates() {
        check_registry();
    }

    #[test]
    fn status_mapping() {
        assert_eq!(SUCCESS.status_code(), StatusCode::OK);
        assert_eq!(SERVER_ERROR.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(INVALID_PARAMS.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            UNAUTHORIZED_TOKEN_TIMEOUT.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            UNAUTHORIZED_TOKEN_ERROR.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(TOO_MANY_REQUESTS.status_code(), StatusCode::TOO_MANY_REQUESTS);
        // 未显式映射的业务错误码一律 500
        assert_eq!(
            ERROR_CREATE_TAG_FAIL.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn details_are_omitted_when_empty() {
        let json = serde_json::to_value(&INVALID_PARAMS).expect("序列化失败");
        assert!(json.get("details").is_none());

        let with = INVALID_PARAMS.with_details(["name 为必填字段"]);
        let json = serde_json::to_value(&with).expect("序列化失败");
        assert_eq!(json["details"][0], "name 为必填字段");
        // with_details 不应影响原值
        assert!(INVALID_PARAMS.details().is_empty());
    }
}
