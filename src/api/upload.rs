use axum::{
    Json,
    extract::{Multipart, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{errcode, service::Service, state::AppState, upload::FileType};

/// 上传文件，multipart 表单字段：`file` 为文件内容，`type` 为
/// 文件类型枚举（1 = 图片）。
pub async fn upload_file(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut file_type: Option<i32> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return errcode::INVALID_PARAMS
                    .with_details([e.to_string()])
                    .into_response();
            }
        };

        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("file") => {
                let origin_name = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => file = Some((origin_name, bytes.to_vec())),
                    Err(e) => {
                        return errcode::INVALID_PARAMS
                            .with_details([e.to_string()])
                            .into_response();
                    }
                }
            }
            Some("type") => {
                file_type = field.text().await.ok().and_then(|t| t.parse().ok());
            }
            _ => {}
        }
    }

    let (Some((origin_name, data)), Some(file_type)) = (file, file_type) else {
        return errcode::INVALID_PARAMS.into_response();
    };
    let Some(file_type) = FileType::from_i32(file_type) else {
        return errcode::INVALID_PARAMS.into_response();
    };

    let svc = Service::new(&state);
    match svc.upload_file(file_type, &origin_name, &data).await {
        Ok(info) => Json(json!({ "file_access_url": info.access_url })).into_response(),
        Err(e) => {
            tracing::error!(%e, "svc.upload_file 失败");
            errcode::ERROR_UPLOAD_FILE_FAIL
                .with_details([e.to_string()])
                .into_response()
        }
    }
}
