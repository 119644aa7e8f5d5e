use serde::Serialize;

/// 分页信息
///
/// 随列表响应返回，按请求计算，不落库。
#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    pub page: i32,
    pub page_size: i32,
    pub total_rows: i64,
}

/// 列表响应体：`{"list": [...], "page": {...}}`
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub list: Vec<T>,
    pub page: Pager,
}

impl<T> ListResponse<T> {
    pub fn new(list: Vec<T>, page: i32, page_size: i32, total_rows: i64) -> ListResponse<T> {
        ListResponse {
            list,
            page: Pager {
                page,
                page_size,
                total_rows,
            },
        }
    }
}
