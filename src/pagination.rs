use crate::settings::AppSettings;

/// 解析页码，非正数一律按第一页处理
pub fn get_page(page: Option<i32>) -> i32 {
    match page {
        Some(p) if p > 0 => p,
        _ => 1,
    }
}

/// 解析页大小
///
/// 非正数取默认值，超过上限则压到上限。
pub fn get_page_size(page_size: Option<i32>, app: &AppSettings) -> i32 {
    match page_size {
        Some(s) if s > 0 && s <= app.max_page_size => s,
        Some(s) if s > app.max_page_size => app.max_page_size,
        _ => app.default_page_size,
    }
}

/// 页偏移：`(page - 1) * page_size`，页码非正数时为 0
pub fn get_page_offset(page: i32, page_size: i32) -> i32 {
    if page > 0 { (page - 1) * page_size } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_settings() -> AppSettings {
        AppSettings {
            default_page_size: 10,
            max_page_size: 100,
            upload_save_path: "storage/uploads".to_string(),
            upload_server_url: "http://127.0.0.1:8000/static".to_string(),
            upload_image_allow_exts: vec![".jpg".to_string()],
            upload_image_max_size: 5,
        }
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(get_page(None), 1);
        assert_eq!(get_page(Some(0)), 1);
        assert_eq!(get_page(Some(-3)), 1);
        assert_eq!(get_page(Some(7)), 7);
    }

    #[test]
    fn page_size_is_clamped() {
        let app = app_settings();
        assert_eq!(get_page_size(None, &app), 10);
        assert_eq!(get_page_size(Some(0), &app), 10);
        assert_eq!(get_page_size(Some(30), &app), 30);
        assert_eq!(get_page_size(Some(1000), &app), 100);
    }

    #[test]
    fn page_offset() {
        assert_eq!(get_page_offset(1, 10), 0);
        assert_eq!(get_page_offset(3, 10), 20);
        assert_eq!(get_page_offset(0, 10), 0);
    }
}
