use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    error::{Error, Result},
    settings::AppSettings,
    util::encode_digest,
};

/// 上传文件类型，`1` 为图片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Image,
}

impl FileType {
    pub fn from_i32(value: i32) -> Option<FileType> {
        match value {
            1 => Some(FileType::Image),
            _ => None,
        }
    }
}

/// 上传结果
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub name: String,
    pub access_url: String,
}

/// 本地文件存储
///
/// 校验扩展名白名单和大小上限后落盘，文件名做摘要脱敏，
/// 返回拼好的对外访问地址。
pub struct Uploader<'a> {
    app: &'a AppSettings,
}

impl<'a> Uploader<'a> {
    pub fn new(app: &'a AppSettings) -> Uploader<'a> {
        Uploader { app }
    }

    /// 目标文件名：原名去后缀做摘要，再拼回原后缀
    pub fn file_name(name: &str) -> String {
        let ext = Self::file_ext(name);
        let stem = name.strip_suffix(&ext).unwrap_or(name);

        format!("{}{}", encode_digest(stem), ext)
    }

    /// 文件后缀，带点；没有后缀返回空串
    pub fn file_ext(name: &str) -> String {
        Path::new(name)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// 扩展名是否在白名单内，不区分大小写
    pub fn check_ext(&self, file_type: FileType, name: &str) -> bool {
        let ext = Self::file_ext(name).to_uppercase();
        match file_type {
            FileType::Image => self
                .app
                .upload_image_allow_exts
                .iter()
                .any(|allow| allow.to_uppercase() == ext),
        }
    }

    /// 文件大小是否超过上限
    pub fn check_max_size(&self, file_type: FileType, size: usize) -> bool {
        match file_type {
            FileType::Image => size <= self.app.upload_image_max_size * 1024 * 1024,
        }
    }

    /// 校验并保存文件，返回文件名和访问地址
    pub async fn upload_file(
        &self,
        file_type: FileType,
        origin_name: &str,
        data: &[u8],
    ) -> Result<FileInfo> {
        if !self.check_ext(file_type, origin_name) {
            return Err(Error::Upload("文件后缀不被支持"));
        }
        if !self.check_max_size(file_type, data.len()) {
            return Err(Error::Upload("文件大小超出最大限制"));
        }

        let name = Self::file_name(origin_name);
        let save_path = PathBuf::from(&self.app.upload_save_path);
        fs::create_dir_all(&save_path).await?;
        fs::write(save_path.join(&name), data).await?;

        Ok(FileInfo {
            access_url: format!("{}/{}", self.app.upload_server_url, name),
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_settings(save_path: &str) -> AppSettings {
        AppSettings {
            default_page_size: 10,
            max_page_size: 100,
            upload_save_path: save_path.to_string(),
            upload_server_url: "http://127.0.0.1:8000/static".to_string(),
            upload_image_allow_exts: vec![".jpg".to_string(), ".png".to_string()],
            upload_image_max_size: 1,
        }
    }

    #[test]
    fn file_name_is_digested_but_keeps_ext() {
        let name = Uploader::file_name("头像.PNG");
        assert!(name.ends_with(".PNG"));
        assert_eq!(name.len(), 64 + 4);
        // 同名输入结果稳定
        assert_eq!(name, Uploader::file_name("头像.PNG"));
    }

    #[test]
    fn ext_check_is_case_insensitive() {
        let app = app_settings("unused");
        let uploader = Uploader::new(&app);
        assert!(uploader.check_ext(FileType::Image, "a.jpg"));
        assert!(uploader.check_ext(FileType::Image, "a.JPG"));
        assert!(uploader.check_ext(FileType::Image, "a.Png"));
        assert!(!uploader.check_ext(FileType::Image, "a.gif"));
        assert!(!uploader.check_ext(FileType::Image, "no-ext"));
    }

    #[test]
    fn size_check() {
        let app = app_settings("unused");
        let uploader = Uploader::new(&app);
        assert!(uploader.check_max_size(FileType::Image, 1024));
        assert!(uploader.check_max_size(FileType::Image, 1024 * 1024));
        assert!(!uploader.check_max_size(FileType::Image, 1024 * 1024 + 1));
    }

    #[tokio::test]
    async fn upload_saves_file_and_builds_url() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let app = app_settings(dir.path().to_str().expect("路径非 UTF-8"));
        let uploader = Uploader::new(&app);

        let info = uploader
            .upload_file(FileType::Image, "cover.png", b"png-bytes")
            .await
            .expect("上传失败");

        assert!(info.access_url.starts_with("http://127.0.0.1:8000/static/"));
        let saved = std::fs::read(dir.path().join(&info.name)).expect("读取保存文件失败");
        assert_eq!(saved, b"png-bytes");
    }

    #[tokio::test]
    async fn upload_rejects_bad_ext_and_oversize() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let app = app_settings(dir.path().to_str().expect("路径非 UTF-8"));
        let uploader = Uploader::new(&app);

        assert!(matches!(
            uploader.upload_file(FileType::Image, "a.exe", b"x").await,
            Err(Error::Upload(_))
        ));

        let big = vec![0u8; 1024 * 1024 + 1];
        assert!(matches!(
            uploader.upload_file(FileType::Image, "a.png", &big).await,
            Err(Error::Upload(_))
        ));
    }
}
