use super::Service;
use crate::{
    error::Result,
    upload::{FileInfo, FileType, Uploader},
};

impl Service<'_> {
    /// 上传文件：校验扩展名与大小，落盘后返回访问地址
    pub async fn upload_file(
        &self,
        file_type: FileType,
        origin_name: &str,
        data: &[u8],
    ) -> Result<FileInfo> {
        let uploader = Uploader::new(&self.state().settings().app);
        uploader.upload_file(file_type, origin_name, data).await
    }
}
