use super::Dao;
use crate::model::Auth;

impl Dao<'_> {
    /// 按 app_key 与 app_secret 摘要查询凭据
    pub async fn get_auth(
        &self,
        app_key: &str,
        app_secret: &str,
    ) -> Result<Option<Auth>, sqlx::Error> {
        sqlx::query_as(
            "SELECT * FROM blog_auth WHERE app_key = $1 AND app_secret = $2 AND is_del = 0",
        )
        .bind(app_key)
        .bind(app_secret)
        .fetch_optional(self.db())
        .await
    }
}
