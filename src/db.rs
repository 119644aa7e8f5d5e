use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::settings::DatabaseSettings;

/// 数据库连接池类型
pub type Db = sqlx::PgPool;

/// 按配置创建连接池
///
/// 连接数上下限与获取超时由配置给出，取用前测试连接可用性。
pub async fn init_db(database: &DatabaseSettings) -> Result<Db, sqlx::Error> {
    PgPoolOptions::new()
        .idle_timeout(Duration::from_secs(60))
        .max_connections(database.max_connections)
        .min_connections(database.min_connections)
        .acquire_timeout(Duration::from_secs(database.acquire_timeout))
        .test_before_acquire(true)
        .connect(&database.url)
        .await
}

/// 执行 SQL 文件中的建表语句
///
/// 将文件内容按 `;` 分割，每条 SQL 单独执行，测试初始化用。
#[allow(unused)]
pub async fn migrate(db: &Db, file: &str) -> Result<(), sqlx::Error> {
    let content = std::fs::read_to_string(file)?;

    for sql in content.split(';') {
        if sql.trim().is_empty() {
            continue;
        }
        sqlx::query(sql).execute(db).await?;
    }
    Ok(())
}
