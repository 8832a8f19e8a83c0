use sea_orm::{Database, DatabaseConnection, DbErr};

/// Creates a database connection from the `DATABASE_URL` environment
/// variable (loaded from `.env` when present).
pub async fn create_connection() -> Result<DatabaseConnection, DbErr> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")
        .map_err(|_| DbErr::Custom("DATABASE_URL is not set".to_string()))?;

    Database::connect(url).await
}
