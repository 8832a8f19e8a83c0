use crate::entities::student;
use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudentError {
    #[error("a student with this id is already registered")]
    AlreadyRegistered,
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Maintains the local mirror of the identity provider's user records.
/// Authentication itself happens upstream; this service only knows about
/// the rows that enrollments reference.
pub struct StudentService;

impl StudentService {
    pub async fn register(
        db: &DatabaseConnection,
        id: String,
        display_name: String,
        email: String,
    ) -> Result<student::Model, StudentError> {
        let record = student::ActiveModel {
            id: Set(id),
            display_name: Set(display_name),
            email: Set(email),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        student::Entity::insert(record)
            .exec_with_returning(db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => StudentError::AlreadyRegistered,
                _ => StudentError::Db(e),
            })
    }

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<student::Model>, DbErr> {
        student::Entity::find().all(db).await
    }
}
