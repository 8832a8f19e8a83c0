use chrono::NaiveDateTime;
use database::entities::student;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

impl From<student::Model> for StudentResponse {
    fn from(student: student::Model) -> Self {
        Self {
            id: student.id,
            display_name: student.display_name,
            email: student.email,
            created_at: student.created_at,
        }
    }
}

/// Provisions the local mirror of an identity-provider user. The id must be
/// the provider's stable subject for that user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterStudentRequest {
    pub id: String,
    pub display_name: String,
    pub email: String,
}
