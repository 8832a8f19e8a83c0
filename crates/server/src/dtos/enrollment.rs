use database::entities::enrollment;
use models::status::EnrollmentStatus;
use sea_orm::prelude::Uuid;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct EnrollmentResponse {
    pub course_id: String,
    pub student_id: String,
    #[schema(value_type = String)]
    pub status: EnrollmentStatus,
}

impl From<enrollment::Model> for EnrollmentResponse {
    fn from(enrollment: enrollment::Model) -> Self {
        Self {
            course_id: enrollment.course_id.to_string(),
            student_id: enrollment.student_id,
            status: enrollment.status,
        }
    }
}

/// Identifies one enrollment by its natural key. The admin marking
/// endpoints take this as their body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EnrollmentRef {
    #[schema(value_type = String)]
    pub course_id: Uuid,
    pub student_id: String,
}

#[cfg(test)]
mod test {
    use super::EnrollmentResponse;
    use database::entities::enrollment;
    use models::status::EnrollmentStatus;
    use sea_orm::prelude::Uuid;

    #[test]
    fn test_response_preserves_pair_identity() {
        let course_id = Uuid::new_v4();
        let now = chrono::Utc::now().naive_utc();
        let model = enrollment::Model {
            course_id,
            student_id: "student-7".to_string(),
            status: EnrollmentStatus::Ordered,
            created_at: now,
            updated_at: now,
        };

        let response = EnrollmentResponse::from(model);
        assert_eq!(response.course_id, course_id.to_string());
        assert_eq!(response.student_id, "student-7");
        assert_eq!(response.status, EnrollmentStatus::Ordered);
    }
}
