use crate::services::enrollment::EnrollmentService;
use models::access::{AccessDecision, course_content_access};
use models::caller::CallerContext;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct AccessService;

impl AccessService {
    /// Resolves the content-gating decision for one caller and one course.
    ///
    /// Every gated endpoint goes through here; none of them re-implement
    /// the role/enrollment check inline. Staff never touch the ledger, and
    /// student checks re-read it on every call so the decision always
    /// reflects the latest committed approval.
    pub async fn course_content(
        db: &DatabaseConnection,
        caller: &CallerContext,
        course_id: Uuid,
    ) -> Result<AccessDecision, DbErr> {
        if caller.is_staff() {
            return Ok(AccessDecision::Granted);
        }

        let enrollment = if caller.is_student() {
            EnrollmentService::find(db, course_id, &caller.user_id)
                .await?
                .map(|e| e.status)
        } else {
            None
        };

        Ok(course_content_access(caller, enrollment))
    }
}
