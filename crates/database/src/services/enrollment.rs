use crate::entities::{course, enrollment, student};
use models::status::{EnrollmentStatus, InvalidTransition};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    SqlErr,
};
use thiserror::Error;
use uuid::Uuid;

/// Failures of the enrollment ledger, mapped to API errors at the HTTP
/// boundary.
#[derive(Debug, Error)]
pub enum EnrollmentError {
    #[error("course does not exist")]
    CourseNotFound,
    #[error("student does not exist")]
    StudentNotFound,
    #[error("no enrollment exists for this course and student")]
    EnrollmentNotFound,
    #[error("this student already has an order for this course")]
    AlreadyOrdered,
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// What `place_order` does when the pair already has an enrollment, in any
/// status. Whether re-ordering an already-enrolled course should fail or
/// hand back the existing record is a product decision, so the policy is an
/// explicit argument rather than baked into the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateOrderPolicy {
    /// Reject the order with a conflict.
    #[default]
    Reject,
    /// Hand back the existing enrollment untouched.
    ReturnExisting,
}

pub struct EnrollmentService;

impl EnrollmentService {
    /// Creates an `Ordered` enrollment for the pair.
    ///
    /// The pre-check keeps the common duplicate-order case on the chosen
    /// policy path, and the composite primary key backstops it: of two
    /// racing orders for the same pair exactly one insert succeeds, the
    /// other surfaces the unique violation and takes the same policy path.
    pub async fn place_order(
        db: &DatabaseConnection,
        course_id: Uuid,
        student_id: &str,
        on_duplicate: DuplicateOrderPolicy,
    ) -> Result<enrollment::Model, EnrollmentError> {
        if course::Entity::find_by_id(course_id).one(db).await?.is_none() {
            return Err(EnrollmentError::CourseNotFound);
        }

        if student::Entity::find_by_id(student_id).one(db).await?.is_none() {
            return Err(EnrollmentError::StudentNotFound);
        }

        if let Some(existing) = Self::find(db, course_id, student_id).await? {
            return match on_duplicate {
                DuplicateOrderPolicy::Reject => Err(EnrollmentError::AlreadyOrdered),
                DuplicateOrderPolicy::ReturnExisting => Ok(existing),
            };
        }

        let now = chrono::Utc::now().naive_utc();
        let order = enrollment::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id.to_owned()),
            status: Set(EnrollmentStatus::initial()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = enrollment::Entity::insert(order)
            .exec_with_returning(db)
            .await;

        match inserted {
            Ok(created) => Ok(created),
            // Lost a race against a concurrent order for the same pair.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                match on_duplicate {
                    DuplicateOrderPolicy::Reject => Err(EnrollmentError::AlreadyOrdered),
                    DuplicateOrderPolicy::ReturnExisting => Self::find(db, course_id, student_id)
                        .await?
                        .ok_or(EnrollmentError::EnrollmentNotFound),
                }
            }
            Err(e) => Err(EnrollmentError::Db(e)),
        }
    }

    /// Fetches the enrollment for a (course, student) pair, if any.
    pub async fn find(
        db: &DatabaseConnection,
        course_id: Uuid,
        student_id: &str,
    ) -> Result<Option<enrollment::Model>, DbErr> {
        enrollment::Entity::find_by_id((course_id, student_id.to_owned()))
            .one(db)
            .await
    }

    pub async fn mark_approved(
        db: &DatabaseConnection,
        course_id: Uuid,
        student_id: &str,
    ) -> Result<enrollment::Model, EnrollmentError> {
        Self::transition(db, course_id, student_id, EnrollmentStatus::Approved).await
    }

    pub async fn mark_waiting_for_payment(
        db: &DatabaseConnection,
        course_id: Uuid,
        student_id: &str,
    ) -> Result<enrollment::Model, EnrollmentError> {
        Self::transition(db, course_id, student_id, EnrollmentStatus::WaitingForPayment).await
    }

    /// Applies one step of the status lifecycle. The transition table is
    /// what rejects disallowed moves; this function only persists the
    /// outcome.
    async fn transition(
        db: &DatabaseConnection,
        course_id: Uuid,
        student_id: &str,
        target: EnrollmentStatus,
    ) -> Result<enrollment::Model, EnrollmentError> {
        let current = Self::find(db, course_id, student_id)
            .await?
            .ok_or(EnrollmentError::EnrollmentNotFound)?;

        let next = current.status.transition_to(target)?;
        if next == current.status {
            // Re-marking with the current status; nothing to persist.
            return Ok(current);
        }

        let mut active: enrollment::ActiveModel = current.into();
        active.status = Set(next);
        active.updated_at = Set(chrono::Utc::now().naive_utc());

        let updated = enrollment::Entity::update(active).exec(db).await?;
        Ok(updated)
    }

    /// All enrollments currently in `status`, across every course.
    pub async fn all_in_status(
        db: &DatabaseConnection,
        status: EnrollmentStatus,
    ) -> Result<Vec<enrollment::Model>, DbErr> {
        enrollment::Entity::find()
            .filter(enrollment::Column::Status.eq(status))
            .all(db)
            .await
    }

    pub async fn course_orders_in_status(
        db: &DatabaseConnection,
        course_id: Uuid,
        status: EnrollmentStatus,
    ) -> Result<Vec<enrollment::Model>, DbErr> {
        enrollment::Entity::find()
            .filter(enrollment::Column::Status.eq(status))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .all(db)
            .await
    }

    pub async fn student_orders_in_status(
        db: &DatabaseConnection,
        student_id: &str,
        status: EnrollmentStatus,
    ) -> Result<Vec<enrollment::Model>, DbErr> {
        enrollment::Entity::find()
            .filter(enrollment::Column::Status.eq(status))
            .filter(enrollment::Column::StudentId.eq(student_id))
            .all(db)
            .await
    }

    /// The student's "my courses" view: courses whose enrollment the admin
    /// has approved.
    pub async fn approved_courses(
        db: &DatabaseConnection,
        student_id: &str,
    ) -> Result<Vec<course::Model>, DbErr> {
        let rows = enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .filter(enrollment::Column::Status.eq(EnrollmentStatus::Approved))
            .find_also_related(course::Entity)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, course)| course).collect())
    }

    /// The student's "my orders" view: everything still moving through the
    /// lifecycle, i.e. `Ordered` or `WaitingForPayment`.
    pub async fn open_orders(
        db: &DatabaseConnection,
        student_id: &str,
    ) -> Result<Vec<enrollment::Model>, DbErr> {
        enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .filter(
                Condition::any()
                    .add(enrollment::Column::Status.eq(EnrollmentStatus::Ordered))
                    .add(enrollment::Column::Status.eq(EnrollmentStatus::WaitingForPayment)),
            )
            .all(db)
            .await
    }
}
