use crate::caller::CallerContext;
use crate::status::EnrollmentStatus;
use serde::Serialize;

/// Shown to a student whose own enrollment for the course is missing or not
/// yet approved.
pub const ORDER_OR_FOLLOW_MESSAGE: &str =
    "You can't view the content of this course. Order the course, or follow your existing order.";

/// Shown to callers that carry none of the recognized roles.
pub const SIGN_UP_MESSAGE: &str = "Please sign up to view course content.";

/// Outcome of a content-read authorization check.
///
/// `Pending` is data, not a failure: it is rendered with a 200 status and a
/// human-readable reason so a frontend can show a call-to-action instead of
/// an error page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AccessDecision {
    Granted,
    Pending(String),
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// The single predicate behind every content-read endpoint.
///
/// `enrollment` is the status of the caller's own enrollment for the target
/// course, `None` when no row exists for the pair. Staff never consult the
/// ledger, so any value may be passed for them.
pub fn course_content_access(
    caller: &CallerContext,
    enrollment: Option<EnrollmentStatus>,
) -> AccessDecision {
    if caller.is_staff() {
        return AccessDecision::Granted;
    }

    if caller.is_student() {
        return match enrollment {
            Some(EnrollmentStatus::Approved) => AccessDecision::Granted,
            _ => AccessDecision::Pending(ORDER_OR_FOLLOW_MESSAGE.to_string()),
        };
    }

    AccessDecision::Pending(SIGN_UP_MESSAGE.to_string())
}

#[cfg(test)]
mod test {
    use super::{
        AccessDecision, ORDER_OR_FOLLOW_MESSAGE, SIGN_UP_MESSAGE, course_content_access,
    };
    use crate::caller::{CallerContext, Role};
    use crate::status::EnrollmentStatus;

    #[test]
    fn test_staff_granted_without_any_enrollment() {
        let admin = CallerContext::new("a1", vec![Role::Admin]);
        let mentor = CallerContext::new("m1", vec![Role::Mentor]);

        assert_eq!(course_content_access(&admin, None), AccessDecision::Granted);
        assert_eq!(course_content_access(&mentor, None), AccessDecision::Granted);
        // An unapproved enrollment does not matter for staff either.
        assert_eq!(
            course_content_access(&admin, Some(EnrollmentStatus::Ordered)),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_student_granted_only_when_approved() {
        let student = CallerContext::new("s1", vec![Role::Student]);

        assert_eq!(
            course_content_access(&student, Some(EnrollmentStatus::Approved)),
            AccessDecision::Granted
        );
        assert_eq!(
            course_content_access(&student, Some(EnrollmentStatus::Ordered)),
            AccessDecision::Pending(ORDER_OR_FOLLOW_MESSAGE.to_string())
        );
        assert_eq!(
            course_content_access(&student, Some(EnrollmentStatus::WaitingForPayment)),
            AccessDecision::Pending(ORDER_OR_FOLLOW_MESSAGE.to_string())
        );
        assert_eq!(
            course_content_access(&student, None),
            AccessDecision::Pending(ORDER_OR_FOLLOW_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_unrecognized_roles_are_asked_to_sign_up() {
        let nobody = CallerContext::new("n1", vec![]);

        assert_eq!(
            course_content_access(&nobody, None),
            AccessDecision::Pending(SIGN_UP_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_student_also_on_staff_is_granted() {
        // A mentor who is also enrolled as a student keeps the staff bypass.
        let both = CallerContext::new("b1", vec![Role::Mentor, Role::Student]);

        assert_eq!(
            course_content_access(&both, Some(EnrollmentStatus::Ordered)),
            AccessDecision::Granted
        );
    }
}
