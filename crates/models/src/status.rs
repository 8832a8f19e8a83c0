use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[cfg(feature = "database")]
use sea_orm::Value;
#[cfg(feature = "database")]
use std::str::FromStr;

/// Status of a student's enrollment in a course.
///
/// There is no `Unordered` variant: "unordered" is the absence of an
/// enrollment row for a (course, student) pair and is never persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumString, EnumIter,
)]
pub enum EnrollmentStatus {
    /// The student placed an order; the admin has not acted on it yet.
    Ordered,
    /// The admin approved the order; content access is granted.
    Approved,
    /// The admin marked the order as awaiting payment.
    WaitingForPayment,
}

impl EnrollmentStatus {
    /// Validates a status change against the transition table.
    ///
    /// Re-marking an enrollment with its current status is a no-op and
    /// succeeds, so admin marking endpoints stay idempotent. Everything not
    /// listed below is rejected; in particular there is no transition out of
    /// `Approved` and none back to `Ordered`.
    ///
    /// ```text
    /// Ordered           -> Approved | WaitingForPayment
    /// WaitingForPayment -> Approved
    /// ```
    pub fn transition_to(self, target: Self) -> Result<Self, InvalidTransition> {
        use EnrollmentStatus::{Approved, Ordered, WaitingForPayment};

        let allowed = matches!(
            (self, target),
            (Ordered, Approved) | (Ordered, WaitingForPayment) | (WaitingForPayment, Approved)
        );

        if allowed || self == target {
            Ok(target)
        } else {
            Err(InvalidTransition { from: self, to: target })
        }
    }

    /// The status every freshly placed order starts in.
    pub fn initial() -> Self {
        Self::Ordered
    }
}

/// A status change that the transition table does not permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: EnrollmentStatus,
    pub to: EnrollmentStatus,
}

impl Display for InvalidTransition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "enrollment cannot move from {} to {}", self.from, self.to)
    }
}

impl std::error::Error for InvalidTransition {}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for EnrollmentStatus {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                Self::from_str(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "EnrollmentStatus".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<EnrollmentStatus> for Value {
    fn from(status: EnrollmentStatus) -> Self {
        Value::String(Some(Box::new(status.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for EnrollmentStatus {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        Self::from_str(&val).map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to parse EnrollmentStatus: {e}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for EnrollmentStatus {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod test {
    use super::{EnrollmentStatus, InvalidTransition};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_orders_start_ordered() {
        assert_eq!(EnrollmentStatus::initial(), EnrollmentStatus::Ordered);
    }

    #[test]
    fn test_allowed_transitions() {
        assert_eq!(
            EnrollmentStatus::Ordered.transition_to(EnrollmentStatus::Approved),
            Ok(EnrollmentStatus::Approved)
        );
        assert_eq!(
            EnrollmentStatus::Ordered.transition_to(EnrollmentStatus::WaitingForPayment),
            Ok(EnrollmentStatus::WaitingForPayment)
        );
        assert_eq!(
            EnrollmentStatus::WaitingForPayment.transition_to(EnrollmentStatus::Approved),
            Ok(EnrollmentStatus::Approved)
        );
    }

    #[test]
    fn test_same_state_is_a_no_op() {
        for status in EnrollmentStatus::iter() {
            assert_eq!(status.transition_to(status), Ok(status));
        }
    }

    #[test]
    fn test_approved_is_terminal() {
        assert_eq!(
            EnrollmentStatus::Approved.transition_to(EnrollmentStatus::Ordered),
            Err(InvalidTransition {
                from: EnrollmentStatus::Approved,
                to: EnrollmentStatus::Ordered,
            })
        );
        assert_eq!(
            EnrollmentStatus::Approved.transition_to(EnrollmentStatus::WaitingForPayment),
            Err(InvalidTransition {
                from: EnrollmentStatus::Approved,
                to: EnrollmentStatus::WaitingForPayment,
            })
        );
    }

    #[test]
    fn test_no_way_back_to_ordered() {
        assert!(
            EnrollmentStatus::WaitingForPayment
                .transition_to(EnrollmentStatus::Ordered)
                .is_err()
        );
    }

    #[test]
    fn test_status_round_trips_through_text() {
        for status in EnrollmentStatus::iter() {
            let text = status.to_string();
            assert_eq!(EnrollmentStatus::from_str(&text), Ok(status));
        }
    }
}
