use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[cfg(feature = "database")]
use sea_orm::Value;
#[cfg(feature = "database")]
use std::str::FromStr;

/// How a course is delivered to its students.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumString, EnumIter,
)]
pub enum DeliveryMode {
    /// Live remote sessions joined through a meeting link.
    Online,
    /// Physically attended sessions.
    Offline,
    /// Pre-recorded videos attached to the course's sections.
    Recorded,
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::ValueType for DeliveryMode {
    fn try_from(v: Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
        match v {
            Value::String(Some(s)) => {
                Self::from_str(&s).map_err(|_| sea_orm::sea_query::ValueTypeErr)
            }
            _ => Err(sea_orm::sea_query::ValueTypeErr),
        }
    }

    fn type_name() -> String {
        "DeliveryMode".to_string()
    }

    fn array_type() -> sea_orm::sea_query::ArrayType {
        sea_orm::sea_query::ArrayType::String
    }

    fn column_type() -> sea_orm::sea_query::ColumnType {
        sea_orm::sea_query::ColumnType::Text
    }
}

#[cfg(feature = "database")]
impl From<DeliveryMode> for Value {
    fn from(mode: DeliveryMode) -> Self {
        Value::String(Some(Box::new(mode.to_string())))
    }
}

#[cfg(feature = "database")]
impl sea_orm::TryGetable for DeliveryMode {
    fn try_get_by<I: sea_orm::ColIdx>(
        res: &sea_orm::QueryResult,
        index: I,
    ) -> Result<Self, sea_orm::TryGetError> {
        let val: String = res.try_get_by(index)?;

        Self::from_str(&val).map_err(|e| {
            sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(format!(
                "Failed to parse DeliveryMode: {e}"
            )))
        })
    }
}

#[cfg(feature = "database")]
impl sea_orm::sea_query::Nullable for DeliveryMode {
    fn null() -> Value {
        Value::String(None)
    }
}

#[cfg(test)]
mod test {
    use super::DeliveryMode;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_delivery_mode_round_trips_through_text() {
        for mode in DeliveryMode::iter() {
            assert_eq!(DeliveryMode::from_str(&mode.to_string()), Ok(mode));
        }
    }
}
