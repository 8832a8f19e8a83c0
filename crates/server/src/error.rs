use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use database::services::course::CatalogError;
use database::services::enrollment::EnrollmentError;
use database::services::student::StudentError;
use sea_orm::DbErr;
use serde::Serialize;
use utoipa::ToSchema;

/// Structured body every error response carries.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub error: &'static str,
    /// Human-readable explanation
    pub message: String,
}

/// API-boundary error taxonomy. Content gating deliberately does not appear
/// here: a student who is not yet approved gets a 200 `Pending` payload,
/// never an error.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    InvalidTransition(String),
    Validation(String),
    Unauthenticated,
    Unauthorized(String),
    Internal,
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} does not exist"))
    }

    pub fn unauthorized(action: &str) -> Self {
        Self::Unauthorized(format!("your role does not allow you to {action}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::InvalidTransition(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Unauthorized(_) => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::InvalidTransition(_) => "invalid_transition",
            Self::Validation(_) => "validation_failed",
            Self::Unauthenticated => "unauthenticated",
            Self::Unauthorized(_) => "unauthorized",
            Self::Internal => "internal",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound(m)
            | Self::Conflict(m)
            | Self::InvalidTransition(m)
            | Self::Validation(m)
            | Self::Unauthorized(m) => m.clone(),
            Self::Unauthenticated => "a valid access token is required".to_string(),
            Self::Internal => "something went wrong".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code(),
            message: self.message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<DbErr> for ApiError {
    fn from(e: DbErr) -> Self {
        log::error!("database error: {e}");
        Self::Internal
    }
}

impl From<EnrollmentError> for ApiError {
    fn from(e: EnrollmentError) -> Self {
        match e {
            EnrollmentError::CourseNotFound
            | EnrollmentError::StudentNotFound
            | EnrollmentError::EnrollmentNotFound => Self::NotFound(e.to_string()),
            EnrollmentError::AlreadyOrdered => Self::Conflict(e.to_string()),
            EnrollmentError::InvalidTransition(t) => Self::InvalidTransition(t.to_string()),
            EnrollmentError::Db(db) => db.into(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::CourseNotFound
            | CatalogError::SectionNotFound
            | CatalogError::VideoNotFound => Self::NotFound(e.to_string()),
            CatalogError::Db(db) => db.into(),
        }
    }
}

impl From<StudentError> for ApiError {
    fn from(e: StudentError) -> Self {
        match e {
            StudentError::AlreadyRegistered => Self::Conflict(e.to_string()),
            StudentError::Db(db) => db.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ApiError;
    use axum::http::StatusCode;
    use database::services::enrollment::EnrollmentError;
    use models::status::{EnrollmentStatus, InvalidTransition};

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::not_found("course").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Conflict("dup".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Validation("blank".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::unauthorized("approve orders").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_enrollment_error_mapping() {
        let conflict: ApiError = EnrollmentError::AlreadyOrdered.into();
        assert_eq!(conflict.code(), "conflict");
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let missing: ApiError = EnrollmentError::CourseNotFound.into();
        assert_eq!(missing.code(), "not_found");

        let invalid: ApiError = EnrollmentError::InvalidTransition(InvalidTransition {
            from: EnrollmentStatus::Approved,
            to: EnrollmentStatus::Ordered,
        })
        .into();
        assert_eq!(invalid.code(), "invalid_transition");
        assert_eq!(invalid.status(), StatusCode::CONFLICT);
    }
}
