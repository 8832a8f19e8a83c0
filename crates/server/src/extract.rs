use crate::error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts};
use models::caller::{CallerContext, Role};
use serde::Deserialize;

/// The claims this API reads out of the validated access token. Everything
/// else in the token is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiClaims {
    pub sub: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Extractor turning the token claims into the explicit caller context that
/// every core operation takes as an argument.
pub struct Caller(pub CallerContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<ApiClaims>()
            .ok_or(ApiError::Unauthenticated)?;

        caller_from_claims(claims).map(Caller)
    }
}

/// Unknown role labels are skipped rather than rejected; an empty role set
/// falls through to the sign-up branch of the access predicate.
fn caller_from_claims(claims: &ApiClaims) -> Result<CallerContext, ApiError> {
    let user_id = claims.sub.clone().ok_or(ApiError::Unauthenticated)?;
    let roles: Vec<Role> = claims
        .roles
        .iter()
        .filter_map(|r| r.parse().ok())
        .collect();

    Ok(CallerContext::new(user_id, roles))
}

/// Write endpoints reject role mismatches outright; only content reads use
/// the softer `Pending` flow.
pub fn require_role(caller: &CallerContext, role: Role, action: &str) -> Result<(), ApiError> {
    if caller.has_role(role) {
        Ok(())
    } else {
        Err(ApiError::unauthorized(action))
    }
}

pub fn require_staff(caller: &CallerContext, action: &str) -> Result<(), ApiError> {
    if caller.is_staff() {
        Ok(())
    } else {
        Err(ApiError::unauthorized(action))
    }
}

#[cfg(test)]
mod test {
    use super::{ApiClaims, caller_from_claims, require_role, require_staff};
    use models::caller::{CallerContext, Role};

    #[test]
    fn test_caller_from_claims_parses_known_roles() {
        let claims = ApiClaims {
            sub: Some("user-1".to_string()),
            roles: vec!["Student".to_string(), "Superuser".to_string()],
        };

        let caller = caller_from_claims(&claims).unwrap();
        assert_eq!(caller.user_id, "user-1");
        assert_eq!(caller.roles, vec![Role::Student]);
    }

    #[test]
    fn test_missing_subject_is_unauthenticated() {
        let claims = ApiClaims {
            sub: None,
            roles: vec!["Admin".to_string()],
        };

        assert!(caller_from_claims(&claims).is_err());
    }

    #[test]
    fn test_role_guards() {
        let student = CallerContext::new("s1", vec![Role::Student]);

        assert!(require_role(&student, Role::Student, "order").is_ok());
        assert!(require_role(&student, Role::Admin, "approve").is_err());
        assert!(require_staff(&student, "create courses").is_err());

        let mentor = CallerContext::new("m1", vec![Role::Mentor]);
        assert!(require_staff(&mentor, "create courses").is_ok());
    }
}
