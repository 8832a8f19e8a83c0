use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// Role labels issued by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, EnumString)]
pub enum Role {
    Admin,
    Mentor,
    Student,
}

/// The resolved identity of a request, passed explicitly into every core
/// operation instead of being read back out of ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    pub user_id: String,
    pub roles: Vec<Role>,
}

impl CallerContext {
    pub fn new(user_id: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            user_id: user_id.into(),
            roles,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Admins and mentors bypass enrollment checks entirely.
    pub fn is_staff(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::Mentor)
    }

    pub fn is_student(&self) -> bool {
        self.has_role(Role::Student)
    }
}

#[cfg(test)]
mod test {
    use super::{CallerContext, Role};
    use std::str::FromStr;

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("Admin"), Ok(Role::Admin));
        assert_eq!(Role::from_str("Mentor"), Ok(Role::Mentor));
        assert_eq!(Role::from_str("Student"), Ok(Role::Student));
        assert!(Role::from_str("Superuser").is_err());
    }

    #[test]
    fn test_staff_detection() {
        let admin = CallerContext::new("u1", vec![Role::Admin]);
        let mentor = CallerContext::new("u2", vec![Role::Mentor]);
        let student = CallerContext::new("u3", vec![Role::Student]);
        let nobody = CallerContext::new("u4", vec![]);

        assert!(admin.is_staff());
        assert!(mentor.is_staff());
        assert!(!student.is_staff());
        assert!(student.is_student());
        assert!(!nobody.is_staff());
        assert!(!nobody.is_student());
    }
}
