//! Access policy - who may do what.
//!
//! There is a single admin identity, picked by id. Everyone else who is
//! logged in is a reader. There is no per-resource ownership check: the
//! admin may edit any post regardless of who wrote it.

use serde::Serialize;

use crate::domain::Identity;
use crate::error::DomainError;

/// Id of the admin identity when none is configured.
pub const DEFAULT_ADMIN_USER_ID: i32 = 1;

/// Role of an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Admin,
}

/// Actions that need more than anonymous access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Comment,
    CreatePost,
    EditPost,
    DeletePost,
    DeleteComment,
}

impl Capability {
    pub fn required_role(self) -> Role {
        match self {
            Capability::Comment | Capability::CreatePost => Role::Reader,
            Capability::EditPost | Capability::DeletePost | Capability::DeleteComment => {
                Role::Admin
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    admin_user_id: i32,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USER_ID)
    }
}

impl AccessPolicy {
    pub fn new(admin_user_id: i32) -> Self {
        Self { admin_user_id }
    }

    pub fn admin_user_id(&self) -> i32 {
        self.admin_user_id
    }

    pub fn role_of(&self, identity: &Identity) -> Role {
        if identity.user_id == self.admin_user_id {
            Role::Admin
        } else {
            Role::Reader
        }
    }

    pub fn is_admin(&self, identity: Option<&Identity>) -> bool {
        identity.is_some_and(|id| self.role_of(id) == Role::Admin)
    }

    /// Check `capability` for the caller.
    ///
    /// Anonymous callers get `Unauthenticated` whatever the capability;
    /// authenticated callers lacking the role get `Forbidden`.
    pub fn authorize(
        &self,
        identity: Option<&Identity>,
        capability: Capability,
    ) -> Result<Role, DomainError> {
        let identity = identity.ok_or(DomainError::Unauthenticated)?;
        let role = self.role_of(identity);

        match (capability.required_role(), role) {
            (Role::Admin, Role::Reader) => Err(DomainError::Forbidden),
            _ => Ok(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_id: i32) -> Identity {
        Identity {
            user_id,
            email: format!("user{user_id}@example.com"),
            name: format!("User {user_id}"),
        }
    }

    #[test]
    fn test_default_admin_is_user_one() {
        let policy = AccessPolicy::default();

        assert_eq!(policy.role_of(&identity(1)), Role::Admin);
        assert_eq!(policy.role_of(&identity(2)), Role::Reader);
    }

    #[test]
    fn test_anonymous_is_unauthenticated_for_every_capability() {
        let policy = AccessPolicy::default();

        for cap in [
            Capability::Comment,
            Capability::CreatePost,
            Capability::EditPost,
            Capability::DeletePost,
            Capability::DeleteComment,
        ] {
            assert_eq!(
                policy.authorize(None, cap),
                Err(DomainError::Unauthenticated)
            );
        }
    }

    #[test]
    fn test_reader_can_comment_and_create_posts() {
        let policy = AccessPolicy::default();
        let reader = identity(7);

        assert_eq!(
            policy.authorize(Some(&reader), Capability::Comment),
            Ok(Role::Reader)
        );
        assert_eq!(
            policy.authorize(Some(&reader), Capability::CreatePost),
            Ok(Role::Reader)
        );
    }

    #[test]
    fn test_reader_is_forbidden_admin_capabilities() {
        let policy = AccessPolicy::default();
        let reader = identity(7);

        for cap in [
            Capability::EditPost,
            Capability::DeletePost,
            Capability::DeleteComment,
        ] {
            assert_eq!(
                policy.authorize(Some(&reader), cap),
                Err(DomainError::Forbidden)
            );
        }
    }

    #[test]
    fn test_configured_admin_id() {
        let policy = AccessPolicy::new(42);

        assert!(policy.is_admin(Some(&identity(42))));
        assert!(!policy.is_admin(Some(&identity(1))));
        assert!(!policy.is_admin(None));
        assert_eq!(
            policy.authorize(Some(&identity(42)), Capability::DeletePost),
            Ok(Role::Admin)
        );
    }
}
