//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use super::models::{PendingInvitation, Subuser, Teammate, TeammateScope, TeammateSubuser};

// ============================================================================
// TeammateBuilder
// ============================================================================

/// Builder for creating test TeammateScope instances.
///
/// # Example
/// ```ignore
/// let alice = TeammateBuilder::new("alice")
///     .name("Alice", "Liddell")
///     .scopes(&["mail.send", "billing.read"])
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct TeammateBuilder {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    is_admin: bool,
    user_type: String,
    scopes: Vec<String>,
}

impl TeammateBuilder {
    /// Create a new builder with the given username.
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            email: format!("{}@example.com", &username),
            first_name: "Test".to_string(),
            last_name: "Teammate".to_string(),
            is_admin: false,
            user_type: "teammate".to_string(),
            scopes: Vec::new(),
            username,
        }
    }

    /// Set the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the first and last name.
    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Mark the teammate as an account admin.
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self.user_type = "admin".to_string();
        self
    }

    /// Append one scope.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Replace the scope list.
    pub fn scopes(mut self, scopes: &[&str]) -> Self {
        self.scopes = scopes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Build the TeammateScope.
    pub fn build(self) -> TeammateScope {
        TeammateScope {
            teammate: Teammate {
                username: self.username,
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
                is_admin: self.is_admin,
                user_type: self.user_type,
                ..Default::default()
            },
            scopes: self.scopes,
        }
    }
}

// ============================================================================
// SubuserBuilder
// ============================================================================

/// Builder for creating test Subuser instances.
#[derive(Debug, Clone)]
pub struct SubuserBuilder {
    id: u64,
    username: String,
    email: String,
    disabled: bool,
}

impl SubuserBuilder {
    /// Create a new builder with the given ID and username.
    pub fn new(id: u64, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            id,
            email: format!("{}@example.com", &username),
            disabled: false,
            username,
        }
    }

    /// Set the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Mark the subuser as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Build the Subuser.
    pub fn build(self) -> Subuser {
        Subuser {
            id: self.id,
            username: self.username,
            email: self.email,
            disabled: self.disabled,
        }
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Create a teammate holding the given scopes.
pub fn test_teammate(username: &str, scopes: &[&str]) -> TeammateScope {
    TeammateBuilder::new(username).scopes(scopes).build()
}

/// Create a minimal test subuser.
pub fn test_subuser(id: u64, username: &str) -> Subuser {
    SubuserBuilder::new(id, username).build()
}

/// One entry of a teammate's subuser access list.
pub fn access_entry(id: u64, username: &str) -> TeammateSubuser {
    TeammateSubuser {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        disabled: false,
        permission_type: "restricted".to_string(),
        scopes: vec!["mail.send".to_string()],
    }
}

/// Create an outstanding invitation.
pub fn test_invitation(email: &str, scopes: &[&str]) -> PendingInvitation {
    PendingInvitation {
        token: format!("token-{}", email),
        email: email.to_string(),
        scopes: scopes.iter().map(|s| s.to_string()).collect(),
        expiration_date: 1_700_000_000,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teammate_builder_defaults() {
        let t = TeammateBuilder::new("alice").build();
        assert_eq!(t.username(), "alice");
        assert_eq!(t.teammate.email, "alice@example.com");
        assert_eq!(t.teammate.display_name(), "Test Teammate");
        assert!(!t.teammate.is_admin);
        assert!(t.scopes.is_empty());
    }

    #[test]
    fn test_teammate_builder_with_scopes() {
        let t = TeammateBuilder::new("bob")
            .admin()
            .scope("mail.send")
            .scope("billing.read")
            .build();
        assert!(t.teammate.is_admin);
        assert_eq!(t.teammate.user_type, "admin");
        assert_eq!(t.scopes, vec!["mail.send", "billing.read"]);
    }

    #[test]
    fn test_subuser_builder() {
        let s = SubuserBuilder::new(9, "marketing").disabled().build();
        assert_eq!(s.id, 9);
        assert_eq!(s.email, "marketing@example.com");
        assert!(s.disabled);
    }
}
