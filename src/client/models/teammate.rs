//! Teammate models

use serde::{Deserialize, Serialize};

/// `{ "result": [...] }` list envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub result: Vec<T>,
}

/// List body that may arrive either wrapped in a `result` envelope or bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Envelope(ResultEnvelope<T>),
    Bare(Vec<T>),
}

impl<T> ListBody<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListBody::Envelope(envelope) => envelope.result,
            ListBody::Bare(items) => items,
        }
    }
}

/// A teammate as returned by the list endpoint (no scopes).
///
/// `username` is the identity key; upstream has no numeric teammate ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teammate {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub company: String,
    pub website: String,
    pub phone: String,
    pub is_admin: bool,
    pub is_sso: bool,
    pub user_type: String,
    pub is_unified: bool,
    pub is_partner_sso: bool,
}

impl Teammate {
    /// "First Last", falling back to the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// A teammate with its authoritative scope list (detail endpoint).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeammateScope {
    #[serde(flatten)]
    pub teammate: Teammate,

    #[serde(default)]
    pub scopes: Vec<String>,
}

impl TeammateScope {
    pub fn username(&self) -> &str {
        &self.teammate.username
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }

    /// Set-add `scope`; returns false when it was already present.
    pub fn add_scope(&mut self, scope: &str) -> bool {
        if self.has_scope(scope) {
            return false;
        }
        self.scopes.push(scope.to_string());
        true
    }

    /// Remove the first occurrence of `scope`; returns false when absent.
    pub fn remove_scope(&mut self, scope: &str) -> bool {
        match self.scopes.iter().position(|s| s == scope) {
            Some(index) => {
                self.scopes.remove(index);
                true
            }
            None => false,
        }
    }

    /// Scope list suitable for writing back upstream (placeholders dropped).
    pub fn writable_scopes(&self) -> Vec<String> {
        self.scopes
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect()
    }
}

/// An invited teammate who has not accepted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingInvitation {
    pub token: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub scopes: Vec<String>,
    pub is_admin: bool,
    /// Unix seconds
    pub expiration_date: i64,
}

/// Body for `POST v3/teammates`
#[derive(Debug, Clone, Serialize)]
pub struct InviteTeammateRequest {
    pub email: String,
    pub scopes: Vec<String>,
    pub is_admin: bool,
}

/// Body for `PATCH v3/teammates/{username}`; the scope list is a full replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTeammatePermissions {
    pub scopes: Vec<String>,
    pub is_admin: bool,
}
