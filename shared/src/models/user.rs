//! Authenticated identity

use serde::{Deserialize, Serialize};

/// Authenticated identity; empty strings when unauthenticated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Whether this is the unauthenticated placeholder identity
    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}
