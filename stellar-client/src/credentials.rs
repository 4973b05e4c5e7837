//! Credential storage for the access/refresh token pair
//!
//! The access token is short-lived (the browser build keeps it in a
//! cookie), the refresh token longer-lived (local storage). Nothing here
//! depends on the token's internal format beyond presence/absence; the
//! access token is stored exactly as the server returned it, "Bearer "
//! prefix included, and sent back verbatim.

use parking_lot::RwLock;

/// Read/write/delete access to the stored token pair
pub trait CredentialStore: Send + Sync {
    /// Current access token, if any
    fn access_token(&self) -> Option<String>;

    /// Current refresh token, if any
    fn refresh_token(&self) -> Option<String>;

    /// Store a freshly issued token pair
    fn store(&self, access_token: String, refresh_token: String);

    /// Drop both tokens
    fn clear(&self);
}

#[derive(Debug, Default)]
struct TokenPair {
    access: Option<String>,
    refresh: Option<String>,
}

/// In-memory credential store for one page session
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    tokens: RwLock<TokenPair>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn access_token(&self) -> Option<String> {
        self.tokens.read().access.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.read().refresh.clone()
    }

    fn store(&self, access_token: String, refresh_token: String) {
        let mut tokens = self.tokens.write();
        tokens.access = Some(access_token);
        tokens.refresh = Some(refresh_token);
    }

    fn clear(&self) {
        let mut tokens = self.tokens.write();
        tokens.access = None;
        tokens.refresh = None;
    }
}
