//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared across views. It is provided once as
//! `RwSignal<AuthState>` and replaced wholesale: on app load from the stored
//! token, on login, on logout, and when a protected view finds it expired.
//!
//! LIFECYCLE
//! =========
//! `loading` (SSR and first client render) -> `initialize` reads the stored
//! token -> signed in or signed out. Expired or malformed tokens are removed
//! from storage and treated exactly like no token at all.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::storage::TokenStore;
use crate::util::token::{Claims, Role, TokenError, decode_claims};

/// A signed-in session: the raw bearer token and its decoded claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    pub fn role(&self) -> Role {
        self.claims.role
    }
}

/// Result of reading a stored token at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    Active(Session),
    Expired,
    Malformed,
    Absent,
}

/// Classify a stored token against the clock (`now` in unix seconds).
pub fn restore(token: Option<&str>, now: i64) -> RestoreOutcome {
    let Some(token) = token else {
        return RestoreOutcome::Absent;
    };
    match decode_claims(token) {
        Ok(claims) if claims.is_expired(now) => RestoreOutcome::Expired,
        Ok(claims) => RestoreOutcome::Active(Session { token: token.to_owned(), claims }),
        Err(_) => RestoreOutcome::Malformed,
    }
}

/// Why a freshly issued token was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("token already expired")]
    Expired,
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// `true` until the stored token has been read in the browser.
    pub loading: bool,
    /// Set by [`AuthState::sign_out`] until the guard of the page being
    /// left has sent the visitor home.
    pub signed_out: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true, signed_out: false }
    }
}

impl AuthState {
    /// Build the startup state from the stored token, removing it from the
    /// store when it is expired or malformed.
    pub fn initialize(store: &impl TokenStore, now: i64) -> Self {
        let session = match restore(store.load().as_deref(), now) {
            RestoreOutcome::Active(session) => Some(session),
            RestoreOutcome::Expired | RestoreOutcome::Malformed => {
                store.clear();
                None
            }
            RestoreOutcome::Absent => None,
        };
        Self { session, loading: false, signed_out: false }
    }

    /// Accept a token returned by the login endpoint: persist it and populate
    /// the session. Nothing is persisted when the token is unusable.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the token does not decode or is already
    /// expired.
    pub fn login(&mut self, store: &impl TokenStore, token: &str, now: i64) -> Result<Role, SessionError> {
        let claims = decode_claims(token)?;
        if claims.is_expired(now) {
            return Err(SessionError::Expired);
        }
        let role = claims.role;
        store.save(token);
        self.session = Some(Session { token: token.to_owned(), claims });
        self.loading = false;
        self.signed_out = false;
        Ok(role)
    }

    /// Clear the stored token and the session, whatever the current state.
    pub fn logout(&mut self, store: &impl TokenStore) {
        store.clear();
        self.session = None;
        self.loading = false;
        self.signed_out = false;
    }

    /// Logout requested by the user. Unlike an expiry, this sends the
    /// visitor to the home page rather than to login.
    pub fn sign_out(&mut self, store: &impl TokenStore) {
        self.logout(store);
        self.signed_out = true;
    }

    /// Log out if the live session has expired since it was created.
    /// Returns `true` when a logout happened.
    pub fn expire_if_due(&mut self, store: &impl TokenStore, now: i64) -> bool {
        if !self.session_expired(now) {
            return false;
        }
        self.logout(store);
        true
    }

    pub fn session_expired(&self, now: i64) -> bool {
        self.session.as_ref().is_some_and(|s| s.claims.is_expired(now))
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.claims.display_name())
    }
}
