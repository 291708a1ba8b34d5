//! Auth session holder

use crate::error::{Error, Result};

/// Bearer token plus the per-screen "viewing own reservations" mode bit.
///
/// The token is set by a successful login or signup and cleared at logout
/// regardless of whether the remote logout call succeeded (that call lives in
/// the api crate and never blocks the local clear).
#[derive(Debug, Default)]
pub struct AuthSession {
    token: Option<String>,
    booked_mode: bool,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token; the session counts as authenticated from here on.
    pub fn authenticate(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the token unconditionally.
    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token for header injection, or an error when logged out.
    pub fn bearer(&self) -> Result<&str> {
        self.token.as_deref().ok_or(Error::NotAuthenticated)
    }

    /// Screens flip this to choose the booked-halls fetch branch on focus.
    pub fn set_booked(&mut self, flag: bool) {
        self.booked_mode = flag;
    }

    pub fn is_booked(&self) -> bool {
        self.booked_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_then_clear() {
        let mut session = AuthSession::new();
        assert!(!session.is_authenticated());
        assert!(session.bearer().is_err());

        session.authenticate("tok123");
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().unwrap(), "tok123");

        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn booked_mode_is_independent_of_auth() {
        let mut session = AuthSession::new();
        session.set_booked(true);
        assert!(session.is_booked());
        session.authenticate("tok");
        session.clear();
        assert!(session.is_booked());
    }
}
