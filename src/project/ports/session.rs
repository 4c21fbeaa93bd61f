//! Session port issuing per-request authentication handles.

use std::fmt;
use uuid::Uuid;

/// Opaque handle for one authenticated provisioning request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Creates a new random session token.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues and releases per-request authentication sessions.
///
/// Session bookkeeping is in-process, so the contract is synchronous.
pub trait AuthSessions: Send + Sync {
    /// Acquires a session for the current request.
    fn acquire(&self) -> SessionToken;

    /// Releases a previously acquired session.
    fn release(&self, token: &SessionToken);
}

/// Scoped session acquisition that releases the token when dropped.
///
/// Dropping covers every exit path of an operation body, including early
/// error returns, so acquire and release always balance.
pub struct SessionScope<'a> {
    sessions: &'a dyn AuthSessions,
    token: SessionToken,
}

impl<'a> SessionScope<'a> {
    /// Acquires a session that lasts until the scope is dropped.
    #[must_use]
    pub fn acquire(sessions: &'a dyn AuthSessions) -> Self {
        let token = sessions.acquire();
        Self { sessions, token }
    }

    /// Returns the held session token.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }
}

impl Drop for SessionScope<'_> {
    fn drop(&mut self) {
        self.sessions.release(&self.token);
    }
}

impl fmt::Debug for SessionScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionScope")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}
