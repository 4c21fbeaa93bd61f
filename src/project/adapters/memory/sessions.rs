//! In-memory session bookkeeping.

use std::sync::{Arc, Mutex, PoisonError};

use crate::project::ports::{AuthSessions, SessionToken};

/// Session issuer that counts acquisitions and releases.
#[derive(Debug, Clone, Default)]
pub struct CountingAuthSessions {
    ledger: Arc<Mutex<SessionLedger>>,
}

#[derive(Debug, Default)]
struct SessionLedger {
    issued: Vec<SessionToken>,
    released: Vec<SessionToken>,
}

impl CountingAuthSessions {
    /// Creates a session issuer with an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many sessions were issued.
    #[must_use]
    pub fn issued_count(&self) -> usize {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .issued
            .len()
    }

    /// Returns how many sessions were released.
    #[must_use]
    pub fn released_count(&self) -> usize {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .released
            .len()
    }

    /// Returns `true` when every issued session has been released.
    #[must_use]
    pub fn balanced(&self) -> bool {
        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        ledger.issued.len() == ledger.released.len()
    }
}

impl AuthSessions for CountingAuthSessions {
    fn acquire(&self) -> SessionToken {
        let token = SessionToken::new();
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .issued
            .push(token.clone());
        token
    }

    fn release(&self, token: &SessionToken) {
        self.ledger
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .released
            .push(token.clone());
    }
}
