//! In-memory notification adapters.

use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

use crate::project::{
    domain::ProjectRecord,
    ports::{AdapterError, AdapterResult, MailGateway, MailMessage, Notifier},
};

/// Notifier that records every notified record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notified: Arc<RwLock<Vec<ProjectRecord>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with an empty call log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records passed to [`Notifier::notify_users`], in order.
    #[must_use]
    pub fn notified(&self) -> Vec<ProjectRecord> {
        self.notified
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_users(&self, record: &ProjectRecord) -> AdapterResult<()> {
        self.notified
            .write()
            .map_err(|err| AdapterError::new("notifier", err.to_string()))?
            .push(record.clone());
        Ok(())
    }
}

/// Mail gateway that records every sent message.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMailGateway {
    sent: Arc<RwLock<Vec<MailMessage>>>,
}

impl InMemoryMailGateway {
    /// Creates a gateway with an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the messages sent through this gateway, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl MailGateway for InMemoryMailGateway {
    async fn send(&self, message: MailMessage) -> AdapterResult<()> {
        self.sent
            .write()
            .map_err(|err| AdapterError::new("mail", err.to_string()))?
            .push(message);
        Ok(())
    }
}
