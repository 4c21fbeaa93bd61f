//! Notification ports for provisioning outcomes.

use super::AdapterResult;
use crate::project::domain::ProjectRecord;
use async_trait::async_trait;

/// Rendered notification handed to a delivery gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    /// Subject line.
    pub subject: String,
    /// Rendered body.
    pub body: String,
}

/// Contract for notifying users about a provisioned project.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Notifies the project's users about the provisioning outcome.
    async fn notify_users(&self, record: &ProjectRecord) -> AdapterResult<()>;
}

/// Outbound mail delivery contract.
///
/// Delivery itself (SMTP, queueing) lives outside this crate; the gateway
/// receives fully rendered messages.
#[async_trait]
pub trait MailGateway: Send + Sync {
    /// Sends one rendered message.
    async fn send(&self, message: MailMessage) -> AdapterResult<()>;
}
