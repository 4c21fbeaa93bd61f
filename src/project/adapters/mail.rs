//! Mail notification rendered from a template.

use async_trait::async_trait;
use minijinja::Environment;
use std::sync::Arc;

use crate::project::{
    domain::ProjectRecord,
    ports::{AdapterError, AdapterResult, MailGateway, MailMessage, Notifier},
};

/// Body template used when no deployment-specific template is configured.
const DEFAULT_BODY_TEMPLATE: &str = "\
Project {{ key }} has been provisioned.
{% if bugtracker_url %}Issue tracker: {{ bugtracker_url }}
{% endif %}{% if collaboration_space_url %}Collaboration space: {{ collaboration_space_url }}
{% endif %}{% if scm_url %}Source control: {{ scm_url }}
{% endif %}";

/// Notifier that renders a templated project summary and hands the result
/// to a delivery gateway.
#[derive(Clone)]
pub struct TemplatedMailNotifier {
    gateway: Arc<dyn MailGateway>,
    body_template: String,
}

impl TemplatedMailNotifier {
    /// Creates a notifier using the default body template.
    #[must_use]
    pub fn new(gateway: Arc<dyn MailGateway>) -> Self {
        Self::with_template(gateway, DEFAULT_BODY_TEMPLATE)
    }

    /// Creates a notifier rendering the given body template.
    ///
    /// The template receives the full project record as its context.
    #[must_use]
    pub fn with_template(gateway: Arc<dyn MailGateway>, body_template: impl Into<String>) -> Self {
        Self {
            gateway,
            body_template: body_template.into(),
        }
    }
}

#[async_trait]
impl Notifier for TemplatedMailNotifier {
    async fn notify_users(&self, record: &ProjectRecord) -> AdapterResult<()> {
        let environment = Environment::new();
        let body = environment
            .render_str(&self.body_template, record)
            .map_err(|err| AdapterError::new("mail", err.to_string()))?;
        let message = MailMessage {
            subject: format!("Project {} provisioned", record.key),
            body,
        };
        self.gateway.send(message).await
    }
}
