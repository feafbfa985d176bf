/// Email delivery providers.
///
/// The SMTP provider composes a multipart message with lettre and sends it
/// over a blocking SMTP transport moved off the async runtime. The mock
/// provider simulates delivery without external dependencies.
use crate::config::MailerConfig;
use crate::models::OutgoingEmail;
use crate::shared::utils::email_validator::validate_and_normalize_email;
use async_trait::async_trait;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Invalid recipient address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build email message: {0}")]
    MessageBuild(String),

    #[error("Failed to send email: {0}")]
    Send(String),

    #[error("SMTP configuration error: {0}")]
    Config(String),
}

/// Trait for email delivery providers
/// Allows pluggable delivery mechanisms (SMTP, provider API, capture for tests)
#[async_trait]
pub trait EmailDeliveryProvider: Send + Sync {
    /// Deliver a composed message to its recipient
    /// Returns Ok(()) if delivery succeeded, Err if failed
    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;

    /// Get the provider name for logging/debugging
    fn provider_name(&self) -> &'static str;
}

/// Mock delivery provider for testing
/// Simulates successful delivery without external dependencies
pub struct MockDeliveryProvider {
    /// If true, simulate delivery failures
    pub should_fail: bool,
}

impl MockDeliveryProvider {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockDeliveryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailDeliveryProvider for MockDeliveryProvider {
    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        if self.should_fail {
            Err(DeliveryError::Send(format!(
                "Mock delivery failure for {}",
                email.to
            )))
        } else {
            tracing::debug!(
                "Mock delivery successful for {} ({})",
                email.to,
                email.subject
            );
            Ok(())
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// SMTP delivery provider sending via lettre
pub struct SmtpDeliveryProvider {
    config: MailerConfig,
}

impl SmtpDeliveryProvider {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    fn build_transport(&self) -> Result<SmtpTransport, DeliveryError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let mailer = if self.config.smtp_use_tls {
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| {
                    DeliveryError::Config(format!("Failed to create SMTP transport: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(mailer)
    }
}

#[async_trait]
impl EmailDeliveryProvider for SmtpDeliveryProvider {
    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let to_address = validate_and_normalize_email(&email.to)?;

        let message = Message::builder()
            .from(self.config.from_address().parse().map_err(|e| {
                DeliveryError::MessageBuild(format!("Invalid from address: {}", e))
            })?)
            .to(to_address.parse().map_err(|e| {
                DeliveryError::MessageBuild(format!("Invalid to address: {}", e))
            })?)
            .subject(&email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| DeliveryError::MessageBuild(e.to_string()))?;

        let mailer = self.build_transport()?;

        // lettre's SmtpTransport is blocking; keep the send off the runtime
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| DeliveryError::Send(format!("Task join error: {}", e)))?
            .map_err(|e| DeliveryError::Send(format!("SMTP send error: {}", e)))?;

        tracing::info!("Email sent successfully to {}", to_address);

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "smtp"
    }
}
