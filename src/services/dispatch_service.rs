/// Email dispatch service.
///
/// One dispatch resolves the template descriptor, renders the template with
/// the caller's context, and hands the composed message to the delivery
/// provider. Render always completes before delivery begins.
use crate::config::MailerConfig;
use crate::models::{DispatchRequest, OutgoingEmail};
use crate::services::email_delivery_provider::{
    DeliveryError, EmailDeliveryProvider, SmtpDeliveryProvider,
};
use crate::services::template_renderer::{FileTemplateRenderer, RenderError, TemplateRenderer};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Message delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Dispatch service wiring a renderer to a delivery provider
#[derive(Clone)]
pub struct DispatchService {
    renderer: Arc<dyn TemplateRenderer>,
    provider: Arc<dyn EmailDeliveryProvider>,
}

impl DispatchService {
    pub fn new(
        renderer: Arc<dyn TemplateRenderer>,
        provider: Arc<dyn EmailDeliveryProvider>,
    ) -> Self {
        Self { renderer, provider }
    }

    /// Wire up the file-backed renderer and SMTP provider from configuration
    pub fn from_config(config: &MailerConfig) -> Self {
        let renderer = Arc::new(FileTemplateRenderer::new(config.template_dir.clone()));
        let provider = Arc::new(SmtpDeliveryProvider::new(config.clone()));
        Self::new(renderer, provider)
    }

    /// Dispatch one email, surfacing the failure cause to the caller.
    ///
    /// Calling twice with the same request sends twice; there is no
    /// deduplication and no retry.
    pub async fn dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        let descriptor = request.template_id.descriptor();

        let rendered = self
            .renderer
            .render(descriptor.name, request.context.as_ref())
            .await?;

        let email = OutgoingEmail {
            to: request.recipient.clone(),
            subject: descriptor.subject.to_string(),
            text: rendered.text,
            html: rendered.html,
        };

        self.provider.deliver(&email).await?;

        Ok(())
    }

    /// Boolean collapse of [`DispatchService::dispatch`].
    ///
    /// Returns true on success. On any failure the cause is logged and false
    /// is returned; no error propagates past this call.
    pub async fn send_email(&self, request: &DispatchRequest) -> bool {
        match self.dispatch(request).await {
            Ok(()) => {
                tracing::info!(
                    "Dispatched '{}' email to {} via {}",
                    request.template_id,
                    request.recipient,
                    self.provider.provider_name()
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to dispatch '{}' email to {}: {}",
                    request.template_id,
                    request.recipient,
                    e
                );
                false
            }
        }
    }
}
