use async_trait::async_trait;
use mailroom::{
    DeliveryError, EmailDeliveryProvider, OutgoingEmail, RenderError, RenderedEmail,
    TemplateRenderer,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Renderer stub recording every call it observes
pub struct RecordingRenderer {
    pub calls: Arc<Mutex<Vec<(String, Option<Value>)>>>,
    text: String,
    html: String,
}

impl RecordingRenderer {
    pub fn returning(text: &str, html: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            text: text.to_string(),
            html: html.to_string(),
        }
    }
}

#[async_trait]
impl TemplateRenderer for RecordingRenderer {
    async fn render(
        &self,
        template_name: &str,
        context: Option<&Value>,
    ) -> Result<RenderedEmail, RenderError> {
        self.calls
            .lock()
            .unwrap()
            .push((template_name.to_string(), context.cloned()));

        Ok(RenderedEmail {
            text: self.text.clone(),
            html: self.html.clone(),
        })
    }
}

/// Renderer stub that always fails
pub struct FailingRenderer;

#[async_trait]
impl TemplateRenderer for FailingRenderer {
    async fn render(
        &self,
        template_name: &str,
        _context: Option<&Value>,
    ) -> Result<RenderedEmail, RenderError> {
        Err(RenderError::TemplateNotFound(template_name.to_string()))
    }
}

/// Delivery stub capturing every outgoing email
pub struct RecordingProvider {
    pub deliveries: Arc<Mutex<Vec<OutgoingEmail>>>,
    should_fail: bool,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self {
            deliveries: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            deliveries: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }
}

#[async_trait]
impl EmailDeliveryProvider for RecordingProvider {
    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        if self.should_fail {
            return Err(DeliveryError::Send("stub delivery failure".to_string()));
        }

        self.deliveries.lock().unwrap().push(email.clone());
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }
}
