use crate::templates::TemplateId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single request to dispatch one transactional email.
///
/// Created per call and not persisted. The context is handed to the renderer
/// opaquely; the dispatcher never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub recipient: String,
    pub template_id: TemplateId,
    pub context: Option<Value>,
}

impl DispatchRequest {
    pub fn new(recipient: String, template_id: TemplateId, context: Option<Value>) -> Self {
        Self {
            recipient,
            template_id,
            context,
        }
    }
}

/// Renderer output: the final plain-text and HTML bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub text: String,
    pub html: String,
}

/// The composed message handed to a delivery provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}
