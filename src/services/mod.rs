pub mod dispatch_service;
pub mod email_delivery_provider;
pub mod template_renderer;

pub use dispatch_service::*;
pub use email_delivery_provider::*;
pub use template_renderer::*;
