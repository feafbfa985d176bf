/// Template rendering for transactional emails.
///
/// Templates are plain HTML/text files with `{{placeholder}}` markers that
/// are substituted from a JSON context. Files in the configured template
/// directory take precedence; defaults compiled into the binary are used
/// when a file is missing, so the crate works without filesystem setup.
use crate::models::RenderedEmail;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    #[error("Failed to read template '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template context must be a JSON object, got {0}")]
    InvalidContext(String),
}

/// Renderer collaborator: converts a template name plus caller context into
/// the final plain-text and HTML bodies.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    async fn render(
        &self,
        template_name: &str,
        context: Option<&Value>,
    ) -> Result<RenderedEmail, RenderError>;
}

struct EmbeddedTemplate {
    html: &'static str,
    text: &'static str,
}

fn embedded_templates() -> HashMap<&'static str, EmbeddedTemplate> {
    let mut templates = HashMap::new();
    templates.insert(
        "welcome-template",
        EmbeddedTemplate {
            html: include_str!("../../templates/welcome-template.html"),
            text: include_str!("../../templates/welcome-template.txt"),
        },
    );
    templates.insert(
        "email-verification-template",
        EmbeddedTemplate {
            html: include_str!("../../templates/email-verification-template.html"),
            text: include_str!("../../templates/email-verification-template.txt"),
        },
    );
    templates.insert(
        "password-reset-template",
        EmbeddedTemplate {
            html: include_str!("../../templates/password-reset-template.html"),
            text: include_str!("../../templates/password-reset-template.txt"),
        },
    );
    templates.insert(
        "team-invitation-template",
        EmbeddedTemplate {
            html: include_str!("../../templates/team-invitation-template.html"),
            text: include_str!("../../templates/team-invitation-template.txt"),
        },
    );
    templates
}

/// File-backed template renderer with embedded defaults
pub struct FileTemplateRenderer {
    template_dir: PathBuf,
    embedded: HashMap<&'static str, EmbeddedTemplate>,
}

impl FileTemplateRenderer {
    pub fn new(template_dir: PathBuf) -> Self {
        Self {
            template_dir,
            embedded: embedded_templates(),
        }
    }

    /// Read `<dir>/<name>.<extension>`, returning None when the file does
    /// not exist so the caller can fall back to the embedded default
    async fn read_source(
        &self,
        template_name: &str,
        extension: &str,
    ) -> Result<Option<String>, RenderError> {
        let path = self.template_dir.join(format!("{}.{}", template_name, extension));
        match tokio::fs::read_to_string(&path).await {
            Ok(source) => Ok(Some(source)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RenderError::Io {
                name: template_name.to_string(),
                source: e,
            }),
        }
    }
}

#[async_trait]
impl TemplateRenderer for FileTemplateRenderer {
    async fn render(
        &self,
        template_name: &str,
        context: Option<&Value>,
    ) -> Result<RenderedEmail, RenderError> {
        let vars = context_vars(context)?;

        let html_source = match self.read_source(template_name, "html").await? {
            Some(source) => source,
            None => match self.embedded.get(template_name) {
                Some(embedded) => {
                    tracing::debug!(
                        "Template '{}' not found on disk, using embedded default",
                        template_name
                    );
                    embedded.html.to_string()
                }
                None => return Err(RenderError::TemplateNotFound(template_name.to_string())),
            },
        };

        let html = substitute(&html_source, &vars);

        let text = match self.read_source(template_name, "txt").await? {
            Some(source) => substitute(&source, &vars),
            None => match self.embedded.get(template_name) {
                Some(embedded) => substitute(embedded.text, &vars),
                None => {
                    // Plain text fallback derived from the rendered HTML
                    tracing::debug!(
                        "No plain text variant for template '{}', deriving from HTML",
                        template_name
                    );
                    html_to_plain(&html)
                }
            },
        };

        Ok(RenderedEmail { text, html })
    }
}

/// Mock renderer for testing
/// Produces a fixed rendering without touching the filesystem
pub struct MockTemplateRenderer {
    /// If true, simulate rendering failures
    pub should_fail: bool,
}

impl MockTemplateRenderer {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateRenderer for MockTemplateRenderer {
    async fn render(
        &self,
        template_name: &str,
        _context: Option<&Value>,
    ) -> Result<RenderedEmail, RenderError> {
        if self.should_fail {
            Err(RenderError::TemplateNotFound(template_name.to_string()))
        } else {
            Ok(RenderedEmail {
                text: format!("Mock rendering of {}", template_name),
                html: format!("<p>Mock rendering of {}</p>", template_name),
            })
        }
    }
}

/// Flatten the JSON context into placeholder values.
///
/// Strings are taken verbatim; numbers and booleans use their display form;
/// null becomes empty. Nested values keep their JSON encoding.
fn context_vars(context: Option<&Value>) -> Result<HashMap<String, String>, RenderError> {
    let mut vars = HashMap::new();

    let Some(context) = context else {
        return Ok(vars);
    };

    let Value::Object(entries) = context else {
        return Err(RenderError::InvalidContext(json_type_name(context).to_string()));
    };

    for (key, value) in entries {
        let rendered = match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        };
        vars.insert(key.clone(), rendered);
    }

    Ok(vars)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn substitute(source: &str, vars: &HashMap<String, String>) -> String {
    let mut rendered = source.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{}}}}}", key), value);
    }
    rendered
}

/// Strip markup from rendered HTML to produce a plain text body
fn html_to_plain(html: &str) -> String {
    let normalized = html
        .replace("<br>", "\n")
        .replace("<br/>", "\n")
        .replace("<br />", "\n")
        .replace("</p>", "\n");

    let mut plain = String::with_capacity(normalized.len());
    let mut in_tag = false;
    for c in normalized.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => plain.push(c),
            _ => {}
        }
    }

    plain.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_substitute_placeholders() {
        let vars = context_vars(Some(&json!({"name": "Ada", "count": 3}))).unwrap();

        let rendered = substitute("Hello {{name}}, you have {{count}} new messages", &vars);
        assert_eq!(rendered, "Hello Ada, you have 3 new messages");
    }

    #[test]
    fn test_substitute_leaves_unknown_placeholders() {
        let vars = context_vars(Some(&json!({"name": "Ada"}))).unwrap();

        let rendered = substitute("Hello {{name}}, see {{link}}", &vars);
        assert_eq!(rendered, "Hello Ada, see {{link}}");
    }

    #[test]
    fn test_context_must_be_an_object() {
        let result = context_vars(Some(&json!(["Ada"])));
        assert!(matches!(result, Err(RenderError::InvalidContext(_))));
    }

    #[test]
    fn test_missing_context_renders_template_as_is() {
        let vars = context_vars(None).unwrap();
        assert!(vars.is_empty());

        let rendered = substitute("Hello {{name}}", &vars);
        assert_eq!(rendered, "Hello {{name}}");
    }

    #[test]
    fn test_html_to_plain() {
        let plain = html_to_plain("<p>Hello Ada</p><p>Welcome aboard<br>The Team</p>");
        assert_eq!(plain, "Hello Ada\nWelcome aboard\nThe Team");
    }

    #[test]
    fn test_embedded_fallback_when_dir_missing() {
        let renderer = FileTemplateRenderer::new(PathBuf::from("no-such-directory"));

        let rendered = tokio_test::block_on(
            renderer.render("welcome-template", Some(&json!({"name": "Ada"}))),
        )
        .unwrap();

        assert!(rendered.html.contains("Ada"));
        assert!(rendered.text.contains("Ada"));
    }

    #[test]
    fn test_unknown_template_not_found() {
        let renderer = FileTemplateRenderer::new(PathBuf::from("no-such-directory"));

        let result = tokio_test::block_on(renderer.render("no-such-template", None));
        assert!(matches!(result, Err(RenderError::TemplateNotFound(_))));
    }

    #[tokio::test]
    async fn test_mock_renderer_failure() {
        let renderer = MockTemplateRenderer::new_failing();

        let result = renderer.render("welcome-template", None).await;
        assert!(result.is_err());
    }
}
