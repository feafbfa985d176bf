use std::env;
use std::path::PathBuf;

/// Mailer configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct MailerConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_use_tls: bool,
    pub from_email: String,
    pub from_name: String,
    pub template_dir: PathBuf,
}

impl MailerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let smtp_host = env::var("SMTP_HOST").map_err(|_| ConfigError::MissingSmtpHost)?;

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let smtp_username =
            env::var("SMTP_USERNAME").map_err(|_| ConfigError::MissingSmtpUsername)?;

        let smtp_password =
            env::var("SMTP_PASSWORD").map_err(|_| ConfigError::MissingSmtpPassword)?;

        let smtp_use_tls = env::var("SMTP_USE_TLS")
            .map(|value| value != "false" && value != "0")
            .unwrap_or(true);

        let from_email = env::var("SMTP_FROM_EMAIL").map_err(|_| ConfigError::MissingFromEmail)?;

        let from_name = env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "Mailroom".to_string());

        let template_dir = env::var("MAIL_TEMPLATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("templates"));

        Ok(MailerConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            smtp_use_tls,
            from_email,
            from_name,
            template_dir,
        })
    }

    /// Sender mailbox in `Display Name <address>` form
    pub fn from_address(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SMTP_HOST environment variable not set")]
    MissingSmtpHost,

    #[error("SMTP_USERNAME environment variable not set")]
    MissingSmtpUsername,

    #[error("SMTP_PASSWORD environment variable not set")]
    MissingSmtpPassword,

    #[error("SMTP_FROM_EMAIL environment variable not set")]
    MissingFromEmail,

    #[error("Invalid port number")]
    InvalidPort,
}
