use serde::{Deserialize, Serialize};
use std::fmt;

/// Static descriptor naming a renderable template and its subject line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub subject: &'static str,
}

static WELCOME: TemplateDescriptor = TemplateDescriptor {
    name: "welcome-template",
    subject: "Welcome!",
};

static EMAIL_VERIFICATION: TemplateDescriptor = TemplateDescriptor {
    name: "email-verification-template",
    subject: "Verify your email address",
};

static PASSWORD_RESET: TemplateDescriptor = TemplateDescriptor {
    name: "password-reset-template",
    subject: "Password Reset Request",
};

static TEAM_INVITATION: TemplateDescriptor = TemplateDescriptor {
    name: "team-invitation-template",
    subject: "You have been invited to join a team",
};

/// The closed set of transactional email templates.
///
/// Every variant maps to exactly one [`TemplateDescriptor`], so an invalid
/// template identifier cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Welcome,
    EmailVerification,
    PasswordReset,
    TeamInvitation,
}

impl TemplateId {
    /// All known template ids, for iteration in tests and tooling
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Welcome,
        TemplateId::EmailVerification,
        TemplateId::PasswordReset,
        TemplateId::TeamInvitation,
    ];

    /// Resolve this id to its descriptor
    pub fn descriptor(&self) -> &'static TemplateDescriptor {
        match self {
            TemplateId::Welcome => &WELCOME,
            TemplateId::EmailVerification => &EMAIL_VERIFICATION,
            TemplateId::PasswordReset => &PASSWORD_RESET,
            TemplateId::TeamInvitation => &TEAM_INVITATION,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Welcome => "welcome",
            TemplateId::EmailVerification => "email-verification",
            TemplateId::PasswordReset => "password-reset",
            TemplateId::TeamInvitation => "team-invitation",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
