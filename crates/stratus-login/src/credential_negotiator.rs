//! Builds per-attempt credentials from the server's prompt catalog.
//!
//! Static fields (username and other text prompts) are collected once and
//! reused verbatim on every attempt. Secrets are re-asked per attempt; a
//! password or passcode supplied on the command line is spent on the first
//! attempt only.

use stratus_config::SessionConfig;
use stratus_core::{
    Authenticator, Credentials, LoginError, PromptCatalog, PromptKind, PromptSpec, Terminal,
    PASSCODE_PROMPT, PASSWORD_PROMPT, USERNAME_PROMPT,
};

/// Produces the credentials for the next authentication attempt.
pub trait CredentialSource {
    fn next_attempt(&mut self, terminal: &mut dyn Terminal) -> Result<Credentials, LoginError>;
}

pub fn fetch_prompt_catalog(
    authenticator: &dyn Authenticator,
    config: &SessionConfig,
) -> Result<PromptCatalog, LoginError> {
    authenticator
        .fetch_prompts(&config.connection())
        .map_err(LoginError::RemoteUnavailable)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Credentials for the username/password flow.
#[derive(Debug)]
pub struct PasswordCredentials {
    static_values: Credentials,
    password_prompt: Option<PromptSpec>,
    password_override: Option<String>,
    secret_prompts: Vec<PromptSpec>,
}

impl PasswordCredentials {
    /// Asks every static field once. Must run before the retry loop.
    pub fn collect_static(
        catalog: &PromptCatalog,
        username_override: Option<&str>,
        password_override: Option<&str>,
        terminal: &mut dyn Terminal,
    ) -> Result<Self, LoginError> {
        let mut static_values = Credentials::new();

        if let Some(prompt) = catalog.get(USERNAME_PROMPT) {
            let username = match non_empty(username_override) {
                Some(username) if prompt.kind == PromptKind::Text => username.to_string(),
                _ => terminal.ask(&prompt.display_label)?,
            };
            static_values.set(USERNAME_PROMPT, username);
        }

        let mut secret_prompts = Vec::new();
        for prompt in catalog.iter() {
            match (prompt.kind, prompt.name.as_str()) {
                (_, USERNAME_PROMPT | PASSWORD_PROMPT | PASSCODE_PROMPT) => {}
                (PromptKind::Text, name) => {
                    let value = terminal.ask(&prompt.display_label)?;
                    static_values.set(name, value);
                }
                (PromptKind::Secret, _) => secret_prompts.push(prompt.clone()),
            }
        }

        Ok(Self {
            static_values,
            password_prompt: catalog.get(PASSWORD_PROMPT).cloned(),
            password_override: non_empty(password_override).map(str::to_string),
            secret_prompts,
        })
    }
}

impl CredentialSource for PasswordCredentials {
    fn next_attempt(&mut self, terminal: &mut dyn Terminal) -> Result<Credentials, LoginError> {
        let mut credentials = self.static_values.clone();
        // Password first so additional codes (e.g. MFA) are asked after it.
        if let Some(prompt) = &self.password_prompt {
            let password = match self.password_override.take() {
                Some(password) => password,
                None => terminal.ask_secret(&prompt.display_label)?,
            };
            credentials.set(PASSWORD_PROMPT, password);
        }
        for prompt in &self.secret_prompts {
            let value = terminal.ask_secret(&prompt.display_label)?;
            credentials.set(prompt.name.as_str(), value);
        }
        Ok(credentials)
    }
}

/// The server's passcode prompt, or a synthesized one pointing at
/// `<auth endpoint>/passcode` when the catalog has none.
pub fn passcode_prompt(catalog: &PromptCatalog, auth_endpoint: &str) -> PromptSpec {
    catalog
        .get(PASSCODE_PROMPT)
        .filter(|prompt| !prompt.display_label.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| {
            PromptSpec::new(
                PASSCODE_PROMPT,
                PromptKind::Secret,
                format!("Temporary Authentication Code ( Get one at {auth_endpoint}/passcode )"),
            )
        })
}

/// Credentials for the SSO one-time passcode flow.
#[derive(Debug)]
pub struct PasscodeCredentials {
    prompt: PromptSpec,
    passcode_override: Option<String>,
}

impl PasscodeCredentials {
    pub fn new(prompt: PromptSpec, passcode_override: Option<&str>) -> Self {
        Self {
            prompt,
            passcode_override: passcode_override.map(str::to_string),
        }
    }
}

impl CredentialSource for PasscodeCredentials {
    fn next_attempt(&mut self, terminal: &mut dyn Terminal) -> Result<Credentials, LoginError> {
        let passcode = match self.passcode_override.take() {
            Some(passcode) => passcode,
            None => terminal.ask_secret(&self.prompt.display_label)?,
        };
        let mut credentials = Credentials::new();
        credentials.set(PASSCODE_PROMPT, passcode);
        Ok(credentials)
    }
}
