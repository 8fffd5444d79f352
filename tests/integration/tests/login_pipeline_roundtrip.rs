use std::{
    cell::RefCell,
    collections::{BTreeMap, VecDeque},
    io,
};

use stratus_config::{load_session_config, save_session_config, SessionConfig};
use stratus_core::{
    ApiConnection, Authenticator, Credentials, Directory, Endpoint, EndpointInfo, EndpointProbe,
    LoginError, Organization, PromptCatalog, PromptKind, PromptSpec, RemoteError, Space, Terminal,
    TokenGrant,
};
use stratus_login::{perform_interactive_login, LoginCollaborators, LoginOptions};
use tempfile::tempdir;

#[derive(Default)]
struct ScriptedTerminal {
    answers: VecDeque<String>,
    secrets: VecDeque<String>,
    asked: Vec<String>,
    secret_labels: Vec<String>,
    said: Vec<String>,
}

impl ScriptedTerminal {
    fn new(answers: &[&str], secrets: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|value| value.to_string()).collect(),
            secrets: secrets.iter().map(|value| value.to_string()).collect(),
            ..Self::default()
        }
    }
}

fn closed_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
}

impl Terminal for ScriptedTerminal {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        self.asked.push(label.to_string());
        self.answers.pop_front().ok_or_else(closed_input)
    }

    fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        self.secret_labels.push(label.to_string());
        self.secrets.pop_front().ok_or_else(closed_input)
    }

    fn say(&mut self, message: &str) {
        self.said.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.said.push(message.to_string());
    }

    fn ok(&mut self) {
        self.said.push("OK".to_string());
    }
}

/// Platform double keyed by API endpoint host.
struct FakePlatform {
    catalog: PromptCatalog,
    outcomes: RefCell<VecDeque<Result<TokenGrant, RemoteError>>>,
    attempts: RefCell<Vec<Credentials>>,
    organizations: Vec<Organization>,
    spaces: BTreeMap<String, Vec<Space>>,
}

impl FakePlatform {
    fn new(catalog: PromptCatalog, outcomes: Vec<Result<TokenGrant, RemoteError>>) -> Self {
        Self {
            catalog,
            outcomes: RefCell::new(outcomes.into()),
            attempts: RefCell::new(Vec::new()),
            organizations: vec![Organization {
                guid: "org1-guid".to_string(),
                name: "org1".to_string(),
            }],
            spaces: BTreeMap::from([(
                "org1-guid".to_string(),
                vec![Space {
                    guid: "space1-guid".to_string(),
                    name: "space1".to_string(),
                }],
            )]),
        }
    }

    fn authenticate_calls(&self) -> usize {
        self.attempts.borrow().len()
    }

    fn collaborators(&self) -> LoginCollaborators<'_> {
        LoginCollaborators {
            probe: self,
            authenticator: self,
            directory: self,
        }
    }
}

impl EndpointProbe for FakePlatform {
    fn probe(&self, endpoint: &Endpoint) -> Result<EndpointInfo, RemoteError> {
        Ok(EndpointInfo {
            api_version: "2.150.0".to_string(),
            auth_endpoint: endpoint.url.replace("api.", "login."),
            uaa_endpoint: endpoint.url.replace("api.", "uaa."),
            doppler_endpoint: String::new(),
            log_cache_endpoint: endpoint.url.replace("api.", "log-cache."),
        })
    }
}

impl Authenticator for FakePlatform {
    fn fetch_prompts(&self, _connection: &ApiConnection<'_>) -> Result<PromptCatalog, RemoteError> {
        Ok(self.catalog.clone())
    }

    fn authenticate(
        &self,
        _connection: &ApiConnection<'_>,
        credentials: &Credentials,
    ) -> Result<TokenGrant, RemoteError> {
        self.attempts.borrow_mut().push(credentials.clone());
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Rejected("no scripted outcome".to_string())))
    }
}

impl Directory for FakePlatform {
    fn list_organizations(
        &self,
        _connection: &ApiConnection<'_>,
        page_size: usize,
    ) -> Result<Vec<Organization>, RemoteError> {
        Ok(self.organizations.iter().take(page_size).cloned().collect())
    }

    fn list_spaces(
        &self,
        _connection: &ApiConnection<'_>,
        organization: &Organization,
        page_size: usize,
    ) -> Result<Vec<Space>, RemoteError> {
        Ok(self
            .spaces
            .get(&organization.guid)
            .map(|spaces| spaces.iter().take(page_size).cloned().collect())
            .unwrap_or_default())
    }

    fn find_organization_by_name(
        &self,
        _connection: &ApiConnection<'_>,
        name: &str,
    ) -> Result<Organization, RemoteError> {
        self.organizations
            .iter()
            .find(|organization| organization.name == name)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("Organization {name}")))
    }

    fn find_space_by_name(
        &self,
        _connection: &ApiConnection<'_>,
        organization: &Organization,
        name: &str,
    ) -> Result<Space, RemoteError> {
        self.spaces
            .get(&organization.guid)
            .and_then(|spaces| spaces.iter().find(|space| space.name == name))
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("Space {name}")))
    }
}

fn password_catalog() -> PromptCatalog {
    PromptCatalog::new()
        .with(PromptSpec::new("username", PromptKind::Text, "Email"))
        .with(PromptSpec::new("password", PromptKind::Secret, "Password"))
}

fn grant(token: &str) -> TokenGrant {
    TokenGrant {
        access_token: token.to_string(),
        refresh_token: format!("{token}-refresh"),
    }
}

fn rejected() -> Result<TokenGrant, RemoteError> {
    Err(RemoteError::Rejected(
        "Credentials were rejected, please try again.".to_string(),
    ))
}

fn login_to(endpoint: &str) -> LoginOptions {
    LoginOptions {
        endpoint: Some(endpoint.to_string()),
        ..LoginOptions::default()
    }
}

#[test]
fn integration_password_login_recovers_from_one_rejection() {
    let platform = FakePlatform::new(password_catalog(), vec![rejected(), Ok(grant("token-1"))]);
    let mut terminal = ScriptedTerminal::new(&["user@example.com"], &["wrong", "right"]);
    let mut config = SessionConfig::default();

    let outcome = perform_interactive_login(
        &login_to("https://api.example.com"),
        &platform.collaborators(),
        &mut config,
        &mut terminal,
    )
    .expect("login should succeed on the second attempt");

    assert_eq!(platform.authenticate_calls(), 2);
    assert!(outcome.organization_targeted);
    assert!(outcome.space_targeted);
    assert_eq!(
        config.organization.as_ref().map(|org| org.name.as_str()),
        Some("org1")
    );
    assert_eq!(
        config.space.as_ref().map(|space| space.name.as_str()),
        Some("space1")
    );
    assert_eq!(config.instances.len(), 1);
    assert_eq!(config.instances[0].auth_endpoint, "https://login.example.com");
    assert_eq!(terminal.asked, vec!["Email"]);
    assert!(terminal
        .said
        .contains(&"Credentials were rejected, please try again.".to_string()));
}

#[test]
fn integration_sso_passcode_login_makes_single_attempt_without_prompting() {
    let platform = FakePlatform::new(PromptCatalog::new(), vec![Ok(grant("sso-token"))]);
    let mut terminal = ScriptedTerminal::default();
    let mut config = SessionConfig::default();
    let options = LoginOptions {
        sso_passcode: Some("123456".to_string()),
        ..login_to("https://api.example.com")
    };

    perform_interactive_login(&options, &platform.collaborators(), &mut config, &mut terminal)
        .expect("sso login");

    assert_eq!(platform.authenticate_calls(), 1);
    assert!(terminal.secret_labels.is_empty());
    assert_eq!(
        platform.attempts.borrow()[0].get("passcode"),
        Some("123456")
    );
    assert_eq!(config.access_token, "sso-token");
}

#[test]
fn integration_history_survives_persistence_across_endpoints() {
    let tempdir = tempdir().expect("tempdir");
    let path = tempdir.path().join("config.json");

    for (endpoint, token) in [
        ("https://api.one.com", "one"),
        ("https://api.two.com", "two"),
        ("https://api.one.com", "one-again"),
    ] {
        let mut config = load_session_config(&path).expect("load");
        let platform = FakePlatform::new(password_catalog(), vec![Ok(grant(token))]);
        let mut terminal = ScriptedTerminal::new(&[], &["pw"]);
        let options = LoginOptions {
            username: Some("user".to_string()),
            ..login_to(endpoint)
        };
        perform_interactive_login(&options, &platform.collaborators(), &mut config, &mut terminal)
            .expect("login");
        save_session_config(&path, &config).expect("save");
    }

    let config = load_session_config(&path).expect("reload");
    let keys = config
        .instances
        .iter()
        .map(|session| session.auth_endpoint.as_str())
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["https://login.one.com", "https://login.two.com"]);
    assert_eq!(config.instances[0].access_token, "one-again");
    assert_eq!(config.instances[1].access_token, "two");
}

#[test]
fn regression_exhausted_login_reports_generic_failure() {
    let platform = FakePlatform::new(password_catalog(), vec![rejected(), rejected(), rejected()]);
    let mut terminal = ScriptedTerminal::new(&["user"], &["a", "b", "c", "d"]);
    let mut config = SessionConfig::default();

    let error = perform_interactive_login(
        &login_to("https://api.example.com"),
        &platform.collaborators(),
        &mut config,
        &mut terminal,
    )
    .expect_err("exhausted");

    assert!(matches!(error, LoginError::AuthenticationFailed));
    assert_eq!(error.to_string(), "Unable to authenticate.");
    assert_eq!(platform.authenticate_calls(), 3);
    assert!(config.instances.is_empty());
}
