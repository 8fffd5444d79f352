use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::io;

use stratus_core::{
    ApiConnection, Authenticator, Credentials, Directory, Endpoint, EndpointInfo, EndpointProbe,
    Organization, PromptCatalog, RemoteError, Space, Terminal, TokenGrant,
};

#[derive(Default)]
pub(crate) struct ScriptedTerminal {
    answers: VecDeque<String>,
    secrets: VecDeque<String>,
    pub asked: Vec<String>,
    pub secret_labels: Vec<String>,
    pub said: Vec<String>,
    pub warnings: Vec<String>,
    pub oks: usize,
}

impl ScriptedTerminal {
    pub fn new(answers: &[&str], secrets: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|value| value.to_string()).collect(),
            secrets: secrets.iter().map(|value| value.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn transcript(&self) -> String {
        self.said.join("\n")
    }
}

fn exhausted() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
}

impl Terminal for ScriptedTerminal {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        self.asked.push(label.to_string());
        self.answers.pop_front().ok_or_else(exhausted)
    }

    fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        self.secret_labels.push(label.to_string());
        self.secrets.pop_front().ok_or_else(exhausted)
    }

    fn say(&mut self, message: &str) {
        self.said.push(message.to_string());
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn ok(&mut self) {
        self.oks += 1;
    }
}

pub(crate) fn grant(token: &str) -> TokenGrant {
    TokenGrant {
        access_token: token.to_string(),
        refresh_token: format!("{token}-refresh"),
    }
}

pub(crate) struct ScriptedAuthenticator {
    catalog: Result<PromptCatalog, RemoteError>,
    outcomes: RefCell<VecDeque<Result<TokenGrant, RemoteError>>>,
    pub fetch_calls: Cell<usize>,
    pub attempts: RefCell<Vec<Credentials>>,
}

impl ScriptedAuthenticator {
    pub fn new(catalog: PromptCatalog, outcomes: Vec<Result<TokenGrant, RemoteError>>) -> Self {
        Self {
            catalog: Ok(catalog),
            outcomes: RefCell::new(outcomes.into()),
            fetch_calls: Cell::new(0),
            attempts: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable(error: RemoteError) -> Self {
        Self {
            catalog: Err(error),
            outcomes: RefCell::new(VecDeque::new()),
            fetch_calls: Cell::new(0),
            attempts: RefCell::new(Vec::new()),
        }
    }

    pub fn authenticate_calls(&self) -> usize {
        self.attempts.borrow().len()
    }
}

impl Authenticator for ScriptedAuthenticator {
    fn fetch_prompts(&self, _connection: &ApiConnection<'_>) -> Result<PromptCatalog, RemoteError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.catalog.clone()
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
            .unwrap_or_else(|| Err(RemoteError::Rejected("script exhausted".to_string())))
    }
}

#[derive(Default)]
pub(crate) struct ScriptedDirectory {
    pub organizations: Vec<Organization>,
    pub spaces: BTreeMap<String, Vec<Space>>,
    pub org_lookups: RefCell<Vec<String>>,
    pub space_lookups: RefCell<Vec<String>>,
    pub list_page_sizes: RefCell<Vec<usize>>,
}

pub(crate) fn org(name: &str) -> Organization {
    Organization {
        guid: format!("{name}-guid"),
        name: name.to_string(),
    }
}

pub(crate) fn space(name: &str) -> Space {
    Space {
        guid: format!("{name}-guid"),
        name: name.to_string(),
    }
}

impl ScriptedDirectory {
    pub fn with_org_count(count: usize) -> Self {
        Self {
            organizations: (1..=count).map(|index| org(&format!("org{index}"))).collect(),
            ..Self::default()
        }
    }

    pub fn with_spaces(mut self, org_name: &str, names: &[&str]) -> Self {
        self.spaces.insert(
            format!("{org_name}-guid"),
            names.iter().map(|name| space(name)).collect(),
        );
        self
    }
}

impl Directory for ScriptedDirectory {
    fn list_organizations(
        &self,
        _connection: &ApiConnection<'_>,
        page_size: usize,
    ) -> Result<Vec<Organization>, RemoteError> {
        self.list_page_sizes.borrow_mut().push(page_size);
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
        self.org_lookups.borrow_mut().push(name.to_string());
        self.organizations
            .iter()
            .find(|candidate| candidate.name == name)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("Organization {name}")))
    }

    fn find_space_by_name(
        &self,
        _connection: &ApiConnection<'_>,
        organization: &Organization,
        name: &str,
    ) -> Result<Space, RemoteError> {
        self.space_lookups.borrow_mut().push(name.to_string());
        self.spaces
            .get(&organization.guid)
            .and_then(|spaces| spaces.iter().find(|candidate| candidate.name == name))
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("Space {name}")))
    }
}

pub(crate) struct StaticProbe {
    pub info: EndpointInfo,
    pub probed: RefCell<Vec<Endpoint>>,
}

impl StaticProbe {
    pub fn new(api_version: &str) -> Self {
        Self {
            info: EndpointInfo {
                api_version: api_version.to_string(),
                auth_endpoint: "https://login.example.com".to_string(),
                uaa_endpoint: "https://uaa.example.com".to_string(),
                doppler_endpoint: "wss://doppler.example.com:443".to_string(),
                log_cache_endpoint: "https://log-cache.example.com".to_string(),
            },
            probed: RefCell::new(Vec::new()),
        }
    }
}

impl EndpointProbe for StaticProbe {
    fn probe(&self, endpoint: &Endpoint) -> Result<EndpointInfo, RemoteError> {
        self.probed.borrow_mut().push(endpoint.clone());
        Ok(self.info.clone())
    }
}
