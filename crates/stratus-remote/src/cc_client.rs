use serde::Deserialize;
use stratus_core::{ApiConnection, Directory, Organization, RemoteError, Space};

use crate::http::{decode_json, join_url, transport_error, HttpSettings};

#[derive(Debug, Deserialize)]
struct ResourcePage {
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
struct Resource {
    metadata: ResourceMetadata,
    entity: ResourceEntity,
}

#[derive(Debug, Deserialize)]
struct ResourceMetadata {
    guid: String,
}

#[derive(Debug, Deserialize)]
struct ResourceEntity {
    name: String,
}

/// Cloud controller v2 organization/space lookups.
#[derive(Debug, Clone, Default)]
pub struct CloudControllerDirectory {
    settings: HttpSettings,
}

impl CloudControllerDirectory {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }

    fn fetch_page(
        &self,
        connection: &ApiConnection<'_>,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<(String, String)>, RemoteError> {
        let url = join_url(connection.api_endpoint, path);
        let client = self.settings.client(connection.skip_ssl_validation)?;
        let response = client
            .get(&url)
            .bearer_auth(connection.access_token)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .map_err(|error| transport_error(&url, error))?;
        let page = decode_json::<ResourcePage>(response)?;
        Ok(page
            .resources
            .into_iter()
            .map(|resource| (resource.metadata.guid, resource.entity.name))
            .collect())
    }
}

fn listing_query(page_size: usize) -> Vec<(&'static str, String)> {
    vec![
        ("results-per-page", page_size.to_string()),
        ("order-by", "name".to_string()),
    ]
}

fn name_query(name: &str) -> Vec<(&'static str, String)> {
    vec![("q", format!("name:{name}"))]
}

impl Directory for CloudControllerDirectory {
    fn list_organizations(
        &self,
        connection: &ApiConnection<'_>,
        page_size: usize,
    ) -> Result<Vec<Organization>, RemoteError> {
        let mut organizations = self
            .fetch_page(connection, "/v2/organizations", &listing_query(page_size))?
            .into_iter()
            .map(|(guid, name)| Organization { guid, name })
            .collect::<Vec<_>>();
        organizations.truncate(page_size);
        Ok(organizations)
    }

    fn list_spaces(
        &self,
        connection: &ApiConnection<'_>,
        organization: &Organization,
        page_size: usize,
    ) -> Result<Vec<Space>, RemoteError> {
        let path = format!("/v2/organizations/{}/spaces", organization.guid);
        let mut spaces = self
            .fetch_page(connection, &path, &listing_query(page_size))?
            .into_iter()
            .map(|(guid, name)| Space { guid, name })
            .collect::<Vec<_>>();
        spaces.truncate(page_size);
        Ok(spaces)
    }

    fn find_organization_by_name(
        &self,
        connection: &ApiConnection<'_>,
        name: &str,
    ) -> Result<Organization, RemoteError> {
        self.fetch_page(connection, "/v2/organizations", &name_query(name))?
            .into_iter()
            .next()
            .map(|(guid, name)| Organization { guid, name })
            .ok_or_else(|| RemoteError::NotFound(format!("Organization {name}")))
    }

    fn find_space_by_name(
        &self,
        connection: &ApiConnection<'_>,
        organization: &Organization,
        name: &str,
    ) -> Result<Space, RemoteError> {
        let path = format!("/v2/organizations/{}/spaces", organization.guid);
        self.fetch_page(connection, &path, &name_query(name))?
            .into_iter()
            .next()
            .map(|(guid, name)| Space { guid, name })
            .ok_or_else(|| RemoteError::NotFound(format!("Space {name}")))
    }
}
