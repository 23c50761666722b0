use reqwest::Client;

use crate::{client::get_json, config::Configs, entities::Project, errors::GlopenError};

// Only the first page of results is ever fetched. A generous page size keeps
// that page useful without turning this into a pagination loop.
const PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub include_namespaces: bool,
    pub membership_only: bool,
}

impl SearchQuery {
    pub fn new(terms: &[String], include_namespaces: bool, membership_only: bool) -> Self {
        Self {
            search: terms.join(" "),
            include_namespaces,
            membership_only,
        }
    }

    fn params(&self) -> [(&'static str, String); 4] {
        [
            ("search", self.search.clone()),
            ("search_namespaces", self.include_namespaces.to_string()),
            ("membership", self.membership_only.to_string()),
            ("per_page", PER_PAGE.to_string()),
        ]
    }
}

/// Lists projects matching the query, in the order GitLab returns them.
pub async fn find_projects(
    client: &Client,
    configs: &Configs,
    query: &SearchQuery,
) -> Result<Vec<Project>, GlopenError> {
    let url = configs.get_api_url("projects")?;
    get_json(client, url, &query.params()).await
}

/// Maps an empty result set to the typed error, so the selector is never
/// shown zero items.
pub fn require_projects(
    projects: Vec<Project>,
    search: &str,
) -> Result<Vec<Project>, GlopenError> {
    if projects.is_empty() {
        return Err(GlopenError::NoProjectsFound(search.to_owned()));
    }
    Ok(projects)
}
