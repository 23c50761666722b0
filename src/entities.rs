use serde::{Deserialize, Serialize};

/// The subset of the GitLab projects payload this tool cares about.
/// `name` is not unique across namespaces; `name_with_namespace` is unique
/// within one result set and is what gets displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub name_with_namespace: String,
    pub http_url_to_repo: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserializes_gitlab_payload() {
        let body = r#"[
            {
                "id": 278964,
                "name": "cookie-api",
                "name_with_namespace": "backend / cookie-api",
                "path_with_namespace": "backend/cookie-api",
                "http_url_to_repo": "https://gitlab.example.com/backend/cookie-api.git",
                "ssh_url_to_repo": "git@gitlab.example.com:backend/cookie-api.git",
                "star_count": 3
            },
            {
                "id": 278965,
                "name": "cookie-web",
                "name_with_namespace": "frontend / cookie-web",
                "http_url_to_repo": "https://gitlab.example.com/frontend/cookie-web.git"
            }
        ]"#;

        let projects: Vec<Project> = serde_json::from_str(body).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "cookie-api");
        assert_eq!(projects[1].name_with_namespace, "frontend / cookie-web");
        assert_eq!(
            projects[1].http_url_to_repo,
            "https://gitlab.example.com/frontend/cookie-web.git"
        );
    }

    #[test]
    fn test_user_deserializes_gitlab_payload() {
        let body = r#"{"id": 1, "username": "ada", "name": "Ada Lovelace", "state": "active"}"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert_eq!(user.username, "ada");
        assert_eq!(user.name, "Ada Lovelace");
    }
}
