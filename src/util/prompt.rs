use std::fmt::Display;

use anyhow::{Context, Result};

use crate::config::Configs;
use crate::entities::Project;

pub fn prompt_options_skippable<T: Display>(message: &str, options: Vec<T>) -> Result<Option<T>> {
    let select = inquire::Select::new(message, options);
    select
        .with_render_config(Configs::get_render_config())
        .prompt_skippable()
        .context("Failed to prompt for options")
}

pub fn prompt_text_with_default(message: &str, default: &str) -> Result<String> {
    let text = inquire::Text::new(message);
    text.with_render_config(Configs::get_render_config())
        .with_default(default)
        .prompt()
        .context("Failed to prompt for text")
}

pub fn prompt_password(message: &str) -> Result<String> {
    let password = inquire::Password::new(message);
    password
        .with_render_config(Configs::get_render_config())
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to prompt for password")
}

/// Selection wraps a reference to the fetched project, so the chosen item
/// carries its own URL. Two projects sharing a `name` can never resolve to
/// each other's repository.
#[derive(Debug, Clone)]
pub struct PromptProject<'a>(pub &'a Project);

impl Display for PromptProject<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.name_with_namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::PromptProject;
    use crate::entities::Project;

    fn project(name: &str, namespace: &str, url: &str) -> Project {
        Project {
            name: name.to_string(),
            name_with_namespace: format!("{namespace} / {name}"),
            http_url_to_repo: url.to_string(),
        }
    }

    #[test]
    fn test_prompt_label_is_name_with_namespace() {
        let p = project("cookie-api", "backend", "https://gitlab.example.com/a.git");
        assert_eq!(PromptProject(&p).to_string(), "backend / cookie-api");
    }

    #[test]
    fn test_duplicate_names_keep_their_own_urls() {
        let projects = vec![
            project("cookie", "team-a", "https://gitlab.example.com/team-a/cookie.git"),
            project("cookie", "team-b", "https://gitlab.example.com/team-b/cookie.git"),
        ];
        let options: Vec<PromptProject> = projects.iter().map(PromptProject).collect();

        // The option at position i must resolve to the project at position i,
        // even though both share a `name`.
        for (option, project) in options.iter().zip(projects.iter()) {
            assert_eq!(option.0.http_url_to_repo, project.http_url_to_repo);
            assert_eq!(option.to_string(), project.name_with_namespace);
        }
        assert_ne!(options[0].0.http_url_to_repo, options[1].0.http_url_to_repo);
    }
}
