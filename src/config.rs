use std::env::temp_dir;
use std::{
    fs,
    fs::{create_dir_all, File},
    io::Read,
    path::PathBuf,
};

use anyhow::{Context, Result};
use colored::Colorize;
use inquire::ui::{Attributes, RenderConfig, StyleSheet, Styled};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::GlopenError;

pub const GITLAB_TOKEN_ENV: &str = "GITLAB_TOKEN";
pub const GITLAB_URL_ENV: &str = "GITLAB_URL";

const DEFAULT_GITLAB_URL: &str = "https://gitlab.com";

#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug)]
pub struct GlopenConfig {
    pub gitlab_url: String,
    pub gitlab_token: Option<String>,
}

impl Default for GlopenConfig {
    fn default() -> Self {
        Self {
            gitlab_url: DEFAULT_GITLAB_URL.to_owned(),
            gitlab_token: None,
        }
    }
}

#[derive(Debug)]
pub struct Configs {
    pub root_config: GlopenConfig,
    root_config_path: PathBuf,
}

impl Configs {
    pub fn new() -> Result<Self> {
        let home_dir = dirs::home_dir().context("Unable to get home directory")?;
        let root_config_path = home_dir.join(".glopen/config.json");

        if let Ok(mut file) = File::open(&root_config_path) {
            let mut serialized_config = vec![];
            file.read_to_end(&mut serialized_config)?;

            let root_config: GlopenConfig = serde_json::from_slice(&serialized_config)
                .unwrap_or_else(|_| {
                    eprintln!("{}", "Unable to parse config file, regenerating".yellow());
                    GlopenConfig::default()
                });

            return Ok(Self {
                root_config,
                root_config_path,
            });
        }

        Ok(Self {
            root_config_path,
            root_config: GlopenConfig::default(),
        })
    }

    pub fn reset(&mut self) -> Result<()> {
        self.root_config = GlopenConfig::default();
        Ok(())
    }

    pub fn get_gitlab_token_env() -> Option<String> {
        std::env::var(GITLAB_TOKEN_ENV).ok()
    }

    /// Token precedence: environment variable, then persisted login.
    pub fn get_gitlab_token(&self) -> Option<String> {
        Self::get_gitlab_token_env().or_else(|| self.root_config.gitlab_token.clone())
    }

    pub fn get_gitlab_url(&self) -> String {
        std::env::var(GITLAB_URL_ENV)
            .ok()
            .unwrap_or_else(|| self.root_config.gitlab_url.clone())
    }

    /// REST v4 endpoint for the configured instance, e.g.
    /// `https://gitlab.example.com/api/v4/projects`.
    pub fn get_api_url(&self, path: &str) -> Result<String, GlopenError> {
        build_api_url(&self.get_gitlab_url(), path)
    }

    pub fn get_render_config() -> RenderConfig<'static> {
        RenderConfig::default_colored()
            .with_help_message(
                StyleSheet::new()
                    .with_fg(inquire::ui::Color::LightMagenta)
                    .with_attr(Attributes::BOLD),
            )
            .with_answer(
                StyleSheet::new()
                    .with_fg(inquire::ui::Color::LightCyan)
                    .with_attr(Attributes::BOLD),
            )
            .with_prompt_prefix(
                Styled::new("?").with_style_sheet(
                    StyleSheet::new()
                        .with_fg(inquire::ui::Color::LightCyan)
                        .with_attr(Attributes::BOLD),
                ),
            )
    }

    pub fn write(&self) -> Result<()> {
        create_dir_all(self.root_config_path.parent().unwrap())?;

        // Write to a temp file first and rename it into place so a
        // half-written config never lands at the final path.
        let mut tmp_file_path = temp_dir();
        tmp_file_path.push(self.root_config_path.file_name().unwrap());

        let tmp_file = File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_file_path)?;
        serde_json::to_writer_pretty(&tmp_file, &self.root_config)?;
        tmp_file.sync_all()?;

        fs::rename(tmp_file_path.as_path(), &self.root_config_path)?;

        Ok(())
    }
}

fn build_api_url(base: &str, path: &str) -> Result<String, GlopenError> {
    let parsed = Url::parse(base).map_err(|_| GlopenError::InvalidBaseUrl(base.to_owned()))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(GlopenError::InvalidBaseUrl(base.to_owned()));
    }
    Ok(format!(
        "{}/api/v4/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

#[cfg(test)]
mod tests {
    use super::build_api_url;
    use crate::errors::GlopenError;

    #[test]
    fn test_api_url_plain_host() {
        assert_eq!(
            build_api_url("https://gitlab.com", "projects").unwrap(),
            "https://gitlab.com/api/v4/projects"
        );
    }

    #[test]
    fn test_api_url_trailing_slash() {
        assert_eq!(
            build_api_url("https://gitlab.example.com/", "user").unwrap(),
            "https://gitlab.example.com/api/v4/user"
        );
    }

    #[test]
    fn test_api_url_instance_under_subpath() {
        assert_eq!(
            build_api_url("https://code.example.com/gitlab", "projects").unwrap(),
            "https://code.example.com/gitlab/api/v4/projects"
        );
    }

    #[test]
    fn test_api_url_rejects_garbage() {
        assert!(matches!(
            build_api_url("not a url", "projects"),
            Err(GlopenError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            build_api_url("ftp://gitlab.com", "projects"),
            Err(GlopenError::InvalidBaseUrl(_))
        ));
    }
}
