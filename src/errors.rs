use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlopenError {
    #[error("Unauthorized. Please login with `glopen login`")]
    Unauthorized,

    #[error("Login state is corrupt. Please logout and login back in.")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("Invalid GitLab URL \"{0}\". Set a full base URL like https://gitlab.example.com")]
    InvalidBaseUrl(String),

    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("GitLab API error ({0}): {1}")]
    ApiError(reqwest::StatusCode, String),

    #[error("No projects found matching \"{0}\"")]
    NoProjectsFound(String),

    #[error("{0} exited with {1}")]
    LaunchFailed(String, std::process::ExitStatus),
}
