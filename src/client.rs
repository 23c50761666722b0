use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{config::Configs, consts, errors::GlopenError};

pub struct GitlabClient;

impl GitlabClient {
    /// Builds a reqwest client carrying the personal access token on every
    /// request. Fails if no token is configured or the token is not a valid
    /// header value.
    pub fn new_authorized(configs: &Configs) -> Result<Client, GlopenError> {
        let token = configs.get_gitlab_token().ok_or(GlopenError::Unauthorized)?;

        let mut headers = HeaderMap::new();
        headers.insert("PRIVATE-TOKEN", HeaderValue::from_str(&token)?);

        let client = Client::builder()
            .user_agent(consts::get_user_agent())
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(GlopenError::FetchError)?;
        Ok(client)
    }
}

/// Issues a GET against the GitLab REST API and decodes the JSON body.
/// 401/403 map to Unauthorized; any other non-success status surfaces the
/// response body for context.
pub async fn get_json<T: DeserializeOwned, Q: Serialize + ?Sized>(
    client: &Client,
    url: String,
    query: &Q,
) -> Result<T, GlopenError> {
    let response = client.get(url).query(query).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_error(status, body));
    }

    Ok(response.json::<T>().await?)
}

fn status_error(status: StatusCode, body: String) -> GlopenError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return GlopenError::Unauthorized;
    }
    GlopenError::ApiError(status, body)
}
