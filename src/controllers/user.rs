use reqwest::Client;

use crate::{client::get_json, config::Configs, entities::User, errors::GlopenError};

pub async fn get_user(client: &Client, configs: &Configs) -> Result<User, GlopenError> {
    let url = configs.get_api_url("user")?;
    let no_params: [(&str, String); 0] = [];
    get_json(client, url, &no_params).await
}
