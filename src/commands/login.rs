use is_terminal::IsTerminal;

use crate::controllers::user::get_user;
use crate::interact_or;
use crate::util::prompt::{prompt_password, prompt_text_with_default};

use super::*;

/// Save your GitLab instance URL and personal access token
#[derive(Parser)]
pub struct Args {
    /// GitLab instance base URL, e.g. https://gitlab.example.com
    #[clap(long)]
    url: Option<String>,
}

pub async fn command(args: Args) -> Result<()> {
    interact_or!("Cannot login in non-interactive mode");

    let mut configs = Configs::new()?;

    let gitlab_url = match args.url {
        Some(url) => url,
        None => prompt_text_with_default("GitLab instance URL", &configs.get_gitlab_url())?,
    };
    let token = prompt_password("Personal access token")?;

    configs.root_config.gitlab_url = gitlab_url;
    configs.root_config.gitlab_token = Some(token);

    // Validate the pair against the instance before persisting anything.
    let client = GitlabClient::new_authorized(&configs)?;
    let user = get_user(&client, &configs).await?;

    configs.write()?;

    println!("Logged in as {} ({})", user.name.bold(), user.username);
    Ok(())
}
