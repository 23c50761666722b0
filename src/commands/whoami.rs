use crate::controllers::user::get_user;

use super::*;

/// Get the current logged in user
#[derive(Parser)]
pub struct Args {}

pub async fn command(_args: Args) -> Result<()> {
    let configs = Configs::new()?;
    let client = GitlabClient::new_authorized(&configs)?;
    let user = get_user(&client, &configs).await?;

    println!("Logged in as {} ({})", user.name.bold(), user.username);
    Ok(())
}
