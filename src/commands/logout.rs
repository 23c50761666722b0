use super::*;

/// Forget the stored GitLab token
#[derive(Parser)]
pub struct Args {}

pub async fn command(_args: Args) -> Result<()> {
    let mut configs = Configs::new()?;
    configs.reset()?;
    configs.write()?;
    println!("Logged out successfully");
    Ok(())
}
