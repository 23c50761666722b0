use anyhow::Result;
use clap::Parser;

mod commands;
use commands::*;

mod client;
mod config;
mod consts;
mod controllers;
mod entities;
mod errors;
mod util;

#[macro_use]
mod macros;

/// Search GitLab projects and open them in your browser
#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    #[clap(subcommand)]
    command: Commands,
}

// Generates the commands based on the modules in the commands directory
commands_enum!(completion, login, logout, search, whoami);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Args::parse();
    match Commands::exec(cli).await {
        Ok(_) => {}
        Err(e) => {
            // If the user cancels the operation, we want to exit successfully
            // This can happen if Ctrl+C is pressed during a prompt
            if e.root_cause().to_string() == inquire::InquireError::OperationInterrupted.to_string()
            {
                return Ok(());
            }

            eprintln!("{:?}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
