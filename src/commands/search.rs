use is_terminal::IsTerminal;

use crate::consts::{ABORTED_BY_USER, NON_INTERACTIVE_FAILURE};
use crate::controllers::project::{find_projects, require_projects, SearchQuery};
use crate::interact_or;
use crate::util::browser;
use crate::util::progress::create_spinner;
use crate::util::prompt::{prompt_options_skippable, PromptProject};

use super::*;

/// Search projects on the configured GitLab instance and open one in your browser
#[derive(Parser)]
pub struct Args {
    /// Search terms, joined by spaces
    #[clap(required = true)]
    terms: Vec<String>,

    /// Only search projects you are a member of
    #[clap(long, short)]
    member: bool,

    /// Do not match against ancestor namespace names
    #[clap(long)]
    no_namespaces: bool,

    /// Print the repository URL instead of opening it
    #[clap(long, short)]
    print: bool,
}

pub async fn command(args: Args) -> Result<()> {
    if requires_terminal(args.print) {
        interact_or!(NON_INTERACTIVE_FAILURE);
    }

    let configs = Configs::new()?;
    let client = GitlabClient::new_authorized(&configs)?;

    let query = SearchQuery::new(&args.terms, !args.no_namespaces, args.member);

    let spinner = create_spinner(format!("Searching for \"{}\"...", query.search));
    let result = find_projects(&client, &configs, &query).await;
    spinner.finish_and_clear();

    let projects = require_projects(result?, &query.search)?;

    // Options keep the order GitLab returned; each one borrows its project
    // so the selection resolves by position, not by name.
    let options: Vec<PromptProject> = projects.iter().map(PromptProject).collect();
    let Some(selected) = prompt_options_skippable("Select a project", options)? else {
        println!("{}", ABORTED_BY_USER.yellow());
        return Ok(());
    };

    let url = &selected.0.http_url_to_repo;

    if args.print {
        println!("{url}");
        return Ok(());
    }

    if !browser::opener_available() {
        println!(
            "{} {}",
            "No URL opener found on this system, printing instead:".yellow(),
            url
        );
        return Ok(());
    }

    browser::open_url(url).await
}

// Printing the URL is pipe-friendly; only the launch path insists on a
// terminal on stdout.
fn requires_terminal(print: bool) -> bool {
    !print
}

#[cfg(test)]
mod tests {
    use super::requires_terminal;

    #[test]
    fn test_print_mode_usable_in_pipes() {
        assert!(!requires_terminal(true));
    }

    #[test]
    fn test_launch_mode_needs_a_terminal() {
        assert!(requires_terminal(false));
    }
}
