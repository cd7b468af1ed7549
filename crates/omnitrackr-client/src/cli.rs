use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(
        short = 's',
        long = "stdout",
        action,
        global = true,
        help = "Controls if it logs to stdout/stderr instead of to a file"
    )]
    pub is_to_std_out: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in with one of the registered accounts
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show who is logged in and which department is selected
    Whoami,
    /// Change the current department (admins only)
    Switch { department: String },
    /// Show a page, for example `/alerts`
    Open {
        path: String,
        #[command(flatten)]
        filters: PageFilters,
    },
    /// List the pages that can be opened
    Menu,
    /// List the accounts that can log in
    Accounts,
}

/// Narrows down the rows of a page. Pages ignore filters they do not offer.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct PageFilters {
    /// Alert type, for example `missing`
    #[arg(long)]
    pub kind: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Audit log action, for example `file_received`
    #[arg(long)]
    pub action: Option<String>,
    /// Case insensitive text to look for
    #[arg(long)]
    pub search: Option<String>,
}
