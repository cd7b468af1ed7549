#![warn(clippy::all, rust_2018_idioms)]

use clap::Parser;
use omnitrackr_client::{
    cli::{Cli, Command, PageFilters},
    configuration::get_configuration,
    log_rejected_switch, OmniApp, SampleData,
};
use omnitrackr_client_core::{CredentialStore, FileStore, GuardDecision, SessionManager};
use omnitrackr_shared::req_args::LoginReqArgs;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let configuration = get_configuration()?;

    if let Err(e) = omnitrackr_client::tracing::init(&args, &configuration.logging) {
        eprintln!("Failed to start tracing: {e}");
    }

    let store = FileStore::new(configuration.storage.directory);
    let session = SessionManager::new(
        CredentialStore::demo(),
        store,
        configuration.storage.session_key,
    );
    let data = SampleData::load()?;
    let mut app = OmniApp::new(session, data);
    if app.start() == GuardDecision::Wait {
        anyhow::bail!("session was not restored");
    }

    let output = match args.command {
        Command::Login { email, password } => {
            app.login(LoginReqArgs::new(email, password.into()))?
        }
        Command::Logout => {
            app.logout();
            app.render(&PageFilters::default())?
        }
        Command::Whoami => app.header(),
        Command::Switch { department } => {
            if !log_rejected_switch(app.switch_department(&department)) {
                eprintln!("'{department}' is not one of your departments");
            }
            app.header()
        }
        Command::Open { path, filters } => {
            app.navigate(&path);
            app.render(&filters)?
        }
        Command::Menu => app.menu(),
        Command::Accounts => app
            .session()
            .credentials()
            .demo_accounts()
            .iter()
            .map(|x| format!("{:<24} {}\n", x.email, x.label))
            .collect(),
    };
    print!("{output}");
    Ok(())
}
