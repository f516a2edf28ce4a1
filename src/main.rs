mod browser;
mod cli;
mod clipboard;
mod db;
mod entry;
mod error;
mod fmt;
mod ledger;
mod logging;
mod models;
mod search;
mod settings;
mod store;
mod tui;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands, OptionsCommands};
use logging::{init_logging, Verbosity};

fn main() {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Load { path } => cli::load::run(&path),
        Commands::Add(args) => cli::records::add(args),
        Commands::Entry => cli::entry::run(),
        Commands::List(search) => cli::records::list(&search),
        Commands::Browse(search) => cli::browse::run(&search),
        Commands::Paid { id } => cli::records::toggle_paid(id),
        Commands::Invoiced { id } => cli::records::toggle_invoiced(id),
        Commands::Delete { id } => cli::records::delete(id),
        Commands::Copy { id, quickbooks } => cli::records::copy(id, quickbooks),
        Commands::Options { command } => match command {
            OptionsCommands::List { category } => cli::options::list(category),
            OptionsCommands::Add { category, value } => cli::options::add(category, &value),
            OptionsCommands::Remove { category, value } => cli::options::remove(category, &value),
            OptionsCommands::Reset => cli::options::reset(),
        },
        Commands::Export { search, output } => cli::export::run(&search, output),
        Commands::Backup { output } => cli::backup::run(output),
        Commands::Status => cli::status::run(),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mqbill", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
