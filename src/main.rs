use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref title,
            ref username,
            ref secret,
            ref url,
            ref notes,
            ref tags,
        } => passvault::cli::commands::add::execute(
            &cli,
            title,
            username,
            secret.as_deref(),
            url,
            notes,
            tags,
        ),
        Commands::List {
            ref search,
            show_secrets,
        } => passvault::cli::commands::list::execute(&cli, search.as_deref(), show_secrets),
        Commands::Update {
            ref id,
            ref title,
            ref username,
            ref secret,
            ref url,
            ref notes,
            ref tags,
        } => passvault::cli::commands::update::execute(
            &cli,
            id,
            title,
            username,
            secret.as_deref(),
            url,
            notes,
            tags,
        ),
        Commands::Delete { ref id, force } => {
            passvault::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            allow_ambiguous,
            copy,
        } => passvault::cli::commands::generate::execute(
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            allow_ambiguous,
            copy,
        ),
        Commands::Strength { ref credential } => {
            passvault::cli::commands::strength_cmd::execute(credential.as_deref())
        }
        Commands::Completions { ref shell } => {
            passvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
