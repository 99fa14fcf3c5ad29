use clap::Parser;
use keyforge::cli::commands;
use keyforge::cli::commands::add::AddArgs;
use keyforge::cli::commands::generate::GenerateArgs;
use keyforge::cli::{Cli, Commands, FolderAction, RecoveryAction};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::execute(&cli),
        Commands::Add {
            ref title,
            ref username,
            ref password,
            generate,
            ref url,
            ref notes,
            ref folder,
        } => commands::add::execute(
            &cli,
            &AddArgs {
                title,
                username,
                password: password.as_deref(),
                generate,
                url: url.as_deref(),
                notes: notes.as_deref(),
                folder: folder.as_deref(),
            },
        ),
        Commands::Show { ref title, reveal } => commands::show::execute(&cli, title, reveal),
        Commands::List { ref folder } => commands::list::execute(&cli, folder.as_deref()),
        Commands::Delete { ref title, force } => commands::delete::execute(&cli, title, force),
        Commands::Folder { ref action } => match action {
            FolderAction::Add { ref name, ref color } => {
                commands::folder::execute_add(&cli, name, color)
            }
            FolderAction::List => commands::folder::execute_list(&cli),
            FolderAction::Delete { ref name, force } => {
                commands::folder::execute_delete(&cli, name, *force)
            }
        },
        Commands::Move {
            ref title,
            ref folder,
            unfiled,
        } => commands::move_cmd::execute(&cli, title, folder.as_deref(), unfiled),
        Commands::Generate {
            length,
            no_symbols,
            no_numbers,
            no_uppercase,
            exclude_similar,
        } => commands::generate::execute(&GenerateArgs {
            length,
            no_symbols,
            no_numbers,
            no_uppercase,
            exclude_similar,
        }),
        Commands::Recovery { ref action } => match action {
            RecoveryAction::Setup => commands::recovery_cmd::execute_setup(&cli),
            RecoveryAction::Restore { ref words } => {
                commands::recovery_cmd::execute_restore(&cli, words)
            }
        },
        Commands::ChangePassword => commands::change_password::execute(&cli),
        Commands::Destroy { force } => commands::destroy::execute(&cli, force),
        Commands::Completions { ref shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        keyforge::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
