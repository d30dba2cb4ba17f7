use clap::Parser;
use form_persistence::cli::commands::{cmd_clear, cmd_load, cmd_save};
use form_persistence::cli::config::{Cli, Commands};
use form_persistence::persist::options::load_options;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Resolve options: CLI flags > options file > defaults
    let mut options = load_options(cli.options.as_deref());
    if cli.uuid.is_some() {
        options.uuid = cli.uuid.clone();
    }

    match cli.command {
        Commands::Save { snapshot, form } => {
            cmd_save(&snapshot, form.as_deref(), &cli.store, &options)?;
        }
        Commands::Load {
            snapshot,
            form,
            output,
        } => {
            cmd_load(
                &snapshot,
                form.as_deref(),
                &cli.store,
                output.as_deref(),
                &options,
            )?;
        }
        Commands::Clear { snapshot, form } => {
            cmd_clear(&snapshot, form.as_deref(), &cli.store, &options)?;
        }
    }

    Ok(())
}
