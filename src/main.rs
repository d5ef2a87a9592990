use clap::Parser;
use journaler::application::OpenEntryService;
use journaler::cli::Cli;
use journaler::error::JournalerError;
use journaler::infrastructure::ConfigStore;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), JournalerError> {
    let store = ConfigStore::default_location()?;
    let service = OpenEntryService::new(store);
    let title = cli.effective_title();

    service.execute(cli.overrides(), title.as_deref())?;

    Ok(())
}
