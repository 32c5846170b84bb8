use clap::Parser;
use flowdeck_runner::{
    execute_config, execute_editor_load, execute_parameters, execute_validate, init_logging, Cli,
    Commands, EditorCommand, EditorConfig,
};
use tracing::{debug, trace, warn};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("flowdeck started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let loaded = EditorConfig::from_env();
    for issue in &loaded.issues {
        warn!("{}", issue.message);
    }

    let result = match &cli.command {
        Commands::Editor(EditorCommand::Load(command)) => {
            execute_editor_load(command, &loaded.config)
        }
        Commands::Parameters(command) => execute_parameters(command),
        Commands::Validate(command) => execute_validate(command),
        Commands::Config(command) => execute_config(command, &loaded),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
