use anyhow::Result;

use fight_bracket::cli::{fallback_override, Command};
use fight_bracket::{
    handle_build, handle_completions, handle_divisions, handle_import, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Build {
            input,
            division,
            mode,
            lenient,
            strict,
            json,
        } => handle_build(
            input,
            division.as_deref(),
            *mode,
            fallback_override(*lenient, *strict),
            *json,
        ),
        Command::Divisions { input } => handle_divisions(input),
        Command::Import { input, key } => handle_import(input, key),
        Command::Serve { port } => handle_serve(*port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
