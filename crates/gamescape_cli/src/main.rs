use anyhow::Result;
use clap::{CommandFactory, Parser};
use gamescape_cli::cli::Cli;
use gamescape_cli::{execute, Outcome};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match execute(&cli)? {
        Outcome::Print(text) => println!("{text}"),
        Outcome::Usage => {
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
