mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use tfadopt::{input, output};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.validate()?;

    let format = cli.format();
    let reader = input::open(cli.input.as_deref())?;
    let resources = input::read_resources(&cli.project, reader)?;
    tracing::info!(count = resources.len(), %format, "disks adopted");

    let document = output::render(format, &resources)?;
    let writer = output::open(cli.output.as_deref())?;
    output::write_document(writer, &document)?;

    if cli.summary {
        eprintln!("{}", output::summary_table(&resources));
    }

    Ok(())
}
