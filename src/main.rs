use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

mod emitter;
mod error;
mod input;
mod logging;
mod mapping;
mod source;
mod turtle;
mod types;

use crate::error::Result;

#[derive(Parser)]
#[command(name = "fdo2rdf")]
#[command(about = "Convert FDO JSON records to RDF Turtle using SSSOM mappings")]
#[command(version)]
struct Cli {
    /// Path to the input JSON file
    #[arg(long)]
    json: PathBuf,

    /// Path or URL to the SSSOM mapping file (TSV format)
    #[arg(long = "mappingsFile")]
    mappings_file: String,

    /// Path to the output Turtle file
    #[arg(long, default_value = "FDO-triples.ttl")]
    output: PathBuf,
}

fn run(cli: &Cli) -> Result<()> {
    let sssom_text = source::load_mapping_text(&cli.mappings_file)?;
    let (prefixes, table) = mapping::load_mapping(&sssom_text)?;

    let records = input::load_records(&cli.json)?;
    let triples = emitter::emit_triples(&records, &table);

    turtle::write_turtle_file(&cli.output, &triples, &prefixes)?;

    info!(triples = triples.len(), "Conversion finished");
    println!(
        "Wrote {} triples to '{}'",
        triples.len(),
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    logging::init_logging();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Conversion failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
