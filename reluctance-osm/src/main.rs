use clap::{Parser, Subcommand};
use reluctance_core::model::reluctance::TraverseMode;
use reluctance_osm::{
    app::score_ops, config::ReluctanceAppConfiguration, model::ReluctanceCliError,
};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ReluctanceAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Score {
        #[arg(long, help = "path to CSV file with an edge_id column and OSM tag columns")]
        edges_file: String,
        #[arg(long, help = "path to .toml or .json file with routing preferences")]
        configuration_file: Option<String>,
        #[arg(long, default_value = "walk", help = "traverse mode used to score edges")]
        mode: TraverseMode,
        #[arg(long, help = "score edges with the wheelchair reluctance model")]
        wheelchair: bool,
        #[arg(long, help = "output CSV path, defaults to stdout")]
        output_file: Option<String>,
    },
}

pub fn run(app: &App) -> Result<(), ReluctanceCliError> {
    env_logger::init();
    match app {
        App::Score {
            edges_file,
            configuration_file,
            mode,
            wheelchair,
            output_file,
        } => {
            let conf = match configuration_file {
                None => Ok(ReluctanceAppConfiguration::default()),
                Some(f) => {
                    log::info!("reading reluctance configuration from {f}");
                    ReluctanceAppConfiguration::try_from(f)
                }
            }?;
            let reader = BufReader::new(File::open(edges_file)?);
            let writer: Box<dyn Write> = match output_file {
                Some(f) => Box::new(BufWriter::new(File::create(f)?)),
                None => Box::new(BufWriter::new(std::io::stdout())),
            };
            let count = score_ops::score_edges(reader, writer, &conf, *mode, *wheelchair)?;
            log::info!("scored {count} edges from {edges_file}");
            eprintln!("finished.");
            Ok(())
        }
    }
}

fn main() {
    let args = ReluctanceAppArguments::parse();
    if let Err(e) = run(&args.app) {
        log::error!("reluctance-osm failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
