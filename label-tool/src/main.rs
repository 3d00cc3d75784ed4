mod common;
mod config;
mod convert;
mod iteration;
mod scan;

use crate::{common::*, config::Config};
use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
/// Thumbnail detection label pipeline tool
enum Opts {
    /// Convert a detection batch into archive and labeling-tool files
    Convert {
        /// configuration file
        #[clap(long, default_value = "label-tool.json5")]
        config_file: PathBuf,
        /// detector output keyed by image file name
        predictions_file: PathBuf,
    },
    /// Convert an archive file into training-service upload regions
    Uploads {
        /// archive file to convert
        coco_file: PathBuf,
        /// JSON map of category name to tag id
        tag_file: PathBuf,
        /// output file
        output_file: PathBuf,
    },
    /// Print the next training iteration name
    NextIteration {
        /// JSON array of existing iteration names
        iterations_file: PathBuf,
    },
}

fn main() -> Result<()> {
    // setup tracing
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).compact();
    let filter_layer = {
        let filter = EnvFilter::from_default_env();
        if env::var("RUST_LOG").is_err() {
            filter.add_directive(LevelFilter::INFO.into())
        } else {
            filter
        }
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    match Opts::parse() {
        Opts::Convert {
            config_file,
            predictions_file,
        } => {
            let config = Config::open(&config_file).with_context(|| {
                format!("failed to load config file '{}'", config_file.display())
            })?;
            convert::convert(&config, &predictions_file)?;
        }
        Opts::Uploads {
            coco_file,
            tag_file,
            output_file,
        } => {
            convert::uploads(&coco_file, &tag_file, &output_file)?;
        }
        Opts::NextIteration { iterations_file } => {
            let names = iteration::load_iteration_names(&iterations_file)?;
            println!("{}", iteration::next_iteration_name(&names));
        }
    }

    Ok(())
}
