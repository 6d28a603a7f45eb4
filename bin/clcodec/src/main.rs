use std::process;

use clap::Parser;
use clcodec::{
    cli::{Cli, Commands},
    record::{run_decode, run_encode, run_hash_tree_root, run_size},
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_directive()))
        .with_writer(std::io::stderr)
        .init();

    debug!("Running command: {:?}", cli.command);

    let result = match cli.command {
        Commands::Size(config) => run_size(config),
        Commands::Encode(config) => run_encode(config),
        Commands::Decode(config) => run_decode(config),
        Commands::HashTreeRoot(config) => run_hash_tree_root(config),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("{err:#}");
            process::exit(1);
        }
    }
}
