use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;

use mangle_preprocess::{process_file, PreprocessConfig, PreprocessError, ProcessTransformer};

fn build_cli() -> Command {
    Command::new("mangle_preprocess")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replaces _mangle_(name, \"symbol\") markers with the output of an external mangler")
        .override_usage("mangle_preprocess [OPTIONS] [TRANSFORMER] <INPUT> <OUTPUT>")
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Optional transformer executable, then the input and output files"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let mut cli = build_cli();
    let matches = cli.get_matches_mut();

    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    // Argument count is validated by PreprocessConfig, not clap.
    let positionals: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .unwrap_or_default()
        .cloned()
        .collect();
    let config = match PreprocessConfig::from_positionals(positionals, verbose) {
        Ok(config) => config,
        Err(err @ PreprocessError::Usage { .. }) => {
            eprintln!("Error: {}\n\n{}", err, cli.render_usage());
            process::exit(2);
        }
        Err(err) => return Err(err.into()),
    };
    log::debug!("{:?}", config);

    let transformer = ProcessTransformer::new(&config.transformer);
    process_file(&config.input, &config.output, &transformer).with_context(|| {
        format!(
            "Failed to preprocess {} into {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` is honoured; `--verbose` forces debug.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
