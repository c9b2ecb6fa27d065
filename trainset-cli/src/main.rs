//! Command line front end for `trainset-core`: loads a train configuration,
//! forms the train and reports its composition and aggregates.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::{Path, PathBuf};
use trainset_core::prelude::*;

#[derive(Parser)]
#[command(name = "trainset")]
#[command(about = "Trainset CLI - compose trains from locomotives and carriages", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a train configuration file
    Validate {
        /// Path to the train YAML or JSON file
        config_path: PathBuf,
    },
    /// Form the train and list its parts from head to tail
    Form {
        /// Path to the train YAML or JSON file
        config_path: PathBuf,
    },
    /// Form the train and print its aggregates
    Summary {
        /// Path to the train YAML or JSON file
        config_path: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    match cli.command {
        Commands::Validate { config_path } => {
            let config = load_config(&config_path)?;
            println!(
                "{}: ok ({} locomotive(s), {} carriage(s))",
                config_path.display(),
                config.locomotives.len(),
                config.carriages.len()
            );
        }
        Commands::Form { config_path } => {
            let train = build_train(&config_path)?;
            for (position, part) in train.parts().iter().enumerate() {
                println!(
                    "{:>3}  {:<10}  {:<9}  {}",
                    position + 1,
                    part.kind(),
                    part.type_name(),
                    part.serial_number()
                );
            }
        }
        Commands::Summary {
            config_path,
            format,
        } => {
            let train = build_train(&config_path)?;
            println!("{}", train.summary().to_str(format.as_str())?);
        }
    }
    Ok(())
}

fn load_config(config_path: &Path) -> anyhow::Result<TrainConfig> {
    TrainConfig::from_file(config_path, false)
        .with_context(|| format!("Failed to load train configuration {config_path:?}"))
}

fn build_train(config_path: &Path) -> anyhow::Result<Train> {
    let config = load_config(config_path)?;
    log::info!(
        "building train from {config_path:?} with {} passenger(s)",
        config.number_of_passengers
    );
    let train = config.make_train(&mut UuidSerials)?;
    if !train.is_drivable() {
        log::warn!(
            "train from {config_path:?} is not drivable: tractive force {:.2} t < total weight {:.2} t",
            train.tractive_force_total().get::<si::megagram>(),
            train.max_total_weight().get::<si::megagram>()
        );
    }
    Ok(train)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_demo_train() {
        let train = build_train(Path::new("../trainset-core/resources/demo_train.yaml")).unwrap();
        assert_eq!(train.parts().len(), 7);
        assert!(train.is_drivable());
    }
}
