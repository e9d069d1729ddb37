#![warn(clippy::pedantic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use config::CliConfig;
use env_logger::TimestampPrecision;
use fastrand::Rng;
use itertools::Itertools;
use log::{LevelFilter, info, warn};
use owo_colors::OwoColorize;
use rubik_core::{Cube, scramble, start, success};

mod check;
mod config;
mod render;

/// Apply, scramble, and check a 3x3x3 Rubik's Cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', default_value = "rubik.toml", value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print the result.
    Apply {
        /// The move sequence to apply, e.g. "R U R' U'".
        algorithm: String,
    },
    /// Generate a random scramble.
    Scramble {
        /// Number of moves; overrides `scramble_length` in the configuration.
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble; overrides `seed` in the configuration.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Also apply the scramble to a solved cube and print the net.
        #[arg(short, long)]
        apply: bool,
    },
    /// Check every face rotation for order four, invertibility, and color conservation.
    Check,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Apply { algorithm } => run_apply(&config, &algorithm),
        Commands::Scramble {
            length,
            seed,
            apply,
        } => run_scramble(&config, length, seed, apply),
        Commands::Check => run_check()?,
    }

    Ok(())
}

fn run_apply(config: &CliConfig, notation: &str) {
    let mut cube = Cube::new();
    let algorithm = cube.apply_notation(notation);
    if algorithm.is_empty() && !notation.trim().is_empty() {
        warn!("No moves recognized in {notation:?}");
    }
    info!("Applied {algorithm}");

    print!("{}", render::net(&cube, config.color));
    println!();
    println!("Quarter turns: {}", algorithm.len());
    println!("Solved: {}", cube.is_solved());
}

fn run_scramble(config: &CliConfig, length: Option<usize>, seed: Option<u64>, apply: bool) {
    let settings = config.scramble_settings(length, seed);
    let length = settings.length;
    let mut rng = match settings.seed {
        Some(seed) => {
            info!("Scrambling with seed {seed}");
            Rng::with_seed(seed)
        }
        None => Rng::new(),
    };

    if apply {
        let mut cube = Cube::new();
        println!("{}", cube.scramble(&mut rng, length));
        println!();
        print!("{}", render::net(&cube, config.color));
    } else {
        println!("{}", scramble::generate(&mut rng, length));
    }
}

fn run_check() -> color_eyre::Result<()> {
    info!(start!("Running the rotation self-check"));
    let results = check::check_rotations();

    for result in &results {
        let name = format!("{:?} {}", result.face, result.direction);
        if result.passed() {
            println!("{} {name}", "PASS".green());
        } else {
            println!("{} {name}: {}", "FAIL".red(), result.failures.iter().join("; "));
        }
    }

    let failed = results.iter().filter(|result| !result.passed()).count();
    println!("{}/{} rotations passed", results.len() - failed, results.len());
    if failed > 0 {
        return Err(eyre!("{failed} rotation checks failed"));
    }

    info!(success!("Every rotation checks out"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rubik", "check"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("rubik.toml"));
        assert_eq!(cli.verbose, 0);
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_scramble_flags() {
        let cli = Cli::try_parse_from([
            "rubik",
            "-vv",
            "-c",
            "other.toml",
            "scramble",
            "-l",
            "5",
            "--seed",
            "9",
            "--apply",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        match cli.command {
            Commands::Scramble {
                length,
                seed,
                apply,
            } => {
                assert_eq!(length, Some(5));
                assert_eq!(seed, Some(9));
                assert!(apply);
            }
            _ => panic!("expected the scramble subcommand"),
        }
    }

    #[test]
    fn test_apply_takes_one_algorithm() {
        let cli = Cli::try_parse_from(["rubik", "apply", "R U R' U'"]).unwrap();
        assert!(matches!(cli.command, Commands::Apply { algorithm } if algorithm == "R U R' U'"));
        assert!(Cli::try_parse_from(["rubik", "apply"]).is_err());
    }
}
