use clap::Parser;
use knapsack_ga::catalog::Catalog;
use knapsack_ga::ga::{BestOf, GaConfig, GaRunner};
use knapsack_ga::report::{Failure, Summary};
use std::process::ExitCode;
use tracing::Level;

/// Packs the electronics catalog into a knapsack with a genetic algorithm.
#[derive(Parser)]
#[command(name = "knapsack-ga")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Knapsack weight limit
    #[arg(short, long, default_value_t = 8.0)]
    capacity: f64,

    /// Number of generations to run
    #[arg(short, long, default_value_t = 200)]
    generations: usize,

    /// Population size (even)
    #[arg(short, long, default_value_t = 4)]
    population: usize,

    /// Mutation probability in percent
    #[arg(short, long, default_value_t = 10)]
    mutation: u32,

    /// Attempts per rejection loop before giving up
    #[arg(long, default_value_t = 10_000)]
    max_retries: usize,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print only the final result
    #[arg(short, long)]
    quiet: bool,

    /// Log each generation
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = GaConfig::default()
        .with_capacity(cli.capacity)
        .with_max_generations(cli.generations)
        .with_population_size(cli.population)
        .with_mutation_probability_percent(cli.mutation)
        .with_max_retries(cli.max_retries);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let catalog = Catalog::electronics();
    let mut last_best: Option<BestOf> = None;
    let result = GaRunner::run_with_observer(&catalog, &config, |snapshot| {
        if !cli.quiet {
            print!("{snapshot}");
        }
        if last_best.as_ref() != Some(snapshot.best) {
            last_best = Some(snapshot.best.clone());
        }
    });

    match result {
        Ok(result) => {
            print!("{}", Summary::new(&catalog, &result.best));
            ExitCode::SUCCESS
        }
        Err(error) => {
            let failure = Failure {
                catalog: &catalog,
                error: &error,
                best: last_best.as_ref(),
            };
            eprint!("{failure}");
            ExitCode::FAILURE
        }
    }
}
