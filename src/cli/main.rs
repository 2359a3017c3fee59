#![allow(clippy::match_bool)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::path::PathBuf;

use clap::Parser;

use mcnf_gen::{
    batch::generate_parallel,
    config::{defaults, Config},
    distribution::{LengthTable, MixTable, Weight},
    generator::Generator,
    generic::random::derive_seeds,
    misc::log::targets,
    notation::Notation,
    reports::FormulaStats,
    structures::formula::Formula,
    types::err::{ErrorKind, ParseError},
};

/// Generates random modal formulas in conjunctive normal form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Modal depth of each formula.
    #[arg(short = 'd', long, default_value_t = defaults::DEPTH, allow_negative_numbers = true)]
    depth: i64,

    /// Clauses of each formula.
    #[arg(short = 'L', long, default_value_t = defaults::CLAUSES, allow_negative_numbers = true)]
    clauses: i64,

    /// Propositional variables, A1 to AN.
    #[arg(short = 'N', long, default_value_t = defaults::VARIABLES, allow_negative_numbers = true)]
    variables: i64,

    /// Boxes, □1 to □m.
    #[arg(short = 'm', long, default_value_t = defaults::BOXES, allow_negative_numbers = true)]
    boxes: i64,

    /// Weights over clause lengths by depth, as JSON, e.g. '[[0,2,2],[2,4],[6]]'.
    #[arg(short = 'C', long = "clause-dist")]
    clause_dist: Option<String>,

    /// Weights over propositional literal counts by depth and clause length, as JSON.
    #[arg(short = 'p', long = "prop-dist")]
    prop_dist: Option<String>,

    /// Formulas to generate.
    #[arg(long, default_value_t = defaults::COUNT, allow_negative_numbers = true)]
    count: i64,

    /// Seed for the source of randomness, taken from the system if absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Write formulas to a file rather than to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Notation of the output.
    #[arg(long, value_enum, default_value_t = Notation::Unicode)]
    notation: Notation,

    /// Generate formulas concurrently, each from a seed derived from the base seed.
    #[arg(long)]
    parallel: bool,

    /// Show parameters and statistics on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let formulas = match generate(&args, config) {
        Ok(formulas) => formulas,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if args.verbose {
        for (index, formula) in formulas.iter().enumerate() {
            eprintln!("Formula {}: {}", index + 1, FormulaStats::of(formula));
        }
    }

    let text = args.notation.batch(&formulas);
    match &args.output {
        None => println!("{text}"),
        Some(path) => {
            if let Err(e) = std::fs::write(path, format!("{text}\n")) {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }
}

fn config_from_args(args: &Args) -> Result<Config, ErrorKind> {
    let mut config = Config::default();

    config.depth.value = args.depth;
    config.clauses.value = args.clauses;
    config.variables.value = args.variables;
    config.boxes.value = args.boxes;
    config.count.value = args.count;

    if let Some(json) = &args.clause_dist {
        let raw: Vec<Vec<Weight>> = parse_table(json, "clause length")?;
        config.lengths = LengthTable::from_raw(raw)?;
    }

    if let Some(json) = &args.prop_dist {
        let raw: Vec<Vec<Vec<Weight>>> = parse_table(json, "propositional count")?;
        config.mix = MixTable::from_raw(raw)?;
    }

    Ok(config)
}

fn parse_table<T: serde::de::DeserializeOwned>(json: &str, table: &'static str) -> Result<T, ParseError> {
    serde_json::from_str(json).map_err(|e| ParseError::Table {
        table,
        reason: e.to_string(),
    })
}

fn generate(args: &Args, config: Config) -> Result<Vec<Formula>, ErrorKind> {
    let parameters = config.validate()?;

    if args.verbose {
        eprintln!(
            "Depth {}, clauses {}, variables {}, boxes {}, count {}",
            parameters.depth, parameters.clauses, parameters.variables, parameters.boxes, parameters.count
        );
        eprintln!("Clause lengths: {}", table_json(&config.lengths));
        eprintln!("Propositional counts: {}", table_json(&config.mix));
    }

    let seed = args.seed.unwrap_or_else(|| {
        let seed = rand::random::<u64>();
        log::info!(target: targets::DRIVER, "Seed from entropy: {seed}");
        seed
    });
    if args.verbose {
        eprintln!("Seed: {seed}");
    }

    match args.parallel {
        true => {
            let seeds = derive_seeds(seed, parameters.count);
            Ok(generate_parallel(&config, &seeds)?)
        }

        false => {
            let mut generator = Generator::from_seed(config, Some(seed))?;
            let formulas = generator.generate();
            if args.verbose {
                eprintln!("{:?}", generator.counters);
            }
            Ok(formulas)
        }
    }
}

fn table_json<T: serde::Serialize>(table: &T) -> String {
    serde_json::to_string(table).unwrap_or_default()
}
