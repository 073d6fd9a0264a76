//! Wordle - CLI
//!
//! Word-guessing game with TUI and line-based modes, plus an automatic
//! player for solving and benchmarking.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use wordle_game::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_simple, solve_word},
    game::{GameConfig, SystemClock},
    output::{print_benchmark_result, print_session_stats, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with letter feedback, hints, a timer and a score",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of tries per game
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_MAX_TRIES)]
    tries: usize,

    /// Word length
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Hints available per game
    #[arg(short = 'H', long, global = true, default_value_t = GameConfig::DEFAULT_MAX_HINTS)]
    hints: usize,

    /// Wordlist: 'embedded' (default, six-letter words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Automatic player strategy: frequency (default), entropy, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Let the automatic player solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Spend hints before guessing
        #[arg(long)]
        use_hints: bool,
    },

    /// Benchmark the automatic player over many random games
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Simulated seconds spent on each guess
        #[arg(long, default_value = "15")]
        think_time: u64,

        /// Spend hints before guessing
        #[arg(long)]
        use_hints: bool,
    },
}

/// Load the word bank selected by the -w flag
fn load_bank(wordlist: &str, word_length: usize) -> Result<WordBank> {
    match wordlist {
        "embedded" => {
            if word_length != GameConfig::DEFAULT_WORD_LENGTH {
                bail!(
                    "the embedded word list holds {}-letter words; pass --wordlist <FILE> for length {word_length}",
                    GameConfig::DEFAULT_WORD_LENGTH
                );
            }
            Ok(WordBank::embedded()?)
        }
        path => Ok(WordBank::from_file(path, word_length)?),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.tries, cli.length, cli.hints)?;
    let bank = load_bank(&cli.wordlist, config.word_length)?;
    log::info!("word bank: {} words of {} letters", bank.len(), bank.word_length());

    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, &bank, rng),
        Commands::Simple => run_simple_command(config, &bank, rng),
        Commands::Solve {
            word,
            verbose,
            use_hints,
        } => {
            let strategy = StrategyType::from_name(&cli.strategy);
            log::info!("strategy: {}", strategy.name());
            let solver = Solver::new(strategy, bank.words());
            solve_command(&word, verbose, use_hints, config, &solver, rng)
        }
        Commands::Benchmark {
            count,
            think_time,
            use_hints,
        } => {
            let benchmark = BenchmarkConfig {
                game: config,
                games: count,
                seed: cli.seed.unwrap_or_else(rand::random),
                think_time: Duration::from_secs(think_time),
                use_hints,
                show_progress: true,
            };
            let strategy = StrategyType::from_name(&cli.strategy);
            println!("Strategy: {}", strategy.name());
            let solver = Solver::new(strategy, bank.words());
            benchmark_command(&benchmark, &bank, &solver)
        }
    }
}

fn solve_command<S: Strategy>(
    word: &str,
    verbose: bool,
    use_hints: bool,
    config: GameConfig,
    solver: &Solver<S>,
    rng: StdRng,
) -> Result<()> {
    let solve = SolveConfig {
        target: word.to_string(),
        game: config,
        use_hints,
    };
    let result = solve_word(solve, solver, SystemClock, rng)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn benchmark_command<S: Strategy + Sync>(
    benchmark: &BenchmarkConfig,
    bank: &WordBank,
    solver: &Solver<S>,
) -> Result<()> {
    println!(
        "Running benchmark on {} games (seed {})...",
        benchmark.games, benchmark.seed
    );

    let result = run_benchmark(benchmark, bank, solver)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(config: GameConfig, bank: &WordBank, mut rng: StdRng) -> Result<()> {
    let stats = run_simple(config, bank, SystemClock, &mut rng)?;
    print_session_stats(&stats);
    Ok(())
}

fn run_play_command(config: GameConfig, bank: &WordBank, rng: StdRng) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config, bank, SystemClock, rng)?;
    let stats = run_tui(app)?;
    print_session_stats(&stats);
    Ok(())
}
