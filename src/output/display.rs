//! Display functions for sessions and command results

use super::formatters::create_progress_bar;
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::SessionStats;
use colored::Colorize;

/// Print the running totals of a session
pub fn print_session_stats(stats: &SessionStats) {
    println!("\n📈 {}", "Session:".bright_cyan().bold());
    println!("   Played:      {}", stats.games_played);
    println!("   Win rate:    {:.0}%", stats.win_rate());
    println!(
        "   Streak:      {} (best {})",
        stats.current_streak, stats.best_streak
    );
    if let Some(best) = stats.best_score {
        println!("   Best score:  {}", best.to_string().bright_yellow());
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        if let Some(hint) = step.hint {
            println!(
                "\n  Hint: position {} is {}",
                hint.position + 1,
                hint.letter.to_string().bright_cyan()
            );
        }
        println!("\nTurn {turn}: {} {}", step.guess, step.result.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 && step.candidates_before > step.candidates_after {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
        if let Some(score) = result.score {
            println!("   Score: {} ({})", score.to_string().bright_yellow(), result.elapsed);
        }
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate).bright_yellow().bold()
    );
    println!("   Average tries:    {:.2}", result.average_tries);
    println!(
        "   Average score:    {}",
        format!("{:.0}", result.average_score).green()
    );
    if let Some(best) = result.best_score {
        println!("   Best score:       {best}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_tries = result.distribution.keys().copied().max().unwrap_or(0);
    for tries in 1..=max_tries {
        if let Some(&count) = result.distribution.get(&tries) {
            let pct = count as f64 / result.total_games as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {tries}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
    let losses = result.total_games - result.wins;
    if losses > 0 {
        println!("   {}", format!("lost: {losses}").red());
    }
}
