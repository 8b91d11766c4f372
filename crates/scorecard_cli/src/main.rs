//! Scorecard CLI
//!
//! Replay scoring events, validate team sheets, print BA leaders.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use scorecard_core::stats::DEFAULT_LEADERBOARD_SIZE;

#[derive(Parser)]
#[command(name = "scorecard")]
#[command(about = "Baseball scorecard tools", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a JSON list of scoring events and print the final count
    Replay {
        /// Input events JSON file path
        #[arg(long)]
        events: PathBuf,

        /// Rules file (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Saturating outs and home runs that clear the bases
        #[arg(long, default_value = "false")]
        strict: bool,

        /// Write the replay report as JSON
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Validate a team sheet (game setup + lineup)
    Lineup {
        /// Team sheet JSON file path
        #[arg(long)]
        file: PathBuf,
    },

    /// Print the batting average leaderboard
    Leaders {
        /// BA feed JSON file path
        #[arg(long)]
        file: PathBuf,

        #[arg(long, default_value_t = DEFAULT_LEADERBOARD_SIZE)]
        limit: usize,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay { events, config, strict, out } => {
            let rules = scorecard_cli::resolve_rules(config.as_deref(), strict)?;
            debug!(?rules, "resolved rules");

            println!("⚾ Replaying scoring events...");
            println!("   Input: {}", events.display());

            let report = scorecard_cli::replay_file(&events, rules)?;

            println!("\n✅ {} events applied", report.events_applied);
            println!(
                "   Balls {}  Strikes {}  Outs {}",
                report.state.balls, report.state.strikes, report.state.outs
            );
            println!("{}", scorecard_cli::render_board(&report.markers));

            if let Some(out_path) = out {
                std::fs::write(&out_path, serde_json::to_string_pretty(&report)?)?;
                println!("\n📄 Report saved to: {}", out_path.display());
            }
        }

        Commands::Lineup { file } => {
            let sheet = scorecard_cli::load_team_sheet(&file)?;
            match sheet.check() {
                Ok(()) => {
                    println!(
                        "✅ {} vs {}: {} starters, {} substitutes",
                        sheet.game.team_name,
                        sheet.game.opponent_team,
                        sheet.lineup.starters.len(),
                        sheet.lineup.substitutes.len()
                    );
                }
                Err(err) => {
                    warn!(file = %file.display(), "team sheet rejected");
                    anyhow::bail!("❌ {}", err);
                }
            }
        }

        Commands::Leaders { file, limit } => {
            let rows = scorecard_cli::leaders_from_file(&file, limit)?;
            for row in rows {
                println!(
                    "#{:<2} {:<24} {:.3}  {:+.1}%",
                    row.rank,
                    row.player_name,
                    row.ba,
                    row.percent_vs_baseline * 100.0
                );
            }
        }
    }

    Ok(())
}
