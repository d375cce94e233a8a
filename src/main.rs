use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use hoopstats::data::loader::load_game_log;
use hoopstats::{analyze, EngineConfig, SeriesAnalysis, StatCode};

#[derive(Parser, Debug)]
#[command(name = "hoopstats", about = "Game-log statistics and single-game predictions")]
struct Cli {
    /// Game-log CSV export; repeat to compare players.
    #[arg(long = "log", required = true)]
    logs: Vec<PathBuf>,

    /// Statistic code (PTS, FG3M, ...) or name ("Total Rebounds").
    #[arg(long, short, default_value = "PTS")]
    stat: StatCode,

    #[arg(long, default_value = "2024-25")]
    season: String,

    /// Print the likelihood of reaching this value in a game.
    #[arg(long, short)]
    threshold: Option<f64>,

    /// JSON engine config; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Player name per log, in the same order as --log.
    #[arg(long = "label")]
    labels: Vec<String>,

    /// Emit the analysis as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut reported = 0usize;
    for (i, path) in cli.logs.iter().enumerate() {
        let label = cli
            .labels
            .get(i)
            .cloned()
            .unwrap_or_else(|| format!("Player {}", i + 1));

        match run_one(&cli, &config, path) {
            Ok(analysis) => {
                print_analysis(&cli, &analysis, &label)?;
                reported += 1;
            }
            Err(e) => tracing::warn!("Skipping {:?} ({}): {:#}", path, label, e),
        }
    }

    if reported == 0 {
        bail!("no game log could be analyzed");
    }
    Ok(())
}

fn run_one(cli: &Cli, config: &EngineConfig, path: &Path) -> Result<SeriesAnalysis> {
    let log = load_game_log(path)?;
    let series = log.stat_series(cli.stat, &cli.season)?;
    Ok(analyze(&series, config)?)
}

fn print_analysis(cli: &Cli, analysis: &SeriesAnalysis, label: &str) -> Result<()> {
    let prediction = cli.threshold.map(|t| analysis.predict(t)).transpose()?;

    if cli.json {
        let value = serde_json::json!({
            "player": label,
            "analysis": analysis,
            "prediction": prediction,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print!("{}", analysis.report(label));
    if let Some(p) = prediction {
        println!("  {}", p.describe(label, analysis.stat, analysis.decimals()));
    }
    println!();
    Ok(())
}
