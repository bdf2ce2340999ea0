// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for analyzing battles and serving requests
// ═══════════════════════════════════════════════════════════════════════

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ur_advisor::context::{determine_stage, Stage};
use ur_advisor::decision::{MAX_WIN_PROBABILITY, MIN_WIN_PROBABILITY};
use ur_advisor::explain::{MAX_ALTERNATIVES, MAX_CONFIDENCE, MIN_CONFIDENCE};
use ur_advisor::{Advisor, BattleAnalyzer, BattleRecommendation};
use ur_engine::setup::random_battle;
use ur_engine::types::BattleState;
use ur_worker::{build_pool, dispatch_lines, Worker, WorkerConfig};

#[derive(Parser)]
#[command(name = "ur-runner", about = "Card battle advisor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a play for one battle state read from a JSON file
    Analyze {
        #[arg(short, long)]
        state: PathBuf,
        #[arg(short, long)]
        pretty: bool,
    },
    /// Answer JSON-line requests from stdin, one response line per request
    Serve {
        #[arg(short, long, default_value = "worker.toml")]
        config: PathBuf,
        /// Read every line first, then dispatch them in parallel
        #[arg(short, long)]
        batch: bool,
    },
    /// Analyze seeded random battles and summarize the recommendations
    Simulate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze { state, pretty } => {
            init_logging("warn");
            cmd_analyze(&state, pretty)
        }
        Commands::Serve { config, batch } => cmd_serve(&config, batch),
        Commands::Simulate { seed, count } => {
            init_logging("info");
            cmd_simulate(seed, count)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean response stream. `RUST_LOG`
/// overrides `default_filter`.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn cmd_analyze(path: &Path, pretty: bool) -> Result<(), String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path.display(), e))?;
    let state = BattleState::from_json(&raw).map_err(|e| format!("Invalid battle state: {}", e))?;

    let analyzer = BattleAnalyzer::loaded();
    let recommendation = analyzer.recommend(&state).map_err(|e| e.to_string())?;

    let encoded = if pretty {
        serde_json::to_string_pretty(&recommendation)
    } else {
        serde_json::to_string(&recommendation)
    };
    println!("{}", encoded.map_err(|e| e.to_string())?);
    Ok(())
}

fn cmd_serve(config_path: &Path, batch: bool) -> Result<(), String> {
    let config = WorkerConfig::load(config_path).map_err(|e| e.to_string())?;
    init_logging(&config.log_filter);
    debug!(?config, "loaded worker config");

    let advisor: Arc<dyn Advisor> = Arc::new(BattleAnalyzer::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let worker = if config.auto_load {
        let (worker, announcement) = Worker::start(advisor);
        writeln!(out, "{}", announcement.to_json(config.pretty)).map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;
        worker
    } else {
        Worker::new(advisor)
    };

    let stdin = io::stdin();
    if batch {
        let lines: Vec<String> = stdin
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?
            .into_iter()
            .filter(|l| !l.trim().is_empty())
            .collect();
        let pool = build_pool(config.threads).map_err(|e| e.to_string())?;
        let responses = pool.install(|| dispatch_lines(&worker, &lines));
        for response in &responses {
            writeln!(out, "{}", response.to_json(config.pretty)).map_err(|e| e.to_string())?;
        }
    } else {
        for line in stdin.lock().lines() {
            let line = line.map_err(|e| e.to_string())?;
            if line.trim().is_empty() {
                continue;
            }
            let response = worker.handle_line(&line);
            writeln!(out, "{}", response.to_json(config.pretty)).map_err(|e| e.to_string())?;
            out.flush().map_err(|e| e.to_string())?;
        }
    }

    info!("input closed, worker exiting");
    Ok(())
}

// ── Simulation ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Summary {
    analyzed: u64,
    failed: u64,
    early: u64,
    mid: u64,
    late: u64,
    win_probability: f64,
    confidence: f64,
    violations: u64,
}

impl Summary {
    fn merge(mut self, other: Summary) -> Summary {
        self.analyzed += other.analyzed;
        self.failed += other.failed;
        self.early += other.early;
        self.mid += other.mid;
        self.late += other.late;
        self.win_probability += other.win_probability;
        self.confidence += other.confidence;
        self.violations += other.violations;
        self
    }
}

fn cmd_simulate(seed: u64, count: u64) -> Result<(), String> {
    println!("=== Battle advisor simulation: seed={}, battles={} ===\n", seed, count);

    let analyzer = BattleAnalyzer::loaded();
    let summary = (0..count)
        .into_par_iter()
        .map(|i| {
            let state = random_battle(seed.wrapping_add(i));
            let mut s = Summary::default();
            match analyzer.recommend(&state) {
                Ok(rec) => {
                    s.analyzed = 1;
                    match determine_stage(&state) {
                        Stage::Early => s.early = 1,
                        Stage::Mid => s.mid = 1,
                        Stage::Late => s.late = 1,
                    }
                    s.win_probability = rec.win_probability;
                    s.confidence = rec.confidence;
                    s.violations = violations(&state, &rec);
                }
                Err(e) => {
                    debug!(battle = %state.id, error = %e, "analysis failed");
                    s.failed = 1;
                }
            }
            s
        })
        .reduce(Summary::default, Summary::merge);

    let n = summary.analyzed.max(1) as f64;
    let pct = |x: u64| x as f64 / n * 100.0;
    println!("--- Summary ({} analyzed, {} failed) ---", summary.analyzed, summary.failed);
    println!("  early: {:>6} ({:.1}%)", summary.early, pct(summary.early));
    println!("  mid:   {:>6} ({:.1}%)", summary.mid, pct(summary.mid));
    println!("  late:  {:>6} ({:.1}%)", summary.late, pct(summary.late));
    println!();
    println!("  mean win probability: {:.3}", summary.win_probability / n);
    println!("  mean confidence:      {:.3}", summary.confidence / n);
    println!("  invariant violations: {}", summary.violations);

    if summary.violations > 0 {
        return Err(format!("{} invariant violations", summary.violations));
    }
    Ok(())
}

/// Count the ways `rec` breaks the guarantees every recommendation makes.
fn violations(state: &BattleState, rec: &BattleRecommendation) -> u64 {
    let checks = [
        state.player_cards.iter().any(|c| c.id == rec.recommended_card.id),
        rec.recommended_pills <= state.player_pills,
        (MIN_WIN_PROBABILITY..=MAX_WIN_PROBABILITY).contains(&rec.win_probability),
        (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&rec.confidence),
        rec.alternatives.len() <= MAX_ALTERNATIVES,
        rec.alternatives.iter().all(|a| a.card.id != rec.recommended_card.id),
        rec.alternatives.iter().all(|a| a.pills <= state.player_pills),
    ];
    checks.iter().filter(|ok| !**ok).count() as u64
}
