use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plutos::calibration;
use plutos::config::AppConfig;
use plutos::overlay::TerminalPresenter;
use plutos::poker::engine;
use plutos::poker_types::{
    BoardCards, Card, HoleCards, Observation, Position, RecognitionConfidence, Stage,
};
use plutos::poller::Poller;
use plutos::storage::Database;
use plutos::windows;

#[derive(Parser)]
#[command(name = "plutos")]
#[command(about = "Multi-table preflop assistant: capture, recognition, chart advice")]
struct Cli {
    /// Config file, defaults apply when absent
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch poker table windows and print advice when it is hero's turn
    Run,
    /// Look up the chart action for a spot without any capture
    Advise {
        /// Hero's hole cards, e.g. "Ah Kd" or "AhKd"
        hand: String,
        /// Hero's position: UTG, UTG+1, UTG+2, LJ, HJ, CO, BTN, SB, BB
        position: String,
        /// Opener's position when facing a raise
        #[arg(long)]
        vs: Option<String>,
        /// Effective stack in big blinds
        #[arg(long, default_value_t = 100.0)]
        stack: f64,
        /// Treat --vs as a 3-bettor instead of an opener
        #[arg(long)]
        three_bet: bool,
    },
    /// Save a table layout for a window title
    Calibrate {
        /// Window title the layout applies to
        title: String,
        /// JSON layout file; the built-in default layout when omitted
        #[arg(long)]
        layout: Option<PathBuf>,
    },
    /// List open windows matching the configured title pattern
    Windows,
    /// Print row counts from the session database
    Stats,
}

fn parse_hand(input: &str) -> Result<HoleCards> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let (first, second) = match parts.as_slice() {
        [one] if one.len() >= 4 && one.is_ascii() => {
            let split = if one.starts_with("10") { 3 } else { 2 };
            (&one[..split], &one[split..])
        }
        [a, b] => (*a, *b),
        _ => return Err(anyhow!("cannot parse hand {input:?}, expected e.g. \"Ah Kd\"")),
    };
    let first = Card::parse(first).ok_or_else(|| anyhow!("invalid card {first:?}"))?;
    let second = Card::parse(second).ok_or_else(|| anyhow!("invalid card {second:?}"))?;
    HoleCards::new(first, second).ok_or_else(|| anyhow!("duplicate card in hand {input:?}"))
}

fn parse_position(input: &str) -> Result<Position> {
    match Position::parse(input) {
        Position::Unknown => Err(anyhow!("unknown position {input:?}")),
        position => Ok(position),
    }
}

async fn run_session(config: AppConfig) -> Result<()> {
    let db = Database::new(config.db_path.clone())?;
    let run_id = uuid::Uuid::new_v4().to_string();
    let session_id = db
        .create_session(&run_id, env!("CARGO_PKG_VERSION"), Utc::now())
        .await?;
    info!(run_id = %run_id, session_id, "session started");

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, stopping");
            ctrl_c_cancel.cancel();
        }
    });

    let poller = Poller::new(config, db.clone(), session_id, TerminalPresenter::new())?;
    poller.run(cancel).await?;

    db.end_session(session_id, Utc::now()).await?;
    info!(session_id, "session ended");
    Ok(())
}

fn advise(
    hand: &str,
    position: &str,
    vs: Option<&str>,
    stack: f64,
    three_bet: bool,
) -> Result<()> {
    let hole_cards = parse_hand(hand)?;
    let hero = parse_position(position)?;

    let decision = if three_bet {
        let villain = vs
            .ok_or_else(|| anyhow!("--three-bet requires --vs <position>"))
            .and_then(parse_position)?;
        engine::decide_facing_3bet(&hole_cards.hand_notation(), hero, villain)
    } else {
        let mut active_positions = vec![hero, Position::BigBlind];
        if let Some(villain) = vs {
            active_positions.push(parse_position(villain)?);
        }
        let observation = Observation {
            window_id: "advise".into(),
            timestamp: Utc::now(),
            stage: Stage::Preflop,
            dealer_seat: Some(0),
            hero_position: Some(hero),
            active_positions,
            hero_cards: Some(hole_cards),
            board_cards: BoardCards::default(),
            pot_bb: Some(1.5),
            hero_stack_bb: Some(stack),
            hero_turn: true,
            confidence: RecognitionConfidence::default(),
        };
        engine::decide(&observation)
    };

    match decision {
        Some(decision) => {
            let sizing = decision
                .sizing_bb
                .map(|s| format!(" {s:.1}bb"))
                .unwrap_or_default();
            println!(
                "{}{}  ({:.0}% | {} | {})",
                decision.action.as_str().to_uppercase(),
                sizing,
                decision.confidence * 100.0,
                decision.source,
                decision.reasoning,
            );
        }
        None => println!("no recommendation for this spot"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Run => run_session(config).await,
        Commands::Advise {
            hand,
            position,
            vs,
            stack,
            three_bet,
        } => advise(&hand, &position, vs.as_deref(), stack, three_bet),
        Commands::Calibrate { title, layout } => {
            let table = match layout {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("failed to read layout file {}", path.display()))?;
                    serde_json::from_str(&raw)
                        .with_context(|| format!("failed to parse layout file {}", path.display()))?
                }
                None => config.default_table.clone(),
            };
            calibration::save_layout(&config, &title, &table)?;
            println!(
                "saved layout for {title:?} as {}",
                calibration::layout_file_name(&title)
            );
            Ok(())
        }
        Commands::Windows => {
            let matches = windows::list_matching(&config)?;
            if matches.is_empty() {
                println!("no windows match pattern {:?}", config.window_title_pattern);
            }
            for (id, title) in matches {
                println!("{id:>10}  {title}");
            }
            Ok(())
        }
        Commands::Stats => {
            let db = Database::new(config.db_path.clone())?;
            let stats = db.stats().await?;
            println!("sessions:     {}", stats.sessions);
            println!("windows:      {}", stats.windows);
            println!("observations: {}", stats.observations);
            println!("events:       {}", stats.events);
            println!("decisions:    {}", stats.decisions);

            let recent = db.recent_decisions(None, 5).await?;
            if !recent.is_empty() {
                println!("\nlast decisions:");
                for row in recent {
                    println!(
                        "  {}  {}  {}  {}{}",
                        row.ts.format("%Y-%m-%d %H:%M:%S"),
                        row.window_id,
                        row.hero_position.as_deref().unwrap_or("?"),
                        row.recommended_action,
                        row.sizing_bb
                            .map(|s| format!(" {s:.1}bb"))
                            .unwrap_or_default(),
                    );
                }
            }
            Ok(())
        }
    }
}
