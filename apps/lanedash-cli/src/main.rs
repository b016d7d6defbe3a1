mod autopilot;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lanedash_common::GameConfig;
use lanedash_input::Action;
use lanedash_kernel::Game;
use lanedash_render::{RenderView, Renderer, TextRenderer};
use lanedash_session::{Session, TracingAudio};
use lanedash_tools::GameInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lanedash", about = "Headless runner for the lanedash game core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML config file (missing fields use defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and config summary
    Info,
    /// Play a run with the autopilot
    Run {
        /// Maximum frames to simulate
        #[arg(short, long, default_value = "3600")]
        frames: u64,
        /// Override the config seed
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the text view every N frames (0 = only at the end)
        #[arg(short, long, default_value = "0")]
        render_every: u64,
        /// Emit every game event as a JSON line
        #[arg(long)]
        json: bool,
    },
    /// Run the same seed twice and compare state hashes frame by frame
    Verify {
        #[arg(short, long, default_value = "3600")]
        frames: u64,
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// Print the effective config as YAML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("lanedash v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "lanes={} lives={} win_score={} spawn_interval={} seed={}",
                config.lanes,
                config.initial_lives,
                config.win_score,
                config.spawn_interval,
                config.seed
            );
            println!("{}", GameInspector::summary(&Game::new(config)));
        }
        Commands::Run {
            frames,
            seed,
            render_every,
            json,
        } => {
            let seed = seed.unwrap_or(config.seed);
            tracing::info!(seed, frames, "starting autopilot run");
            let mut session = Session::with_game(Game::with_seed(config, seed), TracingAudio);
            let renderer = TextRenderer::new();
            let view = RenderView::default();

            session.handle(Action::Start);
            for frame in 1..=frames {
                session.handle(autopilot::choose(session.game()));
                session.frame();
                let events = session.drain_events();
                if json {
                    for event in &events {
                        println!("{}", serde_json::to_string(event)?);
                    }
                }
                if render_every > 0 && frame.is_multiple_of(render_every) {
                    println!("{}", renderer.render(session.game(), &view));
                }
                if !session.running() {
                    break;
                }
            }

            println!("{}", renderer.render(session.game(), &view));
            println!("{}", GameInspector::summary(session.game()));
            let timer = session.frame_timer();
            println!(
                "frame time: avg={:?} max={:?} ({} samples)",
                timer.average(),
                timer.max(),
                timer.sample_count()
            );
        }
        Commands::Verify { frames, seed } => {
            println!("Determinism check: seed={seed}, frames={frames}");
            let mut a = Game::with_seed(config.clone(), seed);
            let mut b = Game::with_seed(config, seed);
            a.reset();
            b.reset();

            let mut mismatch = None;
            for frame in 1..=frames {
                for game in [&mut a, &mut b] {
                    autopilot::drive(game);
                }
                if a.state_hash() != b.state_hash() {
                    mismatch = Some(frame);
                    break;
                }
            }

            println!("Run A: {}", GameInspector::summary(&a));
            println!("Run B: {}", GameInspector::summary(&b));
            match mismatch {
                None => println!("Match: OK"),
                Some(frame) => anyhow::bail!("state hashes diverged at frame {frame}"),
            }
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
