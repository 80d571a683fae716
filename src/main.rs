use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glyph_gateway::engine::Engine;
use glyph_gateway::{Config, Daemon, Observation, Recommender};

/// Glyph - sign-to-text stabilization gateway
#[derive(Parser)]
#[command(name = "glyph", version, about)]
struct Cli {
    /// Port to listen on (overrides config file)
    #[arg(long, env = "GLYPH_PORT")]
    port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up completions for a partial word
    Recommend {
        /// Partial word to complete
        word: String,
        /// Maximum completions to print
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
    /// Run a scripted symbol stream through the engine offline
    ///
    /// Script characters: a letter is one classified frame, '.' a present
    /// frame without a classification, '_' an absent frame.
    Simulate {
        /// Frame script, e.g. "HHHHHHHHHH...___"
        script: String,
        /// Frames per second of the simulated stream
        #[arg(long, default_value = "30")]
        fps: u32,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,glyph_gateway=info",
        1 => "info,glyph_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    if let Some(cmd) = cli.command {
        return match cmd {
            Command::Recommend { word, limit } => cmd_recommend(&config, &word, limit),
            Command::Simulate { script, fps } => cmd_simulate(&config, &script, fps),
        };
    }

    tracing::info!(port = config.port, "starting glyph gateway");

    let daemon = Daemon::new(config);
    daemon.run().await?;

    Ok(())
}

/// Look up completions from the shell
fn cmd_recommend(config: &Config, word: &str, limit: usize) -> anyhow::Result<()> {
    let recommender = config
        .dictionary
        .clone()
        .map_or_else(Recommender::default, Recommender::new);

    let matches = recommender.recommend(word, limit);
    if matches.is_empty() {
        println!("No completions for \"{word}\"");
    } else {
        for m in matches {
            println!("{m}");
        }
    }
    Ok(())
}

/// Feed a scripted frame stream through an offline engine
fn cmd_simulate(config: &Config, script: &str, fps: u32) -> anyhow::Result<()> {
    anyhow::ensure!(fps > 0, "fps must be positive");

    let recommender = config
        .dictionary
        .clone()
        .map_or_else(Recommender::default, Recommender::new);
    let t0 = Instant::now();
    let mut engine = Engine::new(&config.engine, recommender, t0);
    let frame_time = Duration::from_secs(1) / fps;

    for (i, c) in script.chars().enumerate() {
        let now = t0 + frame_time * u32::try_from(i).unwrap_or(u32::MAX);

        let observation = match c {
            '_' => Observation {
                symbol: None,
                present: false,
            },
            '.' => Observation {
                symbol: None,
                present: true,
            },
            letter => Observation {
                symbol: Some(letter.to_ascii_uppercase()),
                present: true,
            },
        };

        if let Some(committed) = engine.observe_frame(observation, now) {
            println!("[{i:5}] committed '{committed}'");
        }
        if engine.tick(now) {
            println!("[{i:5}] inferred space");
        }
    }

    let snapshot = engine.snapshot();
    println!("---");
    println!("sentence: {:?}", snapshot.sentence);
    println!("recs:     {:?}", snapshot.recommendations);
    Ok(())
}
