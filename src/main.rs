use anyhow::{Context, Result};
use flappy::build_info;
use flappy::core::{FramePacer, GameConfig, GameDriver, GameWorld};
use flappy::input::CrosstermInput;
use flappy::ui::{restore_terminal, TerminalPresenter};
use flappy::FRAME_BUDGET;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    seed: Option<u64>,
    log_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_path {
        init_file_logger(path)?;
    }
    info!("{}", build_info::version_line());

    let config = GameConfig::default();
    if !config.gap_fits() {
        warn!("gap does not fit between the margins; gaps will be pinned to the top margin");
    }

    let rng = match options.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    install_panic_hook();
    let mut presenter = TerminalPresenter::enter().context("failed to set up terminal")?;

    let outcome = {
        let mut driver = GameDriver::new(
            GameWorld::new(config),
            CrosstermInput::new(config.screen_width, config.screen_height),
            &mut presenter,
            rng,
            FramePacer::new(FRAME_BUDGET),
        );
        driver.run()
    };

    // Restore before reporting anything, even if the loop failed.
    let restored = presenter.exit();
    let stats = outcome.context("game loop failed")?;
    restored.context("failed to restore terminal")?;

    info!(
        "session ended: {} frame(s), {} game(s), best score {}",
        stats.frames, stats.games_started, stats.best_score
    );
    println!("Thanks for playing! Best score: {}", stats.best_score);
    Ok(())
}

fn parse_args(args: &[String]) -> std::result::Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--seed needs a value".to_string())?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed '{}'", value))?;
                options.seed = Some(seed);
                i += 1;
            }
            "--log" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--log needs a file path".to_string())?;
                options.log_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    println!("Flappy - terminal arcade game\n");
    println!("Usage: flappy [OPTIONS]\n");
    println!("Options:");
    println!("  --seed <N>   Seed the gap generator for a repeatable course");
    println!("  --log <FILE> Write logs to FILE (level from RUST_LOG, default info)");
    println!("  --version    Show version information");
    println!("  --help       Show this help message");
    println!();
    println!("Controls:");
    println!("  Space / Up / k   Flap (starts the game)");
    println!("  R or click       Try again after a crash");
    println!("  Esc / q          Quit");
}

/// Logs go to a file because stdout belongs to the game screen.
fn init_file_logger(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Leave raw mode before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
