#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use minesweeper::{init_logging, GameConfig, Shell};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Text-mode Minesweeper.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Start a game right away with this many mines (requires --width and --height).
    #[arg(long, requires_all = ["width", "height"])]
    mines: Option<usize>,
    /// Board width for the initial game.
    #[arg(long, requires = "mines")]
    width: Option<usize>,
    /// Board height for the initial game.
    #[arg(long, requires = "mines")]
    height: Option<usize>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {} (boards will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut shell = Shell::new(rng);

    if let (Some(mines), Some(width), Some(height)) = (cli.mines, cli.width, cli.height) {
        shell
            .new_game(GameConfig::new(mines, width, height))
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell.run(stdin.lock(), &mut stdout)
}
