use minesweeper::{init_logging, GameEngine, Tile};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

/// Headless playthrough: reveal covered tiles in a seeded random order until
/// the game ends, then print a one-line JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: {} <seed> <mines> <width> <height>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mines: usize = args[2].parse()?;
    let width: usize = args[3].parse()?;
    let height: usize = args[4].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine =
        GameEngine::new_game(&mut rng, mines, width, height).map_err(|e| anyhow::anyhow!(e))?;

    let mut order: Vec<(usize, usize)> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .collect();
    order.shuffle(&mut rng);

    let mut reveals = 0usize;
    let mut last = None;
    for (x, y) in order {
        if engine.status().is_finished() {
            break;
        }
        let tile = engine.reveal_tile(x, y).map_err(|e| anyhow::anyhow!(e))?;
        reveals += 1;
        last = Some(tile);
    }

    let result = json!({
        "status": format!("{:?}", engine.status()),
        "reveals": reveals,
        "hidden_safe": engine.hidden_safe_count(),
        "hit_mine": last == Some(Tile::Mine),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
