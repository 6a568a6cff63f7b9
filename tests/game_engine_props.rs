use minesweeper::{GameConfig, GameEngine, GameStatus, Tile};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

/// Strategy for a valid `(mines, width, height)` triple.
fn config() -> impl Strategy<Value = GameConfig> {
    (1usize..=12, 1usize..=12)
        .prop_flat_map(|(w, h)| (0..=w * h, Just(w), Just(h)))
        .prop_map(|(mines, w, h)| GameConfig::new(mines, w, h))
}

fn cells(engine: &GameEngine) -> Vec<(usize, usize)> {
    (0..engine.height())
        .flat_map(|y| (0..engine.width()).map(move |x| (x, y)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Exactly `mines` cells are mined and every safe cell counts its mined neighbours.
    #[test]
    fn generation_respects_mine_count_and_adjacency(seed in any::<u64>(), config in config()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let engine = GameEngine::with_config(&mut rng, config).unwrap();
        let board = engine.board();

        let mut mines = 0;
        for (x, y) in cells(&engine) {
            if engine.has_mine(x, y).unwrap() {
                mines += 1;
                prop_assert_eq!(engine.cell_info(x, y).unwrap().tile, Tile::Mine);
                continue;
            }
            let expected = board
                .neighbors(x, y)
                .filter(|&(nx, ny)| engine.has_mine(nx, ny).unwrap())
                .count();
            prop_assert_eq!(engine.cell_info(x, y).unwrap().tile, Tile::Safe(expected as u8));
        }
        prop_assert_eq!(mines, config.mines);
        prop_assert_eq!(engine.hidden_safe_count(), config.width * config.height - config.mines);
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
    }

    /// Revealing every safe cell wins exactly on the last one.
    #[test]
    fn revealing_all_safe_cells_wins(seed in any::<u64>(), config in config()) {
        prop_assume!(config.mines < config.width * config.height);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_config(&mut rng, config).unwrap();

        let mut safe: Vec<_> = cells(&engine)
            .into_iter()
            .filter(|&(x, y)| !engine.has_mine(x, y).unwrap())
            .collect();
        safe.shuffle(&mut rng);

        let last = safe.len() - 1;
        for (i, (x, y)) in safe.into_iter().enumerate() {
            prop_assert!(engine.in_progress());
            let tile = engine.reveal_tile(x, y).unwrap();
            prop_assert!(!tile.is_mine());
            let expected = if i == last { GameStatus::Won } else { GameStatus::InProgress };
            prop_assert_eq!(engine.status(), expected);
        }
        prop_assert_eq!(engine.hidden_safe_count(), 0);
    }

    /// Hitting a mine always loses, however many safe cells were uncovered first.
    #[test]
    fn revealing_a_mine_loses(seed in any::<u64>(), config in config(), uncovered in 0usize..200) {
        prop_assume!(config.mines > 0);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_config(&mut rng, config).unwrap();
        let all = cells(&engine);

        let safe: Vec<_> = all.iter().copied().filter(|&(x, y)| !engine.has_mine(x, y).unwrap()).collect();
        // leave at least one safe tile covered so the game is still running
        for &(x, y) in safe.iter().take(uncovered.min(safe.len().saturating_sub(1))) {
            engine.reveal_tile(x, y).unwrap();
        }
        let &(mx, my) = all.iter().find(|&&(x, y)| engine.has_mine(x, y).unwrap()).unwrap();

        prop_assert_eq!(engine.reveal_tile(mx, my).unwrap(), Tile::Mine);
        prop_assert_eq!(engine.status(), GameStatus::Lost);
    }

    /// A second reveal of the same tile fails and leaves the state untouched.
    #[test]
    fn reveal_twice_fails(seed in any::<u64>(), config in config(), pick in any::<prop::sample::Index>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::with_config(&mut rng, config).unwrap();
        let all = cells(&engine);
        let (x, y) = all[pick.index(all.len())];

        engine.reveal_tile(x, y).unwrap();
        let status = engine.status();
        let hidden = engine.hidden_safe_count();
        prop_assert!(engine.reveal_tile(x, y).is_err());
        prop_assert_eq!(engine.status(), status);
        prop_assert_eq!(engine.hidden_safe_count(), hidden);
    }
}
