use minesweeper::{Board, CellInfo, ConfigError, GameConfig, GameError, GridError, Tile, MAX_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_fixed_layout_adjacency() {
    // . * .
    // . . .
    // * . *
    let board = Board::from_mines(3, 3, &[(1, 0), (0, 2), (2, 2)]).unwrap();
    assert_eq!(board.mine_count(), 3);
    assert_eq!(board.safe_count(), 6);

    assert_eq!(board.tile(0, 0).unwrap(), Tile::Safe(1));
    assert_eq!(board.tile(1, 0).unwrap(), Tile::Mine);
    assert_eq!(board.tile(1, 1).unwrap(), Tile::Safe(3));
    assert_eq!(board.tile(0, 1).unwrap(), Tile::Safe(2));
    assert_eq!(board.tile(1, 2).unwrap(), Tile::Safe(2));
    assert_eq!(board.tile(2, 1).unwrap(), Tile::Safe(2));
}

#[test]
fn test_duplicate_mines_collapse() {
    let board = Board::from_mines(2, 2, &[(0, 0), (0, 0)]).unwrap();
    assert_eq!(board.mine_count(), 1);
    assert_eq!(board.tile(1, 1).unwrap(), Tile::Safe(1));
}

#[test]
fn test_from_mines_rejects_bad_input() {
    assert_eq!(
        Board::from_mines(0, 2, &[]).unwrap_err(),
        GameError::InvalidConfiguration(ConfigError::ZeroWidth)
    );
    assert!(matches!(
        Board::from_mines(2, 2, &[(2, 0)]).unwrap_err(),
        GameError::Grid(GridError::OutOfBounds { x: 2, y: 0, .. })
    ));
}

#[test]
fn test_generate_places_requested_mines() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate(&mut rng, GameConfig::new(10, 9, 9)).unwrap();
    let mines = (0..9)
        .flat_map(|y| (0..9).map(move |x| (x, y)))
        .filter(|&(x, y)| board.has_mine(x, y).unwrap())
        .count();
    assert_eq!(mines, 10);
    assert_eq!(board.mine_count(), 10);
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let config = GameConfig::new(15, 8, 6);
    let a = Board::generate(&mut SmallRng::seed_from_u64(7), config).unwrap();
    let b = Board::generate(&mut SmallRng::seed_from_u64(7), config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_generate_rejects_each_bound_separately() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Board::generate(&mut rng, GameConfig::new(0, 0, 3)).unwrap_err(),
        ConfigError::ZeroWidth
    );
    assert_eq!(
        Board::generate(&mut rng, GameConfig::new(0, 3, 0)).unwrap_err(),
        ConfigError::ZeroHeight
    );
    assert_eq!(
        Board::generate(&mut rng, GameConfig::new(10, 3, 3)).unwrap_err(),
        ConfigError::TooManyMines {
            mines: 10,
            width: 3,
            height: 3,
            cells: 9
        }
    );
    assert_eq!(
        Board::generate(&mut rng, GameConfig::new(0, usize::MAX, 2)).unwrap_err(),
        ConfigError::TooLarge {
            width: usize::MAX,
            height: 2
        }
    );
}

#[test]
fn test_board_size_is_capped_before_allocation() {
    let huge = GameConfig::new(0, 4_000_000_000, 4_000_000_000);
    assert_eq!(
        huge.validate().unwrap_err(),
        ConfigError::TooLarge {
            width: 4_000_000_000,
            height: 4_000_000_000
        }
    );
    assert_eq!(
        GameConfig::new(0, MAX_CELLS + 1, 1).validate().unwrap_err(),
        ConfigError::TooLarge {
            width: MAX_CELLS + 1,
            height: 1
        }
    );
    assert_eq!(GameConfig::new(0, MAX_CELLS, 1).validate().unwrap(), MAX_CELLS);
    assert!(matches!(
        Board::from_mines(MAX_CELLS, 2, &[]).unwrap_err(),
        GameError::InvalidConfiguration(ConfigError::TooLarge { .. })
    ));
}

#[test]
fn test_config_error_messages_are_distinct() {
    let messages = [
        ConfigError::ZeroWidth.to_string(),
        ConfigError::ZeroHeight.to_string(),
        ConfigError::TooManyMines {
            mines: 10,
            width: 3,
            height: 3,
            cells: 9,
        }
        .to_string(),
    ];
    assert_ne!(messages[0], messages[1]);
    assert_ne!(messages[1], messages[2]);
    assert!(messages[2].contains("3 * 3 = 9 tiles and 10 mines"));
}

#[test]
fn test_reveal_twice_is_rejected() {
    let mut board = Board::from_mines(2, 1, &[(1, 0)]).unwrap();
    assert_eq!(board.reveal(0, 0).unwrap(), Tile::Safe(1));
    assert_eq!(
        board.cell_info(0, 0).unwrap(),
        CellInfo {
            revealed: true,
            tile: Tile::Safe(1)
        }
    );
    assert_eq!(
        board.reveal(0, 0).unwrap_err(),
        GameError::AlreadyRevealed { x: 0, y: 0 }
    );
    assert_eq!(board.revealed_safe_count(), 1);
}
