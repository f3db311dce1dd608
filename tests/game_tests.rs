use rand::rngs::SmallRng;
use rand::SeedableRng;
use warships::prelude::*;
use warships::{GameError, PlacementIssue, WarshipError};

#[test]
fn test_new_game() {
    let engine = GameEngine::new(4).unwrap();
    assert_eq!(engine.player_board().num_warships(), 4);
    assert_eq!(engine.opponent_board().num_warships(), 4);
    assert_eq!(engine.targeter().remaining_fleet(), Some(&[4, 3, 2, 1][..]));
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(
        GameEngine::new(1).unwrap_err(),
        GameError::Board(BoardError::InvalidSize(1))
    );
}

#[test]
fn test_player_shot_out_of_range() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.place_opponent_fleet(&mut FirstChoice).unwrap();
    assert_eq!(
        engine.player_shot(Coordinate::new(5, 0)).unwrap_err(),
        BoardError::OutOfRange(Coordinate::new(5, 0))
    );
}

#[test]
fn test_manual_player_fleet_and_opponent_turn() {
    let mut engine = GameEngine::new(2).unwrap();
    assert_eq!(engine.next_player_warship_size(), Some(2));
    assert_eq!(engine.player_placement_options().len(), 4);
    engine
        .place_player_warship(vec![Coordinate::new(1, 0), Coordinate::new(1, 1)])
        .unwrap();
    assert_eq!(engine.next_player_warship_size(), Some(1));
    assert_eq!(
        engine.player_placement_options(),
        vec![vec![Coordinate::new(0, 0)], vec![Coordinate::new(0, 1)]]
    );
    engine.place_player_warship(vec![Coordinate::new(0, 1)]).unwrap();
    assert_eq!(engine.next_player_warship_size(), None);
    assert!(engine.player_placement_options().is_empty());
    assert_eq!(
        engine.place_player_warship(vec![Coordinate::new(0, 0)]).unwrap_err(),
        BoardError::FleetComplete
    );
    engine.place_opponent_fleet(&mut FirstChoice).unwrap();

    let (guess, outcome) = engine.opponent_turn(&mut FirstChoice).unwrap();
    assert_eq!(guess, Coordinate::new(0, 0));
    assert_eq!(outcome, HitOutcome::MISS);
    assert!(engine.player_board().was_guessed(guess));
    assert!(engine.targeter().tried().contains(&guess));
}

#[test]
fn test_manual_placement_rejections() {
    let mut engine = GameEngine::new(3).unwrap();
    let two = vec![Coordinate::new(0, 0), Coordinate::new(1, 0)];
    assert_eq!(
        engine.place_player_warship(two.clone()).unwrap_err(),
        BoardError::InvalidPlacement {
            blocks: two,
            issue: PlacementIssue::WrongSize { expected: 3 }
        }
    );
    let bent = vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(1, 1)];
    assert_eq!(
        engine.place_player_warship(bent.clone()).unwrap_err(),
        BoardError::Warship(WarshipError::InvalidShape(bent))
    );
    assert!(engine.player_board().warships().is_empty());
    assert_eq!(engine.next_player_warship_size(), Some(3));
}

#[test]
fn test_opponent_sinks_hand_placed_fleet() {
    let fleet = [
        vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
        vec![(0, 2), (1, 2), (2, 2), (3, 2)],
        vec![(4, 4), (4, 3), (4, 2)],
        vec![(0, 4), (1, 4)],
        vec![(2, 3)],
    ];
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new(5).unwrap();
        for blocks in &fleet {
            let blocks = blocks.iter().map(|&(x, y)| Coordinate::new(x, y)).collect();
            engine.place_player_warship(blocks).unwrap();
        }
        engine.place_opponent_fleet(&mut rng).unwrap();

        for _ in 0..25 {
            engine.opponent_turn(&mut rng).unwrap();
            if engine.status() != GameStatus::InProgress {
                break;
            }
        }
        assert_eq!(engine.status(), GameStatus::Lost, "seed {}", seed);
        assert_eq!(engine.targeter().remaining_fleet(), Some(&[][..]));
    }
}

#[test]
fn test_player_sweep_wins() {
    let mut engine = GameEngine::new(3).unwrap();
    engine.place_opponent_fleet(&mut FirstChoice).unwrap();
    engine.place_player_fleet(&mut FirstChoice).unwrap();
    let targets = engine.opponent_board().all_locations();
    for target in targets {
        engine.player_shot(target).unwrap();
        if engine.status() != GameStatus::InProgress {
            break;
        }
    }
    assert_eq!(engine.status(), GameStatus::Won);
    assert!(engine.opponent_board().all_sunk());
}

#[test]
fn test_full_game_finishes() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut engine = GameEngine::new(6).unwrap();
    engine.place_opponent_fleet(&mut rng).unwrap();
    engine.place_player_fleet(&mut rng).unwrap();

    let targets = engine.opponent_board().all_locations();
    let mut turns = 0;
    for target in targets {
        turns += 1;
        engine.player_shot(target).unwrap();
        if engine.status() != GameStatus::InProgress {
            break;
        }
        engine.opponent_turn(&mut rng).unwrap();
        if engine.status() != GameStatus::InProgress {
            break;
        }
    }
    assert!(turns <= 36);
    match engine.status() {
        GameStatus::Won => assert!(engine.opponent_board().all_sunk()),
        GameStatus::Lost => assert!(engine.player_board().all_sunk()),
        GameStatus::InProgress => panic!("game did not finish"),
    }
}
