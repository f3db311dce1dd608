use warships::{Coordinate, ShapePolicy, Warship, WarshipError};

fn c(x: usize, y: usize) -> Coordinate {
    Coordinate::new(x, y)
}

fn three_mast() -> Warship {
    Warship::new(vec![c(0, 0), c(0, 1), c(0, 2)]).unwrap()
}

#[test]
fn test_new_warship() {
    let warship = three_mast();
    assert_eq!(warship.size(), 3);
    assert_eq!(warship.blocks(), &[c(0, 0), c(0, 1), c(0, 2)]);
    assert_eq!(warship.hits(), 0);
    assert!(!warship.is_sunk());
}

#[test]
fn test_empty_warship_rejected() {
    assert_eq!(Warship::new(vec![]).unwrap_err(), WarshipError::EmptyShape);
}

#[test]
fn test_duplicate_block_rejected() {
    let err = Warship::new(vec![c(1, 1), c(1, 2), c(1, 1)]).unwrap_err();
    assert_eq!(err, WarshipError::DuplicateBlock(c(1, 1)));
}

#[test]
fn test_shape_policy() {
    let diagonal = vec![c(0, 0), c(1, 1)];
    assert!(Warship::with_policy(diagonal.clone(), ShapePolicy::Lenient).is_ok());
    assert_eq!(
        Warship::with_policy(diagonal.clone(), ShapePolicy::Connected).unwrap_err(),
        WarshipError::InvalidShape(diagonal)
    );
    let gap = vec![c(0, 0), c(0, 2)];
    assert!(Warship::with_policy(gap, ShapePolicy::Connected).is_err());
    assert!(Warship::with_policy(vec![c(2, 0), c(2, 1), c(2, 2)], ShapePolicy::Connected).is_ok());
}

#[test]
fn test_bent_shape_needs_connected_policy() {
    let bent = vec![c(0, 0), c(1, 0), c(1, 1)];
    assert!(Warship::with_policy(bent.clone(), ShapePolicy::Connected).is_ok());
    assert_eq!(
        Warship::with_policy(bent.clone(), ShapePolicy::Straight).unwrap_err(),
        WarshipError::InvalidShape(bent.clone())
    );
    assert_eq!(Warship::new(bent.clone()).unwrap_err(), WarshipError::InvalidShape(bent));
}

#[test]
fn test_default_policy_is_straight() {
    assert_eq!(ShapePolicy::default(), ShapePolicy::Straight);
    assert!(Warship::new(vec![c(3, 1), c(2, 1), c(1, 1)]).is_ok());
    assert!(Warship::new(vec![c(0, 0), c(1, 1)]).is_err());
}

#[test]
fn test_describe() {
    assert_eq!(three_mast().describe(), "3 mast warship");
    assert_eq!(Warship::new(vec![c(4, 4)]).unwrap().to_string(), "1 mast warship");
}

#[test]
fn test_register_hit_and_miss() {
    let mut warship = three_mast();
    assert!(!warship.register_hit(c(1, 0)));
    assert_eq!(warship.hits(), 0);
    assert!(warship.register_hit(c(0, 0)));
    assert_eq!(warship.hits(), 1);
    assert_eq!(warship.hit_blocks(), &[c(0, 0)]);
}

#[test]
fn test_register_same_block_twice() {
    let mut warship = three_mast();
    assert!(warship.register_hit(c(0, 1)));
    assert!(!warship.register_hit(c(0, 1)));
    assert_eq!(warship.hits(), 1);
}

#[test]
fn test_sunk_after_every_block() {
    let mut warship = three_mast();
    assert!(warship.register_hit(c(0, 0)));
    assert!(warship.register_hit(c(0, 1)));
    assert!(!warship.register_hit(c(0, 3)));
    assert!(!warship.is_sunk());
    assert!(warship.register_hit(c(0, 2)));
    assert_eq!(warship.hits(), 3);
    assert!(warship.is_sunk());
}
