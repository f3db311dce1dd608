//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Chooser, Coordinate, FirstChoice, GameEngine, GameStatus, HitOutcome,
    Targeter, TargetingState, Warship,
};
