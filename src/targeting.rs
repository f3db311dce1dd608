//! Hunt-then-track guessing logic for the opponent board.
//! The engine only ever sees the outcome of its own shots, never the layout.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

use log::{debug, trace};

use crate::choice::{pick, Chooser};
use crate::common::{Coordinate, HitOutcome, TargetingError};
use crate::config::MAX_BOARD_SIZE;

/// What the engine is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingState {
    /// No partially hit warship is known; shots go anywhere untried.
    Search,
    /// Pursuing a hit but unsunk warship of `size`.
    Track { size: usize },
}

impl TargetingState {
    pub fn tracked_size(&self) -> Option<usize> {
        match self {
            TargetingState::Search => None,
            TargetingState::Track { size } => Some(*size),
        }
    }
}

/// Opponent memory: its own shot history and the hits it has not yet
/// resolved into a sunk warship.
#[derive(Debug, Clone)]
pub struct Targeter {
    board_size: usize,
    tried: BTreeSet<Coordinate>,
    confirmed_by_size: BTreeMap<usize, Vec<Coordinate>>,
    pending_hit_order: Vec<Coordinate>,
    queued: Option<Coordinate>,
    last_guess: Option<Coordinate>,
    remaining_fleet: Option<Vec<usize>>,
}

impl Targeter {
    /// Engine for a board of side `board_size` with an unknown fleet.
    pub fn new(board_size: usize) -> Result<Self, TargetingError> {
        if !(2..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(TargetingError::InvalidBoardSize(board_size));
        }
        Ok(Targeter {
            board_size,
            tried: BTreeSet::new(),
            confirmed_by_size: BTreeMap::new(),
            pending_hit_order: Vec::new(),
            queued: None,
            last_guess: None,
            remaining_fleet: None,
        })
    }

    /// Engine that knows the sizes of the opposing fleet. Searching then
    /// skips cells that no unsunk warship could still cover.
    pub fn with_fleet(board_size: usize, fleet: &[usize]) -> Result<Self, TargetingError> {
        let mut targeter = Self::new(board_size)?;
        targeter.remaining_fleet = Some(fleet.to_vec());
        Ok(targeter)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Every coordinate this engine has guessed.
    pub fn tried(&self) -> &BTreeSet<Coordinate> {
        &self.tried
    }

    /// Confirmed hits on the unsunk warship of `size`, in order of confirmation.
    pub fn confirmed_hits(&self, size: usize) -> &[Coordinate] {
        self.confirmed_by_size
            .get(&size)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Unresolved hits across all sizes, most recent last.
    pub fn pending_hits(&self) -> &[Coordinate] {
        &self.pending_hit_order
    }

    pub fn queued_guess(&self) -> Option<Coordinate> {
        self.queued
    }

    /// Guess still waiting for [`Targeter::feedback`].
    pub fn last_guess(&self) -> Option<Coordinate> {
        self.last_guess
    }

    /// Sizes not yet sunk, when the fleet is known.
    pub fn remaining_fleet(&self) -> Option<&[usize]> {
        self.remaining_fleet.as_deref()
    }

    /// Search, or track the warship of the most recently confirmed hit.
    pub fn state(&self) -> TargetingState {
        self.pending_hit_order
            .last()
            .and_then(|latest| {
                self.confirmed_by_size
                    .iter()
                    .find(|(_, hits)| hits.contains(latest))
                    .map(|(&size, _)| TargetingState::Track { size })
            })
            .unwrap_or(TargetingState::Search)
    }

    /// Coordinates the next guess would be drawn from in the current state.
    pub fn candidates(&self) -> Vec<Coordinate> {
        match self.state() {
            TargetingState::Track { size } => self.candidates_for(size),
            TargetingState::Search => self.search_pool(),
        }
    }

    /// Untried cells of every straight placement of `size` that covers all
    /// confirmed hits of that size and no other tried cell.
    pub fn candidates_for(&self, size: usize) -> Vec<Coordinate> {
        let hits = self.confirmed_hits(size);
        let mut candidates = Vec::new();
        for placement in self.straight_placements(size) {
            if !hits.iter().all(|h| placement.contains(h)) {
                continue;
            }
            if placement
                .iter()
                .any(|c| self.tried.contains(c) && !hits.contains(c))
            {
                continue;
            }
            for c in placement {
                if !hits.contains(&c) && !candidates.contains(&c) {
                    candidates.push(c);
                }
            }
        }
        candidates
    }

    /// Override the next guess with `coordinate`.
    pub fn queue_guess(&mut self, coordinate: Coordinate) -> Result<(), TargetingError> {
        if coordinate.x >= self.board_size || coordinate.y >= self.board_size {
            return Err(TargetingError::OutOfRange(coordinate));
        }
        if self.tried.contains(&coordinate) {
            return Err(TargetingError::AlreadyTried(coordinate));
        }
        self.queued = Some(coordinate);
        Ok(())
    }

    /// Produce the next coordinate to shoot at and remember it as tried.
    /// The previous guess must have had its [`Targeter::feedback`].
    pub fn next_guess<C: Chooser + ?Sized>(&mut self, chooser: &mut C) -> Result<Coordinate, TargetingError> {
        if let Some(pending) = self.last_guess {
            return Err(TargetingError::AwaitingFeedback(pending));
        }
        let guess = match self.queued.take().filter(|c| !self.tried.contains(c)) {
            Some(queued) => queued,
            None => self.draw(chooser)?,
        };
        self.tried.insert(guess);
        self.last_guess = Some(guess);
        debug!("guessing {} ({:?})", guess, self.state());
        Ok(guess)
    }

    /// Feed back the outcome of the last guess and precompute the next one
    /// when a warship is being tracked.
    pub fn feedback<C: Chooser + ?Sized>(
        &mut self,
        outcome: HitOutcome,
        chooser: &mut C,
    ) -> Result<(), TargetingError> {
        if (outcome.was_hit && outcome.ship_size == 0) || (outcome.was_sunk && !outcome.was_hit) {
            return Err(TargetingError::InvalidOutcome(outcome));
        }
        let guess = self.last_guess.take().ok_or(TargetingError::NoPendingGuess)?;

        if outcome.was_hit {
            let size = outcome.ship_size;
            self.confirmed_by_size.entry(size).or_default().push(guess);
            self.pending_hit_order.push(guess);
            if outcome.was_sunk {
                self.resolve(size);
            }
        }

        self.queued = None;
        let state = self.state();
        trace!("{} -> {}, now {:?}", guess, outcome, state);
        if let TargetingState::Track { size } = state {
            let candidates = self.candidates_for(size);
            let next = pick(chooser, &candidates)
                .copied()
                .ok_or(TargetingError::NoCandidate { tracking: Some(size) })?;
            self.queued = Some(next);
        }
        Ok(())
    }

    fn resolve(&mut self, size: usize) {
        let sunk = self.confirmed_by_size.remove(&size).unwrap_or_default();
        self.pending_hit_order.retain(|c| !sunk.contains(c));
        if let Some(fleet) = self.remaining_fleet.as_mut() {
            if let Some(idx) = fleet.iter().position(|&s| s == size) {
                fleet.remove(idx);
            }
        }
        debug!("{} mast warship sunk at {:?}", size, sunk);
    }

    fn draw<C: Chooser + ?Sized>(&self, chooser: &mut C) -> Result<Coordinate, TargetingError> {
        let state = self.state();
        let candidates = self.candidates();
        pick(chooser, &candidates)
            .copied()
            .ok_or(TargetingError::NoCandidate {
                tracking: state.tracked_size(),
            })
    }

    /// Untried cells outside any tracked hit set. With a known fleet, only
    /// cells some unsunk size could still occupy, unless none remain.
    fn search_pool(&self) -> Vec<Coordinate> {
        let untried: Vec<Coordinate> = (0..self.board_size)
            .flat_map(|x| (0..self.board_size).map(move |y| Coordinate::new(x, y)))
            .filter(|c| !self.tried.contains(c))
            .filter(|c| !self.confirmed_by_size.values().any(|hits| hits.contains(c)))
            .collect();
        let Some(fleet) = self.remaining_fleet.as_ref() else {
            return untried;
        };

        let mut reachable = BTreeSet::new();
        let sizes: BTreeSet<usize> = fleet.iter().copied().collect();
        for size in sizes {
            for placement in self.straight_placements(size) {
                if placement.iter().all(|c| !self.tried.contains(c)) {
                    reachable.extend(placement);
                }
            }
        }
        let feasible: Vec<Coordinate> = untried
            .iter()
            .copied()
            .filter(|c| reachable.contains(c))
            .collect();
        if feasible.is_empty() {
            untried
        } else {
            feasible
        }
    }

    /// Every horizontal then vertical placement of `size` on an empty grid.
    fn straight_placements(&self, size: usize) -> Vec<Vec<Coordinate>> {
        let n = self.board_size;
        let mut placements = Vec::new();
        if size == 0 || size > n {
            return placements;
        }
        for y in 0..n {
            for x in 0..=n - size {
                placements.push((0..size).map(|i| Coordinate::new(x + i, y)).collect());
            }
        }
        for x in 0..n {
            for y in 0..=n - size {
                placements.push((0..size).map(|i| Coordinate::new(x, y + i)).collect());
            }
        }
        placements
    }
}
