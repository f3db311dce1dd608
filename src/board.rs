//! Game board state: warship placements and the log of shots taken.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Write;

use log::{debug, trace, warn};

use crate::choice::{pick, Chooser};
use crate::common::{BoardError, Coordinate, HitOutcome, PlacementIssue};
use crate::config::{fleet_sizes, MAX_BOARD_SIZE, MAX_FLEET_ATTEMPTS};
use crate::warship::{ShapePolicy, Warship};

/// One side's square grid: its fleet and every coordinate shot at so far.
pub struct Board {
    size: usize,
    num_warships: usize,
    policy: ShapePolicy,
    warships: Vec<Warship>,
    hit_log: BTreeSet<Coordinate>,
}

impl Board {
    /// Create an empty board of side `size` meant to hold `num_warships`.
    pub fn new(size: usize, num_warships: usize) -> Result<Self, BoardError> {
        Self::with_policy(size, num_warships, ShapePolicy::default())
    }

    /// Like [`Board::new`], with an explicit shape policy for added warships.
    pub fn with_policy(
        size: usize,
        num_warships: usize,
        policy: ShapePolicy,
    ) -> Result<Self, BoardError> {
        if !(2..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        if num_warships == 0 || num_warships > size {
            return Err(BoardError::InvalidShipCount {
                count: num_warships,
                size,
            });
        }
        Ok(Board {
            size,
            num_warships,
            policy,
            warships: Vec::new(),
            hit_log: BTreeSet::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_warships(&self) -> usize {
        self.num_warships
    }

    pub fn policy(&self) -> ShapePolicy {
        self.policy
    }

    /// Warships in placement order.
    pub fn warships(&self) -> &[Warship] {
        &self.warships
    }

    /// Every coordinate shot at so far, hits and misses alike.
    pub fn hit_log(&self) -> &BTreeSet<Coordinate> {
        &self.hit_log
    }

    pub fn was_guessed(&self, coordinate: Coordinate) -> bool {
        self.hit_log.contains(&coordinate)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.size && coordinate.y < self.size
    }

    /// Every coordinate of the grid, column by column.
    pub fn all_locations(&self) -> Vec<Coordinate> {
        let mut locations = Vec::with_capacity(self.size * self.size);
        for x in 0..self.size {
            for y in 0..self.size {
                locations.push(Coordinate::new(x, y));
            }
        }
        locations
    }

    /// `true` when no warship occupies `(x, y)`.
    pub fn is_location_available(&self, x: usize, y: usize) -> bool {
        let target = Coordinate::new(x, y);
        !self.warships.iter().any(|w| w.occupies(target))
    }

    /// Every free run of `length` cells along a row, rows top to bottom,
    /// each run left to right.
    pub fn available_horizontal(&self, length: usize) -> Vec<Vec<Coordinate>> {
        let mut locations = Vec::new();
        if length == 0 || length > self.size {
            return locations;
        }
        for y in 0..self.size {
            for x in 0..=self.size - length {
                let run: Vec<Coordinate> = (0..length).map(|i| Coordinate::new(x + i, y)).collect();
                if run.iter().all(|c| self.is_location_available(c.x, c.y)) {
                    locations.push(run);
                }
            }
        }
        locations
    }

    /// Every free run of `length` cells along a column, columns left to
    /// right, each run top to bottom.
    pub fn available_vertical(&self, length: usize) -> Vec<Vec<Coordinate>> {
        let mut locations = Vec::new();
        if length == 0 || length > self.size {
            return locations;
        }
        for x in 0..self.size {
            for y in 0..=self.size - length {
                let run: Vec<Coordinate> = (0..length).map(|i| Coordinate::new(x, y + i)).collect();
                if run.iter().all(|c| self.is_location_available(c.x, c.y)) {
                    locations.push(run);
                }
            }
        }
        locations
    }

    /// Candidates for a warship of `length`, vertical runs first, then
    /// horizontal. A single cell shows up once in each list.
    pub fn available_placements(&self, length: usize) -> Vec<Vec<Coordinate>> {
        let mut locations = self.available_vertical(length);
        locations.extend(self.available_horizontal(length));
        locations
    }

    /// Distinct candidates for a warship of `length`, horizontal first, as a
    /// manual placement picker would list them.
    pub fn placement_options(&self, length: usize) -> Vec<Vec<Coordinate>> {
        let mut options: Vec<Vec<Coordinate>> = Vec::new();
        for run in self
            .available_horizontal(length)
            .into_iter()
            .chain(self.available_vertical(length))
        {
            if !options.contains(&run) {
                options.push(run);
            }
        }
        options
    }

    /// Pick one placement for a warship of `length` uniformly among
    /// [`Board::available_placements`].
    pub fn draw_placement<C: Chooser + ?Sized>(
        &self,
        chooser: &mut C,
        length: usize,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let candidates = self.available_placements(length);
        let drawn = pick(chooser, &candidates)
            .cloned()
            .ok_or(BoardError::NoAvailablePlacement { length })?;
        trace!("drew {:?} for a {} mast warship", drawn, length);
        Ok(drawn)
    }

    /// Place the whole fleet at random: one warship per size, descending
    /// from `min(size, MAX_SHIP_SIZE)`, `num_warships` of them.
    ///
    /// A draw that paints itself into a corner is discarded and the fleet is
    /// redrawn, up to `MAX_FLEET_ATTEMPTS` times. On failure the board keeps
    /// exactly the warships it had before the call.
    pub fn auto_place_fleet<C: Chooser + ?Sized>(&mut self, chooser: &mut C) -> Result<(), BoardError> {
        let sizes = fleet_sizes(self.size, self.num_warships);
        if sizes.len() < self.num_warships {
            return Err(BoardError::InvalidShipCount {
                count: self.num_warships,
                size: self.size,
            });
        }
        let placed_before = self.warships.len();
        let mut last_err = BoardError::NoAvailablePlacement { length: sizes[0] };
        for attempt in 1..=MAX_FLEET_ATTEMPTS {
            match self.try_place_sizes(chooser, &sizes) {
                Ok(()) => {
                    debug!(
                        "placed fleet {:?} on {}x{} board after {} attempt(s)",
                        sizes, self.size, self.size, attempt
                    );
                    return Ok(());
                }
                Err(e) => {
                    trace!("fleet attempt {} failed: {}", attempt, e);
                    self.warships.truncate(placed_before);
                    last_err = e;
                }
            }
        }
        warn!(
            "gave up placing fleet {:?} after {} attempts",
            sizes, MAX_FLEET_ATTEMPTS
        );
        Err(last_err)
    }

    fn try_place_sizes<C: Chooser + ?Sized>(
        &mut self,
        chooser: &mut C,
        sizes: &[usize],
    ) -> Result<(), BoardError> {
        for &length in sizes {
            let blocks = self.draw_placement(chooser, length)?;
            self.add_warship(blocks)?;
        }
        Ok(())
    }

    /// Add a warship made of `blocks` after checking it against the board.
    pub fn add_warship(&mut self, blocks: Vec<Coordinate>) -> Result<(), BoardError> {
        let warship = Warship::with_policy(blocks, self.policy)?;
        if let Some(issue) = self.placement_issue(&warship) {
            debug!("rejected {:?}: {:?}", warship, issue);
            return Err(BoardError::InvalidPlacement {
                blocks: warship.blocks().to_vec(),
                issue,
            });
        }
        trace!("added {:?}", warship);
        self.warships.push(warship);
        Ok(())
    }

    fn placement_issue(&self, warship: &Warship) -> Option<PlacementIssue> {
        if warship.size() > self.size {
            return Some(PlacementIssue::TooLong);
        }
        for block in warship.blocks() {
            if !self.contains(*block) {
                return Some(PlacementIssue::OutOfRange);
            }
            if !self.is_location_available(block.x, block.y) {
                return Some(PlacementIssue::Overlap);
            }
        }
        None
    }

    /// Shoot at `coordinate`.
    ///
    /// A coordinate shot at before reads as `(false, false, 0)` and changes
    /// nothing.
    pub fn hit(&mut self, coordinate: Coordinate) -> Result<HitOutcome, BoardError> {
        if !self.contains(coordinate) {
            return Err(BoardError::OutOfRange(coordinate));
        }
        if !self.hit_log.insert(coordinate) {
            debug!("{} was already hit before", coordinate);
            return Ok(HitOutcome::MISS);
        }
        let outcome = match self.warships.iter_mut().find(|w| w.occupies(coordinate)) {
            Some(warship) => {
                warship.register_hit(coordinate);
                if warship.is_sunk() {
                    HitOutcome::sunk(warship.size())
                } else {
                    HitOutcome::hit(warship.size())
                }
            }
            None => HitOutcome::MISS,
        };
        trace!("shot at {}: {}", coordinate, outcome);
        Ok(outcome)
    }

    /// Returns `true` when there is at least one warship and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.warships.is_empty() && self.warships.iter().all(Warship::is_sunk)
    }

    /// Warship labels in placement order, e.g. `2 mast warship 1 mast warship `.
    pub fn describe_warships(&self) -> String {
        let mut out = String::new();
        for warship in &self.warships {
            let _ = write!(out, "{} ", warship);
        }
        out
    }

    /// Count of unsunk warships per size.
    pub fn remaining_by_size(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for warship in self.warships.iter().filter(|w| !w.is_sunk()) {
            *counts.entry(warship.size()).or_insert(0) += 1;
        }
        counts
    }

    /// One line per unsunk size, largest first: `3 mast warship: x1`.
    pub fn fleet_summary(&self) -> String {
        let mut out = String::new();
        for (size, count) in self.remaining_by_size().iter().rev() {
            let _ = writeln!(out, "{} mast warship: x{}", size, count);
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  num_warships: {},\n  warships: {:?},\n  hit_log: {:?}\n}}",
            self.size, self.num_warships, self.warships, self.hit_log
        )
    }
}
