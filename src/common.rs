//! Common types for Warships: coordinates, hit outcomes, and errors.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// A cell on the board: `x` is the column (rendered as a letter), `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Coordinate::new(x, y)
    }
}

/// Renders as `A0`, `C4`, ... Columns past `Z` have no letter and fall back to `#<x>`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x < 26 {
            write!(f, "{}{}", (b'A' + self.x as u8) as char, self.y)
        } else {
            write!(f, "#{}{}", self.x, self.y)
        }
    }
}

/// Errors from parsing a coordinate label such as `B3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateParseError {
    Empty,
    InvalidColumn(char),
    InvalidRow(String),
}

impl fmt::Display for CoordinateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateParseError::Empty => write!(f, "Empty coordinate"),
            CoordinateParseError::InvalidColumn(c) => {
                write!(f, "Invalid column '{}' - must be a letter", c)
            }
            CoordinateParseError::InvalidRow(r) => {
                write!(f, "Invalid row '{}' - must be a number", r)
            }
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col = chars
            .next()
            .ok_or(CoordinateParseError::Empty)?
            .to_ascii_uppercase();
        if !col.is_ascii_uppercase() {
            return Err(CoordinateParseError::InvalidColumn(col));
        }
        let rest = chars.as_str();
        let y = rest
            .parse::<usize>()
            .map_err(|_| CoordinateParseError::InvalidRow(String::from(rest)))?;
        Ok(Coordinate::new((col as u8 - b'A') as usize, y))
    }
}

/// Outcome of a single shot against a board: `(was_hit, was_sunk, ship_size)`.
///
/// A miss and a repeated shot both read `(false, false, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    pub was_hit: bool,
    pub was_sunk: bool,
    pub ship_size: usize,
}

impl HitOutcome {
    pub const MISS: HitOutcome = HitOutcome {
        was_hit: false,
        was_sunk: false,
        ship_size: 0,
    };

    pub const fn hit(ship_size: usize) -> Self {
        Self {
            was_hit: true,
            was_sunk: false,
            ship_size,
        }
    }

    pub const fn sunk(ship_size: usize) -> Self {
        Self {
            was_hit: true,
            was_sunk: true,
            ship_size,
        }
    }

    pub fn as_tuple(&self) -> (bool, bool, usize) {
        (self.was_hit, self.was_sunk, self.ship_size)
    }
}

impl From<(bool, bool, usize)> for HitOutcome {
    fn from((was_hit, was_sunk, ship_size): (bool, bool, usize)) -> Self {
        Self {
            was_hit,
            was_sunk,
            ship_size,
        }
    }
}

impl fmt::Display for HitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.was_hit, self.was_sunk) {
            (true, true) => write!(f, "{} mast warship sunk", self.ship_size),
            (true, false) => write!(f, "{} mast warship hit", self.ship_size),
            _ => write!(f, "Miss"),
        }
    }
}

/// Errors returned when building a warship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarshipError {
    /// No blocks were given.
    EmptyShape,
    /// The same cell appears twice in the block list.
    DuplicateBlock(Coordinate),
    /// Consecutive blocks are not edge-adjacent.
    InvalidShape(Vec<Coordinate>),
}

impl fmt::Display for WarshipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarshipError::EmptyShape => write!(f, "Warship cannot be empty"),
            WarshipError::DuplicateBlock(c) => write!(f, "Block {} appears more than once", c),
            WarshipError::InvalidShape(blocks) => {
                write!(f, "Blocks do not form a connected shape: ")?;
                write_blocks(f, blocks)
            }
        }
    }
}

/// Why a warship was refused by a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementIssue {
    /// A block lies outside the grid.
    OutOfRange,
    /// A block is already occupied by another warship.
    Overlap,
    /// The warship is longer than the board side.
    TooLong,
    /// The fleet calls for a warship of `expected` blocks next.
    WrongSize { expected: usize },
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board side outside `[2, MAX_BOARD_SIZE]`.
    InvalidSize(usize),
    /// Ship count outside `[1, size]`.
    InvalidShipCount { count: usize, size: usize },
    /// The block list does not make a valid warship.
    Warship(WarshipError),
    /// The warship cannot be placed on this board.
    InvalidPlacement {
        blocks: Vec<Coordinate>,
        issue: PlacementIssue,
    },
    /// Every warship of the fleet is already placed.
    FleetComplete,
    /// No free straight run of this length remains.
    NoAvailablePlacement { length: usize },
    /// Shot coordinate is outside the grid.
    OutOfRange(Coordinate),
}

impl From<WarshipError> for BoardError {
    fn from(err: WarshipError) -> Self {
        BoardError::Warship(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(size) => write!(f, "Invalid board size {}", size),
            BoardError::InvalidShipCount { count, size } => write!(
                f,
                "Cannot place {} warships on a board of size {}",
                count, size
            ),
            BoardError::Warship(e) => write!(f, "Warship error: {}", e),
            BoardError::InvalidPlacement { blocks, issue } => {
                match issue {
                    PlacementIssue::OutOfRange => {
                        write!(f, "Cannot place that warship (out of range): ")?
                    }
                    PlacementIssue::Overlap => {
                        write!(f, "Cannot place that warship (overlaps another warship): ")?
                    }
                    PlacementIssue::TooLong => {
                        write!(f, "Cannot place that warship (longer than the board): ")?
                    }
                    PlacementIssue::WrongSize { expected } => write!(
                        f,
                        "Cannot place that warship (a {} mast warship is next): ",
                        expected
                    )?,
                }
                write_blocks(f, blocks)
            }
            BoardError::FleetComplete => write!(f, "All warships are already placed"),
            BoardError::NoAvailablePlacement { length } => {
                write!(f, "No room left for a {} mast warship", length)
            }
            BoardError::OutOfRange(c) => write!(f, "Coordinates {} out of range", c),
        }
    }
}

/// Errors returned by the targeting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingError {
    InvalidBoardSize(usize),
    /// Nothing left to shoot at. `tracking` names the ship size being
    /// tracked, or `None` when searching.
    NoCandidate { tracking: Option<usize> },
    /// Feedback arrived without a preceding guess.
    NoPendingGuess,
    /// A new guess was asked for before this one got its feedback.
    AwaitingFeedback(Coordinate),
    /// A hit was reported with a zero ship size, or a sink without a hit.
    InvalidOutcome(HitOutcome),
    /// A queued guess lies outside the grid.
    OutOfRange(Coordinate),
    /// A queued guess was already tried.
    AlreadyTried(Coordinate),
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::InvalidBoardSize(size) => write!(f, "Invalid board size {}", size),
            TargetingError::NoCandidate { tracking: Some(size) } => write!(
                f,
                "No consistent placement left for the tracked {} mast warship",
                size
            ),
            TargetingError::NoCandidate { tracking: None } => {
                write!(f, "Every coordinate has already been tried")
            }
            TargetingError::NoPendingGuess => write!(f, "Feedback given without a guess"),
            TargetingError::AwaitingFeedback(c) => {
                write!(f, "No feedback yet for the guess at {}", c)
            }
            TargetingError::InvalidOutcome(o) => {
                write!(f, "Invalid outcome {:?}", o.as_tuple())
            }
            TargetingError::OutOfRange(c) => write!(f, "Coordinates {} out of range", c),
            TargetingError::AlreadyTried(c) => write!(f, "{} was already tried", c),
        }
    }
}

/// Errors surfaced by the game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Targeting(TargetingError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<TargetingError> for GameError {
    fn from(err: TargetingError) -> Self {
        GameError::Targeting(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::Targeting(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordinateParseError {}
#[cfg(feature = "std")]
impl std::error::Error for WarshipError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}

fn write_blocks(f: &mut fmt::Formatter<'_>, blocks: &[Coordinate]) -> fmt::Result {
    write!(f, "[")?;
    for (i, b) in blocks.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", b)?;
    }
    write!(f, "]")
}
